use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mosaic_config::Config;
use mosaic_grid::{GenerationStore, ResizeDebouncer, reveal_complete};
use mosaic_render::{CanvasState, ControlsView, PickerView, viewport_for_cells};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

mod logging;
mod picker;

use picker::ColorPicker;

/// Poll timeout once every tile has settled.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Tile size change for the coarse keys.
const TILE_SIZE_COARSE_STEP: i32 = 5;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let log_file = logging::init(&config);
    info!(
        ?log_file,
        tile_size = config.tile_size,
        speed = config.animation_speed,
        colors = config.palette.len(),
        "starting mosaic"
    );

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Generation parameters and the current tiles.
    store: GenerationStore,
    /// Canvas buffers reused between frames.
    canvas: CanvasState,
    /// Coalesces terminal resize bursts.
    debouncer: ResizeDebouncer,
    /// Source of tile randomness.
    rng: StdRng,
    /// Time between frames while tiles animate.
    frame_interval: Duration,
    /// Is the controls panel visible?
    show_controls: bool,
    /// Highlighted palette entry.
    selected: usize,
    /// Hex input for new colors.
    picker: ColorPicker,
    /// Is the color picker open?
    picking: bool,
    /// Feedback from the last action.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Construct an [`App`] with a given random source.
    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            running: false,
            store: GenerationStore::new(config.generation_params()),
            canvas: CanvasState::new(),
            debouncer: ResizeDebouncer::new(config.resize_quiet()),
            rng,
            frame_interval: config.frame_interval(),
            show_controls: config.show_controls,
            selected: 0,
            picker: ColorPicker::default(),
            picking: false,
            status: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.store
            .set_viewport(viewport_for_cells(size.width, size.height));

        while self.running {
            let now = Instant::now();
            self.tick(now)?;
            terminal.draw(|frame| self.render(frame, now))?;
            self.handle_crossterm_events(now)?;
        }
        Ok(())
    }

    /// Apply any settled resize and rebuild the tiles if parameters changed.
    fn tick(&mut self, now: Instant) -> color_eyre::Result<()> {
        if let Some(viewport) = self.debouncer.poll(now) {
            debug!(width = viewport.width, height = viewport.height, "applying resize");
            self.store.set_viewport(viewport);
        }
        self.store.regenerate_if_dirty(now, &mut self.rng)?;
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let elapsed_ms = self.store.elapsed_ms(now);
        let tile_size = self.store.params().tile_size;

        self.canvas
            .render(frame, area, self.store.tiles(), tile_size, elapsed_ms);

        if self.show_controls {
            let params = self.store.params();
            let controls = ControlsView {
                tile_size: params.tile_size,
                animation_speed: params.animation_speed,
                palette: &params.palette,
                selected: self.selected,
                picker: self.picking.then(|| PickerView {
                    input: self.picker.input(),
                    preview: self.picker.color(),
                }),
                tile_count: self.store.tiles().len(),
                status: self.status.as_deref(),
            };
            controls.render(frame, area);
        }
    }

    /// How long to wait for input before drawing the next frame.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let settled = !self.store.is_dirty()
            && reveal_complete(self.store.tiles(), self.store.elapsed_ms(now));
        let timeout = if settled {
            IDLE_POLL
        } else {
            self.frame_interval
        };
        match self.debouncer.deadline() {
            Some(deadline) => timeout.min(deadline.saturating_duration_since(now)),
            None => timeout,
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a frame-length timeout so animations keep moving.
    fn handle_crossterm_events(&mut self, now: Instant) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout(now))? {
            self.handle_event(event::read()?, Instant::now());
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(width, height) => {
                self.debouncer.push(viewport_for_cells(width, height), now)
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }
        if self.picking {
            self.on_picker_key(key);
            return;
        }
        self.status = None;

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Char('+') | KeyCode::Char('=')) => {
                self.store.adjust_tile_size(1);
            }
            (_, KeyCode::Char('-') | KeyCode::Char('_')) => {
                self.store.adjust_tile_size(-1);
            }
            (_, KeyCode::Char(']')) => {
                self.store.adjust_tile_size(TILE_SIZE_COARSE_STEP);
            }
            (_, KeyCode::Char('[')) => {
                self.store.adjust_tile_size(-TILE_SIZE_COARSE_STEP);
            }
            (_, KeyCode::Char('>') | KeyCode::Char('.')) => {
                self.store.adjust_animation_speed(1);
            }
            (_, KeyCode::Char('<') | KeyCode::Char(',')) => {
                self.store.adjust_animation_speed(-1);
            }
            (_, KeyCode::Char('r')) => self.reset(),
            (_, KeyCode::Char('a')) => self.picking = true,
            (_, KeyCode::Left) => self.select_offset(-1),
            (_, KeyCode::Right) => self.select_offset(1),
            (_, KeyCode::Char('x') | KeyCode::Delete) => self.remove_selected_color(),
            (_, KeyCode::Char('h')) => self.show_controls = !self.show_controls,
            _ => {}
        }
    }

    /// Keys while the color picker is open.
    fn on_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.picking = false,
            KeyCode::Enter => self.add_picked_color(),
            KeyCode::Backspace => self.picker.pop(),
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.picker.push(c);
            }
            _ => {}
        }
    }

    /// Add the picker's color and close the picker.
    fn add_picked_color(&mut self) {
        let Some(color) = self.picker.color() else {
            warn!(input = self.picker.input(), "incomplete color rejected");
            self.status = Some(format!("#{} is not a color", self.picker.input()));
            return;
        };
        self.picking = false;
        if self.store.add_color(color) {
            self.selected = self.store.palette().len() - 1;
            self.status = None;
        } else {
            self.status = Some(format!("{color} is already in the palette"));
        }
    }

    fn remove_selected_color(&mut self) {
        let Some(color) = self.store.palette().get(self.selected) else {
            return;
        };
        if self.store.remove_color(color) {
            self.selected = self.selected.min(self.store.palette().len() - 1);
        }
    }

    /// Move the palette selection, wrapping at either end.
    fn select_offset(&mut self, offset: isize) {
        let len = self.store.palette().len() as isize;
        self.selected = (self.selected as isize + offset).rem_euclid(len) as usize;
    }

    /// Regenerate every tile with fresh identities.
    fn reset(&mut self) {
        self.store.reset();
        debug!(generation = self.store.params().generation_key, "reset requested");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
