//! Grid layout and stagger scheduling.

use mosaic_core::{GenerationParams, Tile, TileId};
use rand::Rng;
use thiserror::Error;

/// Delay added per unit of grid distance from the center, at speed 1.
const STAGGER_STEP_MS: f64 = 150.0;
/// Upper bound of the random delay jitter, at speed 1.
const DELAY_JITTER_MS: f64 = 800.0;
/// Minimum reveal duration, at speed 1.
const BASE_DURATION_MS: f64 = 500.0;
/// Upper bound of the random extra duration, at speed 1.
const DURATION_JITTER_MS: f64 = 300.0;

const MIN_SCALE: f64 = 0.8;
const MAX_SCALE: f64 = 1.2;
const FULL_TURN_DEG: f64 = 360.0;

/// Upper bound of the per-tile reveal-order jitter.
const MAX_ORDER_JITTER: f64 = 0.3;

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(u32),
    #[error("animation speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
}

/// Row and column counts covering a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl GridDimensions {
    /// Rows and columns needed to cover the viewport; the last row and
    /// column may overhang its edge.
    pub fn covering(viewport: Viewport, tile_size: u32) -> Result<Self, GridError> {
        if tile_size == 0 {
            return Err(GridError::InvalidTileSize(tile_size));
        }
        Ok(Self {
            rows: viewport.height.div_ceil(tile_size),
            cols: viewport.width.div_ceil(tile_size),
        })
    }

    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// The cell the reveal radiates from.
    pub fn center(&self) -> (u32, u32) {
        (self.rows / 2, self.cols / 2)
    }
}

/// Uniform sample from `[0, max)`.
fn uniform<R: Rng>(rng: &mut R, max: f64) -> f64 {
    rng.random::<f64>() * max
}

/// Uniform sample from `[low, high)` for `0 <= low < high`.
///
/// The addition can round up onto `high`, so such a sample is moved to the
/// largest value below it.
fn uniform_between<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    let value = low + uniform(rng, high - low);
    if value < high {
        value
    } else {
        f64::from_bits(high.to_bits() - 1)
    }
}

/// Generate the full tile set for a viewport.
///
/// Tiles are returned in reveal order: ascending by
/// `delay * (1 - order_jitter)`, so the result is roughly delay-ordered
/// with some scatter.
pub fn generate_tiles<R: Rng>(
    viewport: Viewport,
    params: &GenerationParams,
    rng: &mut R,
) -> Result<Vec<Tile>, GridError> {
    let speed = params.animation_speed;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(GridError::InvalidSpeed(speed));
    }

    let tile_size = params.tile_size;
    let dims = GridDimensions::covering(viewport, tile_size)?;
    let (center_row, center_col) = dims.center();
    let colors = params.palette.colors();

    let stagger_step = STAGGER_STEP_MS / speed;
    let delay_jitter = DELAY_JITTER_MS / speed;
    let base_duration = BASE_DURATION_MS / speed;
    let duration_jitter = DURATION_JITTER_MS / speed;

    let mut tiles = Vec::with_capacity(dims.tile_count());

    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let dr = row as f64 - center_row as f64;
            let dc = col as f64 - center_col as f64;
            let distance = (dr * dr + dc * dc).sqrt();

            let delay = distance * stagger_step + uniform(rng, delay_jitter);
            let duration =
                uniform_between(rng, base_duration, base_duration + duration_jitter);

            let color = colors[rng.random_range(0..colors.len())];

            let rotation = uniform(rng, FULL_TURN_DEG);
            let scale = uniform_between(rng, MIN_SCALE, MAX_SCALE);
            let order_jitter = uniform(rng, MAX_ORDER_JITTER);

            tiles.push(Tile {
                id: TileId {
                    row,
                    col,
                    generation: params.generation_key,
                },
                row,
                col,
                x: col * tile_size,
                y: row * tile_size,
                color,
                delay,
                duration,
                rotation,
                scale,
                order_jitter,
            });
        }
    }

    tiles.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use mosaic_core::{Palette, Rgb};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn params(tile_size: u32, animation_speed: f64) -> GenerationParams {
        GenerationParams {
            tile_size,
            animation_speed,
            ..Default::default()
        }
    }

    #[test]
    fn test_tile_count_matches_ceiling_formula() {
        let mut rng = StdRng::seed_from_u64(1);
        for (width, height, tile_size) in [(100, 100, 50), (101, 99, 50), (1920, 1080, 30), (7, 3, 10)]
        {
            let tiles =
                generate_tiles(Viewport::new(width, height), &params(tile_size, 1.0), &mut rng)
                    .unwrap();
            let expected = height.div_ceil(tile_size) * width.div_ceil(tile_size);
            assert_eq!(tiles.len(), expected as usize, "{width}x{height} @ {tile_size}");
        }
    }

    #[test]
    fn test_four_tiles_for_100px_at_50() {
        let mut rng = StdRng::seed_from_u64(2);
        let tiles = generate_tiles(Viewport::new(100, 100), &params(50, 1.0), &mut rng).unwrap();

        let cells: HashSet<_> = tiles.iter().map(|t| (t.row, t.col, t.x, t.y)).collect();
        let expected: HashSet<_> = [
            (0, 0, 0, 0),
            (0, 1, 50, 0),
            (1, 0, 0, 50),
            (1, 1, 50, 50),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_positions_cover_viewport() {
        let mut rng = StdRng::seed_from_u64(3);
        let (width, height, tile_size) = (333, 251, 40);
        let tiles =
            generate_tiles(Viewport::new(width, height), &params(tile_size, 1.0), &mut rng).unwrap();

        for tile in &tiles {
            assert_eq!(tile.x, tile.col * tile_size);
            assert_eq!(tile.y, tile.row * tile_size);
            assert!(tile.x < width + tile_size);
            assert!(tile.y < height + tile_size);
        }
    }

    #[test]
    fn test_random_fields_within_ranges() {
        let mut rng = StdRng::seed_from_u64(4);
        for speed in [0.5, 1.0, 2.0] {
            let tiles =
                generate_tiles(Viewport::new(640, 480), &params(20, speed), &mut rng).unwrap();
            for tile in &tiles {
                assert!((0.0..360.0).contains(&tile.rotation));
                assert!((0.8..1.2).contains(&tile.scale));
                assert!((0.0..0.3).contains(&tile.order_jitter));
                assert!(tile.delay >= 0.0);
                assert!(tile.duration > 0.0);
                assert!(tile.duration >= 500.0 / speed);
                assert!(tile.duration < 800.0 / speed);
            }
        }
    }

    /// Always returns the largest possible value.
    struct MaxRng;

    impl rand::RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }

    #[test]
    fn test_largest_draw_stays_below_upper_bounds() {
        for speed in [0.5, 1.0, 2.0] {
            let tiles =
                generate_tiles(Viewport::new(90, 90), &params(30, speed), &mut MaxRng).unwrap();
            for tile in &tiles {
                assert!(tile.scale < 1.2, "scale {}", tile.scale);
                assert!(tile.scale > 1.19);
                assert!(tile.duration < 800.0 / speed, "duration {}", tile.duration);
                assert!(tile.rotation < 360.0);
                assert!(tile.order_jitter < 0.3);
            }
        }
    }

    #[test]
    fn test_delay_grows_with_distance_from_center() {
        let mut rng = StdRng::seed_from_u64(5);
        let speed = 1.0;
        let tiles = generate_tiles(Viewport::new(300, 300), &params(30, speed), &mut rng).unwrap();
        let dims = GridDimensions::covering(Viewport::new(300, 300), 30).unwrap();
        let (cr, cc) = dims.center();

        for tile in &tiles {
            let dr = tile.row as f64 - cr as f64;
            let dc = tile.col as f64 - cc as f64;
            let base = (dr * dr + dc * dc).sqrt() * 150.0 / speed;
            assert!(tile.delay >= base);
            assert!(tile.delay < base + 800.0 / speed);
        }
    }

    #[test]
    fn test_colors_come_from_palette() {
        let mut rng = StdRng::seed_from_u64(6);
        let palette = Palette::new([
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
        ])
        .unwrap();
        let params = GenerationParams {
            palette: palette.clone(),
            ..Default::default()
        };
        let tiles = generate_tiles(Viewport::new(600, 600), &params, &mut rng).unwrap();

        assert!(tiles.iter().all(|t| palette.contains(t.color)));
        // 400 tiles over 3 colors: every color shows up
        let used: HashSet<_> = tiles.iter().map(|t| t.color).collect();
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_sorted_by_order_key() {
        let mut rng = StdRng::seed_from_u64(7);
        let tiles = generate_tiles(Viewport::new(800, 600), &params(25, 1.3), &mut rng).unwrap();
        assert!(
            tiles
                .windows(2)
                .all(|pair| pair[0].order_key() <= pair[1].order_key())
        );
    }

    #[test]
    fn test_new_generation_key_gives_new_ids() {
        let mut rng = StdRng::seed_from_u64(8);
        let first_params = params(50, 1.0);
        let second_params = GenerationParams {
            generation_key: first_params.generation_key + 1,
            ..first_params.clone()
        };
        let viewport = Viewport::new(200, 150);

        let first = generate_tiles(viewport, &first_params, &mut rng).unwrap();
        let second = generate_tiles(viewport, &second_params, &mut rng).unwrap();

        let first_ids: HashSet<_> = first.iter().map(|t| t.id).collect();
        assert!(second.iter().all(|t| !first_ids.contains(&t.id)));

        let cells = |tiles: &[Tile]| -> HashSet<_> {
            tiles.iter().map(|t| (t.row, t.col, t.x, t.y)).collect()
        };
        assert_eq!(cells(&first), cells(&second));
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let viewport = Viewport::new(320, 200);
        let a = generate_tiles(viewport, &params(30, 1.0), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_tiles(viewport, &params(30, 1.0), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_viewport_gives_no_tiles() {
        let mut rng = StdRng::seed_from_u64(10);
        let tiles = generate_tiles(Viewport::new(0, 500), &params(30, 1.0), &mut rng).unwrap();
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_rejects_zero_tile_size() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(
            generate_tiles(Viewport::new(100, 100), &params(0, 1.0), &mut rng),
            Err(GridError::InvalidTileSize(0))
        );
    }

    #[test]
    fn test_rejects_bad_speed() {
        let mut rng = StdRng::seed_from_u64(12);
        for speed in [0.0, -1.0, f64::INFINITY] {
            assert!(matches!(
                generate_tiles(Viewport::new(100, 100), &params(30, speed), &mut rng),
                Err(GridError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn test_center_of_odd_and_even_grids() {
        let odd = GridDimensions::covering(Viewport::new(90, 90), 30).unwrap();
        assert_eq!(odd.center(), (1, 1));
        let even = GridDimensions::covering(Viewport::new(120, 60), 30).unwrap();
        assert_eq!(even.center(), (1, 2));
    }
}
