//! Board limits and default configuration values.
//!
//! The defaults mirror the environment variables the generator has always
//! understood (`SZ`, `STONES`, `MIN`, `KM`, `RU`, `PB`, `PW`).

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported board (NxN). SGF coordinates run out past 19 lines
/// for the record consumers this generator targets.
pub const MAX_BOARD_SIZE: usize = 19;

/// Default board size.
pub const DEFAULT_BOARD_SIZE: usize = 13;

/// Default margin line: stones are only sampled on this line or higher.
pub const DEFAULT_MIN_LINE: usize = 2;

/// Orthogonal neighbour offsets (dx, dy): East, South, West, North.
pub const DELTA: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

// =============================================================================
// Session Parameters
// =============================================================================

/// Default number of stones per colour in a random opening.
pub const DEFAULT_STONES: usize = 10;

/// Default number of resamples allowed for a single move index.
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// Default directory for written records.
pub const DEFAULT_OUTPUT_DIR: &str = "sgf";

// =============================================================================
// Record Header Metadata
// =============================================================================

pub const DEFAULT_KOMI: f64 = 6.5;
pub const DEFAULT_RULE: &str = "Japanese";
pub const DEFAULT_BLACK_NAME: &str = "black";
pub const DEFAULT_WHITE_NAME: &str = "white";

/// Letters used for SGF coordinates, index 0 = `a`.
pub const SGF_LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
