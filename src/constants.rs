//! Board limits, root defaults and handicap placements.
//!
//! All coordinates here are 1-based SGF-style `(x, y)` pairs with `(1, 1)`
//! in the top-left corner.

use crate::board::Point;

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest board the converter accepts.
pub const MAX_BOARD_SIZE: usize = 19;

/// Board size assumed when a record does not declare one.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Largest coordinate expressible with a single lowercase letter.
pub const MAX_SGF_COORD: i32 = 26;

// =============================================================================
// Root Properties
// =============================================================================

/// SGF file format version written to every output.
pub const FILE_FORMAT: &str = "4";

/// SGF game type for Go.
pub const GAME_TYPE_GO: &str = "1";

/// Output charset; inputs are always re-encoded to UTF-8.
pub const CHARSET: &str = "UTF-8";

// =============================================================================
// Handicap Placement (19x19)
// =============================================================================

/// Largest handicap the record formats can express.
pub const MAX_HANDICAP: i64 = 9;

const HOSHI_2: [Point; 2] = [(16, 4), (4, 16)];
const HOSHI_3: [Point; 3] = [(16, 4), (4, 16), (16, 16)];
const HOSHI_4: [Point; 4] = [(16, 4), (4, 16), (16, 16), (4, 4)];
const HOSHI_5: [Point; 5] = [(16, 4), (4, 16), (16, 16), (4, 4), (10, 10)];
const HOSHI_6: [Point; 6] = [(16, 4), (4, 16), (16, 16), (4, 4), (4, 10), (16, 10)];
const HOSHI_7: [Point; 7] = [
    (16, 4),
    (4, 16),
    (16, 16),
    (4, 4),
    (4, 10),
    (16, 10),
    (10, 10),
];
const HOSHI_8: [Point; 8] = [
    (16, 4),
    (4, 16),
    (16, 16),
    (4, 4),
    (4, 10),
    (16, 10),
    (10, 4),
    (10, 16),
];
const HOSHI_9: [Point; 9] = [
    (16, 4),
    (4, 16),
    (16, 16),
    (4, 4),
    (4, 10),
    (16, 10),
    (10, 4),
    (10, 16),
    (10, 10),
];

/// Fixed handicap stones on a 19x19 board.
///
/// Handicaps of 0 and 1 place no stones; anything above 9 is not a valid
/// handicap and yields an empty slice as well.
pub fn handicap_points_19(handicap: i64) -> &'static [Point] {
    match handicap {
        2 => &HOSHI_2,
        3 => &HOSHI_3,
        4 => &HOSHI_4,
        5 => &HOSHI_5,
        6 => &HOSHI_6,
        7 => &HOSHI_7,
        8 => &HOSHI_8,
        9 => &HOSHI_9,
        _ => &[],
    }
}
