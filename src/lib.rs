//! xyz2sgf: convert legacy Go game records to SGF.
//!
//! Reads Tygem `.gib`, WBaduk `.ngf` and PandaNet `.ugf`/`.ugi` records and
//! writes them as SGF (FF[4], UTF-8). While converting, every node of the
//! game tree is replayed on its own copy of the board, with captures and
//! suicide resolved, so callers can inspect the position at any point.
//!
//! ## Modules
//!
//! - [`board`] - Board state, stone placement, captures
//! - [`apply`] - Applying move and setup properties to a board
//! - [`node`] - Property sets and tree nodes
//! - [`tree`] - Game tree and per-branch simulation
//! - [`sgf`] - SGF writer and reader
//! - [`formats`] - GIB, NGF and UGF readers
//! - [`convert`] - Loading, normalizing and saving records
//! - [`constants`] - Board limits and handicap placements
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```
//! use xyz2sgf::convert::load_str;
//! use xyz2sgf::formats::Format;
//! use xyz2sgf::sgf::to_sgf;
//!
//! let tree = load_str("STO 0 2 1 15 3\n", Format::Gib).unwrap();
//! assert_eq!(to_sgf(&tree), "(;FF[4]GM[1]CA[UTF-8]SZ[19];B[pd])\n");
//! ```

pub mod apply;
pub mod board;
pub mod constants;
pub mod convert;
pub mod error;
pub mod formats;
pub mod node;
pub mod sgf;
pub mod tree;

pub use error::{Error, Result};
