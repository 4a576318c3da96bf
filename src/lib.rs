//! Fuseki-Rust: random Go opening generator.
//!
//! This crate places legal opening stones on a Go board and writes the result
//! as an SGF game record. The board-state engine handles stone placement,
//! liberty counting, captures, the ko rule, and legal-move enumeration.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and configuration defaults
//! - [`board`] - Grid, colours and coordinates
//! - [`group`] - Flood-fill group search and liberty counting
//! - [`capture`] - Capture detection and removal
//! - [`ko`] - Single-stone ko tracking
//! - [`position`] - The position engine (`play`, `valid_moves`)
//! - [`session`] - Random sampling and fixed move-list replay
//! - [`sgf`] - Game-record output and move-list parsing
//! - [`config`] - Run configuration and validation
//!
//! ## Example
//!
//! ```
//! use fuseki_rust::board::Color;
//! use fuseki_rust::position::Position;
//! use fuseki_rust::sgf::{GameInfo, SgfRecord};
//!
//! let mut pos = Position::new(9, 1).unwrap();
//! pos.play(0, Color::Black, 3, 4).unwrap();
//! pos.play(1, Color::White, 7, 7).unwrap();
//!
//! let info = GameInfo {
//!     size: 9,
//!     black: "black".into(),
//!     white: "white".into(),
//!     komi: 6.5,
//!     rule: "Japanese".into(),
//! };
//! let record = SgfRecord::new(&info, pos.moves()).to_string();
//! assert_eq!(record, "(;GM[1]SZ[9]PB[black]PW[white]KM[6.5]RU[Japanese];B[cd];W[gg];)");
//! ```

pub mod board;
pub mod capture;
pub mod config;
pub mod constants;
pub mod group;
pub mod ko;
pub mod position;
pub mod session;
pub mod sgf;
