//! SGF game-record output.
//!
//! Records are written in the exact shape existing consumers expect:
//!
//! ```text
//! (;GM[1]SZ[13]PB[black]PW[white]KM[6.5]RU[Japanese];B[dd];W[jj];)
//! ```
//!
//! Moves use the SGF letter pair `<column><row>`, `a` being the first line.
//! This module also reads the short move lists (`B[aa];W[ab];...`) accepted
//! as fixed openings, and names and writes record files.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::board::{Color, Coord};
use crate::constants::SGF_LETTERS;
use crate::position::MoveRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SgfError {
    #[error("malformed move '{entry}' (expected e.g. 'B[dd]')")]
    MalformedMove { entry: String },
    #[error("unknown colour '{color}' in move '{entry}'")]
    UnknownColor { color: char, entry: String },
    #[error("invalid coordinate letter '{letter}' in move '{entry}'")]
    InvalidLetter { letter: char, entry: String },
}

/// Decorative header fields, copied verbatim into the record.
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub size: usize,
    pub black: String,
    pub white: String,
    pub komi: f64,
    pub rule: String,
}

/// Format komi the way the record has always shown it: integral values keep
/// one decimal (`7.0`), others print in shortest form (`6.5`).
pub fn format_komi(komi: f64) -> String {
    if komi.is_finite() && komi.fract() == 0.0 {
        format!("{komi:.1}")
    } else {
        format!("{komi}")
    }
}

fn letter(i: usize) -> char {
    SGF_LETTERS[i] as char
}

/// `B[dd];` style move node.
pub fn move_node(color: Color, c: Coord) -> String {
    format!("{}[{}{}];", color.sgf_letter(), letter(c.x), letter(c.y))
}

/// A complete record: header followed by the accepted moves.
pub struct SgfRecord<'a> {
    pub info: &'a GameInfo,
    pub moves: &'a [MoveRecord],
}

impl<'a> SgfRecord<'a> {
    pub fn new(info: &'a GameInfo, moves: &'a [MoveRecord]) -> Self {
        Self { info, moves }
    }
}

impl fmt::Display for SgfRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        write!(
            f,
            "(;GM[1]SZ[{}]PB[{}]PW[{}]KM[{}]RU[{}];",
            info.size,
            info.black,
            info.white,
            format_komi(info.komi),
            info.rule
        )?;
        for mv in self.moves {
            f.write_str(&move_node(mv.color, mv.coord))?;
        }
        f.write_str(")")
    }
}

/// One entry of a fixed move list, with 1-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedMove {
    pub color: Color,
    pub x: usize,
    pub y: usize,
}

fn letter_index(letter: char, entry: &str) -> Result<usize, SgfError> {
    SGF_LETTERS
        .iter()
        .position(|&b| b as char == letter)
        .ok_or_else(|| SgfError::InvalidLetter {
            letter,
            entry: entry.to_string(),
        })
}

/// Parse a move list such as `B[aa];W[ab];B[cd]`.
///
/// Empty entries (e.g. after a trailing `;`) are skipped. Coordinates are
/// returned 1-based; whether they fit the board is left to the engine.
pub fn parse_move_list(list: &str) -> Result<Vec<ListedMove>, SgfError> {
    list.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let chars: Vec<char> = entry.chars().collect();
            let &[color, '[', col, row, ']'] = chars.as_slice() else {
                return Err(SgfError::MalformedMove {
                    entry: entry.to_string(),
                });
            };
            let color = match color {
                'B' => Color::Black,
                'W' => Color::White,
                other => {
                    return Err(SgfError::UnknownColor {
                        color: other,
                        entry: entry.to_string(),
                    });
                }
            };
            Ok(ListedMove {
                color,
                x: letter_index(col, entry)? + 1,
                y: letter_index(row, entry)? + 1,
            })
        })
        .collect()
}

/// `random_SZ<size>_NOS<stones>_<YYYYmmddHHMMSS>.sgf`
pub fn record_file_name(size: usize, stones: usize, time: NaiveDateTime) -> String {
    format!(
        "random_SZ{size}_NOS{stones}_{}.sgf",
        time.format("%Y%m%d%H%M%S")
    )
}

/// Write `record` to `dir/name`, creating `dir` if needed.
pub fn write_record(dir: &Path, name: &str, record: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, record)?;
    Ok(path)
}
