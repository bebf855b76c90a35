//! The 4x4 letter grid
//!
//! A Board is immutable once built. It is produced either by weighted-random
//! generation (with an injected random source) or from a fixed preset.

use crate::error::BoardError;
use rand::Rng;
use std::fmt;

/// Number of rows on the board
pub const ROWS: usize = 4;

/// Number of columns on the board
pub const COLS: usize = 4;

/// Number of cells on the board
pub const CELLS: usize = ROWS * COLS;

/// Weighted letter pool for random boards, approximating Spanish letter
/// frequency. Never contains `ñ`.
const LETTER_POOL: &[u8] = b"aaaaaaa\
bbbb\
cccccc\
dddddd\
eeeeeeeeee\
ffff\
gggg\
hhhh\
iiiiiiii\
jj\
kk\
lllllll\
mmmmmmm\
nnnnnnnn\
oooooooo\
pppppp\
q\
rrrrrrrr\
ssssssss\
tttttttt\
uuuuuu\
vv\
ww\
x\
yyyy\
z";

/// A 4x4 grid of lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; COLS]; ROWS],
}

impl Board {
    /// Generate a board from the weighted letter distribution
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Board::random(&mut rng);
    /// assert!(board.letters().iter().all(u8::is_ascii_lowercase));
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = [[0u8; COLS]; ROWS];
        for row in &mut cells {
            for cell in row.iter_mut() {
                *cell = LETTER_POOL[rng.random_range(0..LETTER_POOL.len())];
            }
        }
        Self { cells }
    }

    /// Build a board from a preset grid of rows
    ///
    /// Letters are lowercased; anything outside `a-z` is rejected.
    ///
    /// # Errors
    /// Returns `BoardError` if the grid is not exactly 4x4 or contains a
    /// character outside `a-z`.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::from_preset(&[
    ///     ['c', 'a', 'n', 'n'],
    ///     ['x', 'c', 'i', 'o'],
    ///     ['s', 'o', 'l', 'x'],
    ///     ['m', 'a', 'd', 'e'],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(2, 0), 's');
    ///
    /// assert!(Board::from_preset(&[['a', 'b'], ['c', 'd']]).is_err());
    /// ```
    pub fn from_preset<R: AsRef<[char]>>(grid: &[R]) -> Result<Self, BoardError> {
        if grid.len() != ROWS {
            return Err(BoardError::WrongRowCount {
                expected_rows: ROWS,
                expected_cols: COLS,
                rows: grid.len(),
            });
        }

        let mut cells = [[0u8; COLS]; ROWS];
        for (r, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != COLS {
                return Err(BoardError::WrongColumnCount {
                    row: r,
                    expected: COLS,
                    cols: row.len(),
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                cells[r][c] = board_letter(ch, r, c)?;
            }
        }

        Ok(Self { cells })
    }

    /// Parse a board from a 16-letter string, row by row
    ///
    /// Whitespace and `/` are ignored, so `"cann xcio solx made"` and
    /// `"cann/xcio/solx/made"` are equivalent.
    ///
    /// # Errors
    /// Returns `BoardError` if the string does not hold exactly 16 letters or
    /// contains a character outside `a-z`.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let letters: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if letters.len() != CELLS {
            return Err(BoardError::WrongLetterCount {
                expected: CELLS,
                found: letters.len(),
            });
        }

        let rows: Vec<&[char]> = letters.chunks(COLS).collect();
        Self::from_preset(&rows)
    }

    /// Letter at a row/column
    ///
    /// # Panics
    /// Panics if `row >= 4` or `col >= 4`
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> char {
        self.cells[row][col] as char
    }

    /// All letters in row-major order (index = row * 4 + col)
    #[must_use]
    pub fn letters(&self) -> [u8; CELLS] {
        let mut out = [0u8; CELLS];
        for (r, row) in self.cells.iter().enumerate() {
            out[r * COLS..(r + 1) * COLS].copy_from_slice(row);
        }
        out
    }

    /// Copy of the grid as rows of chars
    #[must_use]
    pub fn rows(&self) -> [[char; COLS]; ROWS] {
        self.cells.map(|row| row.map(char::from))
    }
}

fn board_letter(ch: char, row: usize, col: usize) -> Result<u8, BoardError> {
    let lower = ch.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok(lower as u8)
    } else {
        Err(BoardError::InvalidLetter {
            letter: ch,
            row,
            col,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if r + 1 < ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
