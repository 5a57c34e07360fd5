use crate::error::Error;
use crate::grid::Grid;
use crate::{Direction, Match, SearchResult};

/// Scan `grid` for every occurrence of `word` along the four supported
/// directions.
///
/// Matches are reported in discovery order: the east scan first (rows top
/// to bottom, anchors left to right), then the south scan, then for each
/// anchor row the southeast anchors followed by the southwest anchors.
/// Overlapping occurrences are all reported, and a one-character word that
/// sits at a matching cell is reported once per direction.
///
/// Comparison is case-sensitive. A word longer than the grid extent in some
/// direction simply has no anchors there; only an empty word is an error.
pub fn search(grid: &Grid, word: &str) -> Result<SearchResult, Error> {
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }

    let target: Vec<char> = word.chars().collect();
    let length = target.len();
    let rows = grid.rows();
    let columns = grid.columns();

    let mut matches = Vec::new();

    // East (left to right)
    for row in 0..rows {
        for col in 0..anchor_count(columns, length) {
            if matches_at(grid, row, col, Direction::East, &target) {
                matches.push(Match {
                    row,
                    col,
                    direction: Direction::East,
                    length,
                });
            }
        }
    }

    // South (top to bottom)
    for row in 0..anchor_count(rows, length) {
        for col in 0..columns {
            if matches_at(grid, row, col, Direction::South, &target) {
                matches.push(Match {
                    row,
                    col,
                    direction: Direction::South,
                    length,
                });
            }
        }
    }

    // Diagonals: per anchor row, southeast then southwest. The southwest
    // anchors start at column `length - 1`; when the word is wider than the
    // grid that range is empty.
    for row in 0..anchor_count(rows, length) {
        for col in 0..anchor_count(columns, length) {
            if matches_at(grid, row, col, Direction::Southeast, &target) {
                matches.push(Match {
                    row,
                    col,
                    direction: Direction::Southeast,
                    length,
                });
            }
        }
        for col in (length - 1)..columns {
            if matches_at(grid, row, col, Direction::Southwest, &target) {
                matches.push(Match {
                    row,
                    col,
                    direction: Direction::Southwest,
                    length,
                });
            }
        }
    }

    Ok(SearchResult {
        found: !matches.is_empty(),
        matches,
    })
}

/// Number of valid anchor positions along an axis of `extent` cells for a
/// word of `length` characters: `extent - length + 1`, or zero when the
/// word does not fit.
fn anchor_count(extent: usize, length: usize) -> usize {
    (extent + 1).saturating_sub(length)
}

fn matches_at(grid: &Grid, row: usize, col: usize, direction: Direction, target: &[char]) -> bool {
    let (dr, dc) = direction.step();

    target.iter().enumerate().all(|(k, &expected)| {
        // Anchor ranges keep every stepped coordinate in bounds.
        let r = (row as isize + dr * k as isize) as usize;
        let c = (col as isize + dc * k as isize) as usize;
        grid.cell(r, c) == expected
    })
}
