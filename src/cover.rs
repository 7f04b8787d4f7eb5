use nalgebra::DMatrix;

use crate::{Cost, CoverRule};

/// Line coverage of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverState {
    Uncovered,
    Row,
    Column,
    Double,
}

/// Lines covering every zero of a square cost matrix, along with the per-cell
/// state they leave behind.
#[derive(Debug, Clone)]
pub struct LineCover {
    lines: usize,
    grid: DMatrix<CoverState>,
}

impl LineCover {
    fn new(side: usize) -> Self {
        Self {
            lines: 0,
            grid: DMatrix::from_element(side, side, CoverState::Uncovered),
        }
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn side(&self) -> usize {
        self.grid.nrows()
    }

    /// Enough lines that a zero-only perfect matching may exist.
    pub fn is_complete(&self) -> bool {
        self.lines >= self.side()
    }

    pub fn state(&self, row: usize, col: usize) -> CoverState {
        self.grid[(row, col)]
    }

    /// Cell states in the column-major order of the cost matrix.
    pub fn states(&self) -> impl Iterator<Item = CoverState> + '_ {
        self.grid.iter().copied()
    }

    fn cover_row(&mut self, row: usize) {
        self.grid.row_mut(row).iter_mut().for_each(|s| {
            *s = match s {
                CoverState::Column | CoverState::Double => CoverState::Double,
                _ => CoverState::Row,
            }
        });
        self.lines += 1;
    }

    fn cover_column(&mut self, col: usize) {
        self.grid.column_mut(col).iter_mut().for_each(|s| {
            *s = match s {
                CoverState::Row | CoverState::Double => CoverState::Double,
                _ => CoverState::Column,
            }
        });
        self.lines += 1;
    }
}

/// Covers every zero of the square `costs` matrix with row and column lines.
///
/// The cover is rebuilt from scratch on every call.
pub fn cover_zeros<T: Cost>(costs: &DMatrix<T>, rule: CoverRule) -> LineCover {
    debug_assert!(costs.is_square());
    match rule {
        CoverRule::Greedy => greedy_cover(costs),
        CoverRule::Minimum => minimum_cover(costs),
    }
}

fn greedy_cover<T: Cost>(costs: &DMatrix<T>) -> LineCover {
    let n = costs.nrows();
    let mut cover = LineCover::new(n);

    for row in 0..n {
        for col in 0..n {
            if !costs[(row, col)].is_zero() {
                continue;
            }

            // more zeros down the column than along the row -> vertical line
            let vertical = zero_balance(costs, row, col) > 0;
            let covered = match cover.state(row, col) {
                CoverState::Double => true,
                CoverState::Column => vertical,
                CoverState::Row => !vertical,
                CoverState::Uncovered => false,
            };
            if covered {
                continue;
            }

            if vertical {
                cover.cover_column(col);
            } else {
                cover.cover_row(row);
            }
        }
    }

    cover
}

/// Zeros in the column of `(row, col)` minus zeros in its row.
fn zero_balance<T: Cost>(costs: &DMatrix<T>, row: usize, col: usize) -> isize {
    let column = costs.column(col).iter().filter(|v| v.is_zero()).count();
    let across = costs.row(row).iter().filter(|v| v.is_zero()).count();
    column as isize - across as isize
}

fn minimum_cover<T: Cost>(costs: &DMatrix<T>) -> LineCover {
    let n = costs.nrows();
    let mut col_match: Vec<Option<usize>> = vec![None; n];
    let mut matched_rows = vec![false; n];

    for row in 0..n {
        let mut seen = vec![false; n];
        matched_rows[row] = augment(costs, row, &mut seen, &mut col_match);
    }

    // rows reachable from an unmatched row over alternating zero paths
    let mut row_seen = matched_rows.iter().map(|m| !m).collect::<Vec<_>>();
    let mut col_seen = vec![false; n];
    let mut pending = (0..n).filter(|&r| row_seen[r]).collect::<Vec<_>>();
    while let Some(row) = pending.pop() {
        for col in 0..n {
            if col_seen[col] || !costs[(row, col)].is_zero() {
                continue;
            }
            col_seen[col] = true;
            if let Some(next) = col_match[col] {
                if !row_seen[next] {
                    row_seen[next] = true;
                    pending.push(next);
                }
            }
        }
    }

    let mut cover = LineCover::new(n);
    (0..n).filter(|&r| !row_seen[r]).for_each(|r| cover.cover_row(r));
    (0..n).filter(|&c| col_seen[c]).for_each(|c| cover.cover_column(c));
    cover
}

/// Kuhn's augmenting step: tries to match `row` to a zero column, re-routing
/// earlier matches where needed.
fn augment<T: Cost>(
    costs: &DMatrix<T>,
    row: usize,
    seen: &mut [bool],
    col_match: &mut [Option<usize>],
) -> bool {
    for col in 0..costs.ncols() {
        if seen[col] || !costs[(row, col)].is_zero() {
            continue;
        }
        seen[col] = true;

        let free = match col_match[col] {
            None => true,
            Some(other) => augment(costs, other, seen, col_match),
        };
        if free {
            col_match[col] = Some(row);
            return true;
        }
    }
    false
}
