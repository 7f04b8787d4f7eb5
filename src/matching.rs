use nalgebra::DMatrix;

use crate::Cost;

/// Finds a row-to-column bijection that uses only zero cells.
///
/// Rows are filled in order, each taking the lowest free zero column and
/// backtracking on dead ends, so the first such bijection in lexicographic
/// order is returned. `None` means the matrix has no zero-only perfect matching.
pub fn zero_matching<T: Cost>(costs: &DMatrix<T>) -> Option<Vec<usize>> {
    let n = costs.nrows();
    let mut rows = vec![0; n];
    let mut occupied_cols = vec![false; n];

    search(costs, 0, &mut rows, &mut occupied_cols).then_some(rows)
}

fn search<T: Cost>(
    costs: &DMatrix<T>,
    row: usize,
    rows: &mut [usize],
    occupied_cols: &mut [bool],
) -> bool {
    if row == rows.len() {
        return true;
    }

    for col in 0..costs.ncols() {
        if occupied_cols[col] || !costs[(row, col)].is_zero() {
            continue;
        }

        rows[row] = col;
        occupied_cols[col] = true;
        if search(costs, row + 1, rows, occupied_cols) {
            return true;
        }
        occupied_cols[col] = false;
    }

    false
}
