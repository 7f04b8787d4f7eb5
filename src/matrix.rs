use nalgebra::DMatrix;

use crate::Cost;

/// Turns a maximization preference matrix into a square minimization cost matrix.
///
/// Every entry `v` becomes `max - v`, so the most preferred cell costs nothing and
/// no entry is negative. The result is zero-padded to a square of side
/// `max(nrows, ncols)`; padding rows act as dummy slots that cost the same for
/// every candidate.
pub fn prepare<T: Cost>(preferences: &DMatrix<T>) -> DMatrix<T> {
    let (h, w) = preferences.shape();
    let max = preferences.max();
    let side = h.max(w);

    DMatrix::from_fn(side, side, |row, col| {
        if row < h && col < w {
            max - preferences[(row, col)]
        } else {
            T::zero()
        }
    })
}

/// Subtracts every row minimum, then every column minimum, in place.
pub fn reduce<T: Cost>(costs: &mut DMatrix<T>) {
    // subtract minimum value from each respective row
    costs.row_iter_mut().for_each(|mut r| {
        let min = r.min();
        r.add_scalar_mut(-min)
    });

    // subtract minimum value from each respective col
    costs.column_iter_mut().for_each(|mut c| {
        let min = c.min();
        c.add_scalar_mut(-min);
    });
}
