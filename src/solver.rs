use nalgebra::DMatrix;
use tracing::debug;

use crate::{
    cover_zeros, create_additional_zeros, prepare, reduce, zero_matching, Cost, CoverRule, Error,
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    row: usize,
    col: usize,
}

impl Allocation {
    pub fn assignment(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// Minimum-cost assignment on a square cost matrix.
///
/// `costs` is left fully reduced; `assignments` receives one allocation per
/// row, in row order. A greedy cover that claims `side` lines without a zero
/// matching behind them is replaced by the minimum cover for the rest of the
/// run.
pub fn hungarian<T: Cost>(
    costs: &mut DMatrix<T>,
    mut rule: CoverRule,
    assignments: &mut Vec<Allocation>,
) -> Result<()> {
    let side = costs.nrows();
    debug_assert!(costs.is_square());
    assignments.clear();

    reduce(costs);

    let mut rounds = 0;
    let rows = loop {
        let cover = cover_zeros(costs, rule);
        debug!(side, lines = cover.lines(), rounds, "covered zeros");
        if cover.is_complete() {
            match zero_matching(costs) {
                Some(rows) => break rows,
                None if rule == CoverRule::Greedy => {
                    debug!(
                        lines = cover.lines(),
                        "greedy cover overcounted, using minimum cover"
                    );
                    rule = CoverRule::Minimum;
                    continue;
                }
                None => return Err(Error::NoZeroMatching { side }),
            }
        }

        let min = create_additional_zeros(costs, &cover);
        if min.is_zero() {
            return Err(Error::CoverStalled {
                lines: cover.lines(),
                side,
            });
        }
        debug!(?min, "created additional zeros");
        rounds += 1;
    };

    assignments.extend(
        rows.into_iter()
            .enumerate()
            .map(|(row, col)| Allocation { row, col }),
    );

    Ok(())
}

/// Maximum-weight assignment on a rectangular preference matrix.
///
/// The matrix is prepared into a square cost matrix first, so allocations on
/// padding rows or columns refer to no real entry.
pub fn maximize<T: Cost>(
    preferences: &DMatrix<T>,
    rule: CoverRule,
    assignments: &mut Vec<Allocation>,
) -> Result<()> {
    let mut costs = prepare(preferences);
    hungarian(&mut costs, rule, assignments)
}
