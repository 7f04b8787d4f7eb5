use nalgebra::DMatrix;

use crate::{Cost, CoverState, LineCover};

/// Exposes new zeros when `cover` holds too few lines.
///
/// The smallest uncovered value is subtracted from every uncovered cell and
/// added to every doubly-covered one; singly-covered cells keep their value.
/// Returns the amount applied, which is zero when no cell was uncovered.
pub fn create_additional_zeros<T: Cost>(costs: &mut DMatrix<T>, cover: &LineCover) -> T {
    debug_assert_eq!(costs.nrows(), cover.side());

    let min = costs
        .iter()
        .zip(cover.states())
        .filter(|(_, state)| *state == CoverState::Uncovered)
        .map(|(value, _)| *value)
        .fold(None, |min: Option<T>, value| match min {
            Some(m) if m <= value => Some(m),
            _ => Some(value),
        })
        .unwrap_or_else(T::zero);

    costs
        .iter_mut()
        .zip(cover.states())
        .for_each(|(value, state)| match state {
            CoverState::Uncovered => *value -= min,
            CoverState::Double => *value += min,
            CoverState::Row | CoverState::Column => {}
        });

    min
}
