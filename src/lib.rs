//! Unbalanced maximization assignment.
//!
//! A pool of agents, each scoring every slot of a small fixed set, is assigned
//! pass by pass: every pass fills each slot with exactly one agent so that the
//! summed scores are maximal, using an adjusted Hungarian/Munkres engine. Once
//! fewer agents remain than there are slots, the leftovers get a best-slot
//! hint for manual review instead.
//!
//! The engine pieces are public so they can be driven one step at a time:
//! [`prepare`], [`reduce`], [`cover_zeros`], [`create_additional_zeros`] and
//! [`zero_matching`]. [`hungarian`] chains them on a cost matrix and [`assign`]
//! runs the whole pool.

mod config;
mod cover;
mod error;
mod matching;
mod matrix;
mod orchestrator;
mod pool;
mod report;
mod solver;
mod zeros;

pub use config::{CoverRule, PassScope, SolverConfig, DEFAULT_SLOTS};
pub use cover::{cover_zeros, CoverState, LineCover};
pub use error::{Error, Result};
pub use matching::zero_matching;
pub use matrix::{prepare, reduce};
pub use orchestrator::assign;
pub use pool::{Agent, AgentPool, Roster};
pub use report::{Hint, Pass, Placement, Report};
pub use solver::{hungarian, maximize, Allocation};
pub use zeros::create_additional_zeros;

/// Element type the engine can reduce, cover and match over.
pub trait Cost:
    nalgebra::Scalar
    + Copy
    + nalgebra::SimdValue<Element = Self>
    + nalgebra::SimdPartialOrd
    + num_traits::Zero
    + std::ops::Sub<Self, Output = Self>
    + std::ops::SubAssign
    + std::ops::AddAssign
    + std::ops::Neg<Output = Self>
    + PartialOrd
{
}

impl<T> Cost for T where
    T: nalgebra::Scalar
        + Copy
        + nalgebra::SimdValue<Element = T>
        + nalgebra::SimdPartialOrd
        + num_traits::Zero
        + std::ops::Sub<T, Output = T>
        + std::ops::SubAssign
        + std::ops::AddAssign
        + std::ops::Neg<Output = T>
        + PartialOrd
{
}
