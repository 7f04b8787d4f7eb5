use serde::{Deserialize, Serialize};

use crate::Result;

/// Divisions a consultant pool is assigned into, in score-vector order.
pub const DEFAULT_SLOTS: [&str; 5] = ["Corporate", "Marketing", "Startup", "Finance", "Pro Bono"];

/// How the cover engine picks the lines that cover every zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverRule {
    /// Row-major scan that covers each zero along whichever of its row or
    /// column holds more zeros, preferring the row on ties.
    Greedy,
    /// König cover derived from a maximum matching on the zero cells. Uses the
    /// fewest possible lines.
    #[default]
    Minimum,
}

/// Which pooled agents are candidates in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassScope {
    /// Every agent left in the pool competes for the slots.
    #[default]
    WholePool,
    /// Only the first slot-count agents, in pool order, are considered.
    LeadingAgents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub slots: Vec<String>,
    pub cover_rule: CoverRule,
    pub pass_scope: PassScope,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            cover_rule: CoverRule::default(),
            pass_scope: PassScope::default(),
        }
    }
}

impl SolverConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
