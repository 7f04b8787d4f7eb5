use std::fmt;

use serde::Serialize;

/// One filled slot: who got it and the score they gave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub slot: String,
    pub agent: String,
    pub score: u32,
}

/// Result of one optimization pass, one placement per slot in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pass {
    pub placements: Vec<Placement>,
    pub total: u64,
}

impl Pass {
    pub fn agents(&self) -> impl Iterator<Item = &str> + '_ {
        self.placements.iter().map(|p| p.agent.as_str())
    }
}

/// Suggested slot for an agent left over after the last full pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub agent: String,
    pub slot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub passes: Vec<Pass>,
    /// Needs manual review; empty unless the pool ran short of a full pass.
    pub hints: Vec<Hint>,
}

impl Report {
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.passes.iter().flat_map(|p| p.placements.iter())
    }

    pub fn total(&self) -> u64 {
        self.passes.iter().map(|p| p.total).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pass in &self.passes {
            writeln!(f, "\nAssignments:")?;
            for placement in &pass.placements {
                writeln!(f, "{}: {}", placement.slot, placement.agent)?;
            }
            writeln!(f, "Total Preference Points: {}", pass.total)?;
        }

        if !self.hints.is_empty() {
            writeln!(f, "\nManually check for these consultant pairings:")?;
            for hint in &self.hints {
                writeln!(f, "{}: {}", hint.slot, hint.agent)?;
            }
        }

        Ok(())
    }
}
