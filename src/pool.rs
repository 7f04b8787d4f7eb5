use std::collections::HashSet;

use nalgebra::DMatrix;
use serde::Deserialize;

use crate::{Error, Result};

/// An assignable agent and its score for every slot, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Agent {
    pub name: String,
    pub scores: Vec<u32>,
}

impl Agent {
    pub fn new(name: impl Into<String>, scores: impl Into<Vec<u32>>) -> Self {
        Self {
            name: name.into(),
            scores: scores.into(),
        }
    }

    /// Index of the highest score; the earliest slot wins ties.
    pub fn best_slot(&self) -> usize {
        let mut best = 0;
        for (slot, score) in self.scores.iter().enumerate() {
            if *score > self.scores[best] {
                best = slot;
            }
        }
        best
    }
}

/// Roster document consumed by the command line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    /// Overrides the configured slot names when present.
    #[serde(default)]
    pub slots: Option<Vec<String>>,
    pub agents: Vec<Agent>,
}

impl Roster {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Agents not yet assigned, in the order passes see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentPool {
    agents: Vec<Agent>,
    slot_count: usize,
}

impl AgentPool {
    /// Validates that every agent scores each of `slot_count` slots and that
    /// names are unique.
    pub fn new(agents: Vec<Agent>, slot_count: usize) -> Result<Self> {
        if slot_count == 0 {
            return Err(Error::NoSlots);
        }
        if agents.is_empty() {
            return Err(Error::EmptyPool);
        }

        let mut names = HashSet::with_capacity(agents.len());
        for agent in &agents {
            if agent.scores.len() != slot_count {
                return Err(Error::ScoreCount {
                    agent: agent.name.clone(),
                    expected: slot_count,
                    actual: agent.scores.len(),
                });
            }
            if !names.insert(agent.name.as_str()) {
                return Err(Error::DuplicateAgent(agent.name.clone()));
            }
        }

        Ok(Self { agents, slot_count })
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Slot-major preference matrix over the first `candidates` agents: row
    /// `s`, column `a` holds agent `a`'s score for slot `s`.
    pub(crate) fn preferences(&self, candidates: usize) -> DMatrix<i64> {
        let candidates = candidates.min(self.agents.len());
        DMatrix::from_fn(self.slot_count, candidates, |slot, agent| {
            i64::from(self.agents[agent].scores[slot])
        })
    }

    /// Drops the agents at the given pool positions, keeping the rest in order.
    pub(crate) fn remove(&mut self, positions: &[usize]) {
        let mut index = 0;
        self.agents.retain(|_| {
            let keep = !positions.contains(&index);
            index += 1;
            keep
        });
    }
}
