use tracing::{debug, info, warn};

use crate::{
    maximize, AgentPool, Error, Hint, Pass, PassScope, Placement, Report, Result, SolverConfig,
};

/// What happens to the pool once a pass has taken its agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Enough agents remain to fill every slot again.
    Recurse,
    /// Too few remain for a full pass; each gets a best-slot hint.
    ManualReview,
    Done,
}

impl Transition {
    fn after(remaining: usize, slot_count: usize) -> Self {
        if remaining == 0 {
            Transition::Done
        } else if remaining < slot_count {
            Transition::ManualReview
        } else {
            Transition::Recurse
        }
    }
}

/// Assigns the whole pool, one optimal pass at a time.
///
/// Each pass fills every slot in `config.slots` and removes those agents from
/// the pool. Passes repeat while the pool can still fill every slot; whatever is
/// left after that is reported as hints for manual review.
pub fn assign(mut pool: AgentPool, config: &SolverConfig) -> Result<Report> {
    let slots = config.slots.as_slice();
    let slot_count = slots.len();
    if slot_count == 0 {
        return Err(Error::NoSlots);
    }
    if pool.slot_count() != slot_count {
        return Err(Error::SlotMismatch {
            configured: slot_count,
            scored: pool.slot_count(),
        });
    }
    if pool.len() < slot_count {
        return Err(Error::TooFewAgents {
            agents: pool.len(),
            slots: slot_count,
        });
    }

    let mut report = Report::default();
    loop {
        let (pass, taken) = run_pass(&pool, slots, config)?;
        pool.remove(&taken);
        info!(
            pass = report.passes.len() + 1,
            total = pass.total,
            remaining = pool.len(),
            "pass complete"
        );
        report.passes.push(pass);

        match Transition::after(pool.len(), slot_count) {
            Transition::Recurse => continue,
            Transition::ManualReview => {
                warn!(
                    leftover = pool.len(),
                    slots = slot_count,
                    "too few agents for another pass, manual review needed"
                );
                report.hints = hints(&pool, slots);
                break;
            }
            Transition::Done => break,
        }
    }

    Ok(report)
}

/// Runs the engine over the pool and maps slot rows back to agents.
///
/// Returns the pass along with the pool positions it used.
fn run_pass(
    pool: &AgentPool,
    slots: &[String],
    config: &SolverConfig,
) -> Result<(Pass, Vec<usize>)> {
    let candidates = match config.pass_scope {
        PassScope::WholePool => pool.len(),
        PassScope::LeadingAgents => slots.len(),
    };
    let preferences = pool.preferences(candidates);
    debug!(
        slots = slots.len(),
        candidates = preferences.ncols(),
        rule = ?config.cover_rule,
        "running pass"
    );

    let mut assignments = Vec::with_capacity(preferences.ncols().max(slots.len()));
    maximize(&preferences, config.cover_rule, &mut assignments)?;

    let mut placements = Vec::with_capacity(slots.len());
    let mut taken = Vec::with_capacity(slots.len());
    let mut total = 0u64;
    for allocation in assignments.iter().filter(|a| a.row() < slots.len()) {
        let (slot, position) = allocation.assignment();
        let agent = &pool.agents()[position];
        let score = agent.scores[slot];
        total += u64::from(score);
        taken.push(position);
        placements.push(Placement {
            slot: slots[slot].clone(),
            agent: agent.name.clone(),
            score,
        });
    }

    Ok((Pass { placements, total }, taken))
}

fn hints(pool: &AgentPool, slots: &[String]) -> Vec<Hint> {
    pool.agents()
        .iter()
        .map(|agent| Hint {
            agent: agent.name.clone(),
            slot: slots[agent.best_slot()].clone(),
        })
        .collect()
}
