use std::collections::HashSet;

use hungarian_pool::{
    assign, cover_zeros, create_additional_zeros, hungarian, prepare, reduce, Agent, AgentPool,
    CoverRule, CoverState, SolverConfig,
};
use nalgebra::DMatrix;
use proptest::prelude::*;

/// Slot-major score tables: 1..=4 slots and up to seven agents, never fewer
/// agents than slots.
fn arb_scores() -> impl Strategy<Value = Vec<Vec<u32>>> {
    (1usize..=4)
        .prop_flat_map(|slots| (Just(slots), slots..=7))
        .prop_flat_map(|(slots, agents)| {
            prop::collection::vec(prop::collection::vec(0u32..20, slots), agents)
        })
}

fn arb_square() -> impl Strategy<Value = DMatrix<i64>> {
    (1usize..=6).prop_flat_map(|n| {
        prop::collection::vec(0i64..15, n * n)
            .prop_map(move |values| DMatrix::from_row_slice(n, n, &values))
    })
}

fn agents(scores: &[Vec<u32>]) -> Vec<Agent> {
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| Agent::new(format!("agent-{i}"), s.clone()))
        .collect()
}

fn config(slot_count: usize) -> SolverConfig {
    SolverConfig {
        slots: (0..slot_count).map(|s| format!("slot-{s}")).collect(),
        ..SolverConfig::default()
    }
}

fn brute_force_best(scores: &[Vec<u32>], slot: usize, used: &mut Vec<bool>) -> u64 {
    if slot == scores[0].len() {
        return 0;
    }
    let mut top = 0;
    for agent in 0..scores.len() {
        if used[agent] {
            continue;
        }
        used[agent] = true;
        let total = u64::from(scores[agent][slot]) + brute_force_best(scores, slot + 1, used);
        top = top.max(total);
        used[agent] = false;
    }
    top
}

proptest! {
    #[test]
    fn first_pass_is_optimal(scores in arb_scores()) {
        let slot_count = scores[0].len();
        let pool = AgentPool::new(agents(&scores), slot_count).expect("valid pool");
        let report = assign(pool, &config(slot_count)).expect("assignment succeeds");

        let best = brute_force_best(&scores, 0, &mut vec![false; scores.len()]);
        prop_assert_eq!(report.passes[0].total, best);
    }

    #[test]
    fn greedy_rule_matches_minimum_rule(scores in arb_scores()) {
        let slot_count = scores[0].len();
        let run = |cover_rule: CoverRule| {
            let pool = AgentPool::new(agents(&scores), slot_count).expect("valid pool");
            let config = SolverConfig { cover_rule, ..config(slot_count) };
            assign(pool, &config).expect("assignment succeeds")
        };
        let greedy = run(CoverRule::Greedy);
        let minimum = run(CoverRule::Minimum);
        prop_assert_eq!(greedy.passes[0].total, minimum.passes[0].total);
        prop_assert_eq!(greedy.passes.len(), minimum.passes.len());
    }

    #[test]
    fn passes_partition_the_pool(scores in arb_scores()) {
        let slot_count = scores[0].len();
        let pool = AgentPool::new(agents(&scores), slot_count).expect("valid pool");
        let report = assign(pool, &config(slot_count)).expect("assignment succeeds");

        let mut seen = HashSet::new();
        for pass in &report.passes {
            prop_assert_eq!(pass.placements.len(), slot_count);
            for name in pass.agents() {
                prop_assert!(seen.insert(name.to_string()));
            }
        }
        for hint in &report.hints {
            prop_assert!(seen.insert(hint.agent.clone()));
        }
        prop_assert_eq!(seen.len(), scores.len());
        prop_assert!(report.hints.len() < slot_count);
        prop_assert_eq!(report.passes.len(), scores.len() / slot_count);
    }

    #[test]
    fn assignment_is_deterministic(scores in arb_scores()) {
        let slot_count = scores[0].len();
        let run = || {
            let pool = AgentPool::new(agents(&scores), slot_count).expect("valid pool");
            assign(pool, &config(slot_count)).expect("assignment succeeds")
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn prepared_costs_are_square_and_non_negative(scores in arb_scores()) {
        let preferences = DMatrix::from_fn(scores[0].len(), scores.len(), |slot, agent| {
            i64::from(scores[agent][slot])
        });
        let costs = prepare(&preferences);
        prop_assert!(costs.is_square());
        prop_assert_eq!(costs.nrows(), scores.len());
        prop_assert!(costs.iter().all(|v| *v >= 0));
    }

    #[test]
    fn reduce_leaves_zero_in_every_line(mut costs in arb_square()) {
        reduce(&mut costs);
        prop_assert!(costs.iter().all(|v| *v >= 0));
        prop_assert!(costs.row_iter().all(|r| r.iter().any(|v| *v == 0)));
        prop_assert!(costs.column_iter().all(|c| c.iter().any(|v| *v == 0)));
    }

    #[test]
    fn covers_reach_every_zero(mut costs in arb_square()) {
        reduce(&mut costs);
        for rule in [CoverRule::Greedy, CoverRule::Minimum] {
            let cover = cover_zeros(&costs, rule);
            let all_covered = costs
                .iter()
                .zip(cover.states())
                .all(|(v, s)| *v != 0 || s != CoverState::Uncovered);
            prop_assert!(all_covered);
        }
        prop_assert!(
            cover_zeros(&costs, CoverRule::Minimum).lines()
                <= cover_zeros(&costs, CoverRule::Greedy).lines()
        );
    }

    #[test]
    fn generated_zeros_keep_costs_valid(mut costs in arb_square()) {
        reduce(&mut costs);
        let cover = cover_zeros(&costs, CoverRule::Minimum);
        prop_assume!(!cover.is_complete());

        let before = costs.clone();
        let min = create_additional_zeros(&mut costs, &cover);
        prop_assert!(min > 0);
        prop_assert!(costs.iter().all(|v| *v >= 0));

        let n = costs.nrows();
        let mut created = false;
        for row in 0..n {
            for col in 0..n {
                match cover.state(row, col) {
                    CoverState::Uncovered => created |= costs[(row, col)] == 0,
                    CoverState::Row | CoverState::Column => {
                        prop_assert_eq!(costs[(row, col)], before[(row, col)]);
                    }
                    CoverState::Double => {}
                }
            }
        }
        prop_assert!(created);
        prop_assert!(cover_zeros(&costs, CoverRule::Minimum).lines() >= cover.lines());
    }

    #[test]
    fn matching_uses_distinct_zero_cells(costs in arb_square()) {
        let mut reduced = costs.clone();
        let mut assignments = Vec::new();
        hungarian(&mut reduced, CoverRule::Minimum, &mut assignments).expect("solvable");

        let mut cols = HashSet::new();
        for allocation in &assignments {
            prop_assert_eq!(reduced[allocation.assignment()], 0);
            prop_assert!(cols.insert(allocation.col()));
        }
        prop_assert_eq!(assignments.len(), costs.nrows());
    }
}
