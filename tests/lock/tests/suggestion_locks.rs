//! Suggestion engine lock tests.
//!
//! Proves:
//! 1. The single-diagnosis answer is the head of the accumulated list
//! 2. Same cursor and config yield the same suggestions (N=10 in-process)
//! 3. Noise 0 never corrupts
//! 4. Padding fills to exactly `K` distinct values without the truth
//! 5. Corrupted requests follow the per-tier schedule
//! 6. Corrupted lists never contain a heuristic value

use std::collections::BTreeSet;

use dining_kernel::operators::action::ActionKind;
use dining_kernel::operators::apply::legal_actions;
use dining_kernel::state::scenario::ScenarioState;
use dining_kernel::state::start::StartCondition;
use dining_kernel::state::symbol::Symbolic;
use dining_kernel::video::reachable::reachable_states;
use dining_suggest::advisor::optimal_action;
use dining_suggest::cursor::RngCursor;
use dining_suggest::diagnosis::{ordered_diagnoses, Diagnosis};
use dining_suggest::engine::{suggest_actions, suggest_diagnoses};
use dining_suggest::policy::{SessionConfig, MAX_DIAGNOSIS_SUGGESTIONS};
use dining_suggest::schedule::SCHEDULE_PERIOD;
use lock_tests::golden::{full_runner, truthful_config, GOLDEN};

fn noisy(noise_level: f64, pad: bool) -> SessionConfig {
    SessionConfig {
        max_diagnosis_suggestions: MAX_DIAGNOSIS_SUGGESTIONS,
        max_action_suggestions: 3,
        pad_suggestions: pad,
        noise_level,
        show_diagnosis_suggestions: true,
        show_action_suggestions: true,
    }
}

// ---------------------------------------------------------------------------
// 1. Priority ordering
// ---------------------------------------------------------------------------

#[test]
fn first_diagnosis_heads_the_accumulated_list() {
    for state in reachable_states() {
        let all = ordered_diagnoses(&state, None, true);
        let first = ordered_diagnoses(&state, None, false);
        assert_eq!(first.len(), 1, "{state}");
        assert_eq!(first[0], all[0], "{state}");
        if all.contains(&Diagnosis::NoProblem) {
            assert_eq!(all, vec![Diagnosis::NoProblem], "{state}");
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Cursor determinism
// ---------------------------------------------------------------------------

#[test]
fn same_cursor_same_trajectory_n10() {
    let golden = &GOLDEN[2];
    let run = || {
        let runner = full_runner();
        runner
            .open_session("p", noisy(0.5, true), RngCursor::new(99))
            .expect("open");
        runner
            .replay("p", golden.start.state(), &golden.actions())
            .expect("replay")
    };
    let first = run();
    for i in 1..=10 {
        assert_eq!(run(), first, "run {i} diverged");
    }
}

#[test]
fn each_enabled_call_advances_the_cursor() {
    let state = StartCondition::AtTable.state();
    let config = noisy(0.0, false);
    let (_, after_dx) = suggest_diagnoses(&state, None, &config, 0, RngCursor::INITIAL);
    let (_, after_ax) = suggest_actions(&state, None, &config, 0, after_dx);
    assert_ne!(after_dx, RngCursor::INITIAL);
    assert_ne!(after_ax, after_dx);

    let hidden = SessionConfig {
        show_diagnosis_suggestions: false,
        show_action_suggestions: false,
        ..config
    };
    let (dx, c1) = suggest_diagnoses(&state, None, &hidden, 0, RngCursor::INITIAL);
    let (ax, c2) = suggest_actions(&state, None, &hidden, 0, c1);
    assert!(dx.values.is_empty() && ax.values.is_empty());
    assert_eq!(c2, RngCursor::INITIAL);
}

// ---------------------------------------------------------------------------
// 3. No-corruption baseline
// ---------------------------------------------------------------------------

#[test]
fn zero_noise_never_corrupts_over_twenty_steps() {
    let runner = full_runner();
    runner
        .open_session("p", truthful_config(), RngCursor::INITIAL)
        .expect("open");
    let mut state = StartCondition::AtTableOccludingAboveMug.state();
    for i in 0..20 {
        let dx_truth = ordered_diagnoses(&state, None, true);
        let ax_truth = optimal_action(&state, None);
        let resp = runner
            .step(&dining_harness::runner::StepRequest {
                session_id: "p".into(),
                state: state.to_tuple().iter().map(|s| (*s).to_string()).collect(),
                action: None,
            })
            .expect("step");
        assert!(!resp.diagnosis_suggestions.corrupted, "step {i}");
        assert!(!resp.action_suggestions.corrupted, "step {i}");
        assert_eq!(resp.diagnosis_suggestions.values, dx_truth, "step {i}");
        assert_eq!(resp.action_suggestions.values, ax_truth, "step {i}");

        // Follow the advice to keep moving through the space.
        if let Some(&next) = ax_truth.first() {
            state = dining_kernel::operators::apply::apply(&state, next).expect("advice is legal");
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Padding bound
// ---------------------------------------------------------------------------

#[test]
fn padding_fills_to_exactly_k_distinct() {
    let mut cursor = RngCursor::new(7);
    for (index, state) in reachable_states().into_iter().enumerate() {
        let request = u64::try_from(index).unwrap_or(0);
        for k in 1..=MAX_DIAGNOSIS_SUGGESTIONS {
            let config = SessionConfig {
                max_diagnosis_suggestions: k,
                ..noisy(0.5, true)
            };
            let (dx, next) = suggest_diagnoses(&state, None, &config, request, cursor);
            cursor = next;
            assert_eq!(dx.values.len(), k, "{state} k={k}");
            let distinct: BTreeSet<Diagnosis> = dx.values.iter().copied().collect();
            assert_eq!(distinct.len(), k, "{state} k={k}: {:?}", dx.values);
        }
    }
}

#[test]
fn action_padding_stops_at_legal_actions() {
    let config = SessionConfig {
        max_action_suggestions: 17,
        ..noisy(0.0, true)
    };
    for state in reachable_states().into_iter().filter(|s| !s.is_terminal()) {
        let (ax, _) = suggest_actions(&state, None, &config, 0, RngCursor::INITIAL);
        let legal = legal_actions(&state);
        assert_eq!(ax.values.len(), legal.len(), "{state}");
        for action in &ax.values {
            assert!(legal.contains(action), "{action} illegal at {state}");
            if let ActionKind::Navigate(target) | ActionKind::Look(target) = action.kind() {
                assert_ne!(target, state.relocalized_location(), "{action} offered at {state}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Noise schedule
// ---------------------------------------------------------------------------

fn corrupted_indices(noise_level: f64, state: &ScenarioState) -> (Vec<u64>, Vec<u64>) {
    let config = noisy(noise_level, false);
    let mut cursor = RngCursor::INITIAL;
    let mut dx_hits = Vec::new();
    let mut ax_hits = Vec::new();
    for request in 0..SCHEDULE_PERIOD * 2 {
        let (dx, c) = suggest_diagnoses(state, None, &config, request, cursor);
        let (ax, c) = suggest_actions(state, None, &config, request, c);
        cursor = c;
        if dx.corrupted {
            dx_hits.push(request);
        }
        if ax.corrupted {
            ax_hits.push(request);
        }
    }
    (dx_hits, ax_hits)
}

#[test]
fn schedule_corrupts_tier_requests_per_cycle() {
    let state = StartCondition::AtCounterOccluding.state();
    for tier in 0..=10u32 {
        let (dx, ax) = corrupted_indices(f64::from(tier) / 10.0, &state);
        assert_eq!(dx.len(), 2 * tier as usize, "tier {tier}");
        assert_eq!(ax.len(), 2 * tier as usize, "tier {tier}");
    }
}

#[test]
fn schedule_tier_three_offsets() {
    let state = StartCondition::AtCounterOccluding.state();
    let (dx, ax) = corrupted_indices(0.3, &state);
    assert_eq!(dx, vec![0, 2, 5, 10, 12, 15]);
    assert_eq!(ax, vec![3, 5, 8, 13, 15, 18]);
}

#[test]
fn schedule_is_monotone_in_noise() {
    let state = StartCondition::AtTable.state();
    let mut previous: BTreeSet<u64> = BTreeSet::new();
    for tier in 0..=10u32 {
        let (dx, _) = corrupted_indices(f64::from(tier) / 10.0, &state);
        let current: BTreeSet<u64> = dx.into_iter().collect();
        assert!(previous.is_subset(&current), "tier {tier}");
        previous = current;
    }
}

// ---------------------------------------------------------------------------
// 6. Corrupted lists exclude the truth
// ---------------------------------------------------------------------------

#[test]
fn corrupted_lists_exclude_heuristic_values() {
    let config = noisy(1.0, true);
    let mut cursor = RngCursor::INITIAL;
    for state in reachable_states() {
        let dx_truth = ordered_diagnoses(&state, None, true);
        let ax_truth = optimal_action(&state, None);
        let (dx, c) = suggest_diagnoses(&state, None, &config, 0, cursor);
        let (ax, c) = suggest_actions(&state, None, &config, 0, c);
        cursor = c;
        assert!(dx.corrupted);
        for d in &dx.values {
            assert!(!dx_truth.contains(d), "{} leaked at {state}", d.symbol());
        }
        for a in &ax.values {
            assert!(!ax_truth.contains(a), "{a} leaked at {state}");
        }
    }
}
