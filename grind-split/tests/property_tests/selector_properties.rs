//! Property-based tests for next-split selection
//!
//! Tests:
//! - selection agrees with a direct model of the rule
//! - the queue never grows and loses every resolved candidate
//! - tie-breaks do not depend on queue order
//! - the split budget stops selection

use grind_core::{ExprId, ExprManager, Goal, GrindConfig, MatcherInfo, ScriptedHost};
use grind_split::SplitEngine;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// Undecided disjunction.
    Ready,
    /// Disjunction with a side known true.
    Resolved,
    /// Undecided conjunction.
    NotReady,
    /// Matcher application with this many arms.
    Match(u32),
    /// Plain atom.
    Inert,
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Ready),
        Just(Kind::Resolved),
        Just(Kind::NotReady),
        (1u32..5).prop_map(Kind::Match),
        Just(Kind::Inert),
    ]
}

struct Scenario {
    exprs: ExprManager,
    host: ScriptedHost,
    goal: Goal,
    hyps: Vec<(ExprId, Kind, u32)>,
}

impl Scenario {
    fn build(layout: &[(Kind, u32)]) -> Self {
        let mut exprs = ExprManager::new();
        let mut host = ScriptedHost::new();
        let mut hyps = Vec::with_capacity(layout.len());
        let mut resolved_sides = Vec::new();

        for (i, &(kind, generation)) in layout.iter().enumerate() {
            let p = exprs.mk_fvar(&format!("p{i}"));
            let q = exprs.mk_fvar(&format!("q{i}"));
            let h = match kind {
                Kind::Ready => exprs.mk_or(p, q),
                Kind::Resolved => {
                    resolved_sides.push(p);
                    exprs.mk_or(p, q)
                }
                Kind::NotReady => exprs.mk_and(p, q),
                Kind::Match(num_alts) => {
                    let name = exprs.intern(&format!("f{i}.match_1"));
                    host.add_matcher(
                        name,
                        MatcherInfo {
                            num_params: 0,
                            num_discrs: 1,
                            num_alts,
                        },
                    );
                    let head = exprs.mk_const_named(name);
                    let mut args = vec![q, p];
                    for j in 0..num_alts {
                        args.push(exprs.mk_fvar(&format!("alt{i}.{j}")));
                    }
                    exprs.mk_app(head, &args)
                }
                Kind::Inert => p,
            };
            host.set_generation(h, generation);
            hyps.push((h, kind, generation));
        }

        let goal = host.new_goal(&mut exprs, hyps.iter().map(|&(h, _, _)| h));
        for p in resolved_sides {
            host.assert_true(goal.mvar_id, p).expect("fresh goal is registered");
        }
        Self {
            exprs,
            host,
            goal,
            hyps,
        }
    }

    fn num_cases(kind: Kind) -> Option<u32> {
        match kind {
            Kind::Ready => Some(2),
            Kind::Match(n) => Some(n),
            _ => None,
        }
    }

    /// Fewest cases first, then the strictly larger generation, then queue order.
    fn expected(&self) -> Option<ExprId> {
        let mut best: Option<(ExprId, u32, u32)> = None;
        for &(h, kind, generation) in &self.hyps {
            let Some(n) = Self::num_cases(kind) else {
                continue;
            };
            best = match best {
                Some((_, n0, g0)) if n < n0 || (n == n0 && g0 < generation) => {
                    Some((h, n, generation))
                }
                None => Some((h, n, generation)),
                keep => keep,
            };
        }
        best.map(|(h, _, _)| h)
    }

    fn select(&mut self, engine: &mut SplitEngine) -> Option<ExprId> {
        engine
            .select_next_split(&self.exprs, &self.host, &mut self.goal)
            .expect("scripted oracle does not fail")
            .map(|sel| sel.hyp)
    }

    fn pending(&self) -> Vec<ExprId> {
        self.goal.split.candidates.iter().collect()
    }
}

fn layouts() -> impl Strategy<Value = Vec<(Kind, u32)>> {
    prop::collection::vec((kind(), 0u32..6), 0..12)
}

proptest! {
    /// The selected candidate is the one the model picks.
    #[test]
    fn selection_matches_model(layout in layouts()) {
        let mut scenario = Scenario::build(&layout);
        let mut engine = SplitEngine::new();
        let expected = scenario.expected();
        prop_assert_eq!(scenario.select(&mut engine), expected);
    }

    /// One selection drops exactly the resolved and inert candidates plus the
    /// selected one, and keeps everything else.
    #[test]
    fn queue_shrinks_by_dropped_and_selected(layout in layouts()) {
        let mut scenario = Scenario::build(&layout);
        let mut engine = SplitEngine::new();
        let before = scenario.pending().len();
        let dropped = scenario
            .hyps
            .iter()
            .filter(|(_, k, _)| matches!(k, Kind::Resolved | Kind::Inert))
            .count();

        let selected = scenario.select(&mut engine);
        let pending = scenario.pending();
        prop_assert_eq!(pending.len(), before - dropped - usize::from(selected.is_some()));

        for &(h, kind, _) in &scenario.hyps {
            let kept = Some(h) != selected && matches!(kind, Kind::Ready | Kind::NotReady | Kind::Match(_));
            prop_assert_eq!(pending.contains(&h), kept);
        }
    }

    /// Selecting repeatedly on unchanged facts strictly shrinks the queue
    /// until nothing is ready, and never brings a dropped candidate back.
    #[test]
    fn repeated_selection_terminates(layout in layouts()) {
        let mut scenario = Scenario::build(&layout);
        let mut engine = SplitEngine::new();
        let mut len = scenario.pending().len();
        let mut picked = Vec::new();

        while let Some(h) = scenario.select(&mut engine) {
            let now = scenario.pending().len();
            prop_assert!(now < len);
            len = now;
            prop_assert!(!picked.contains(&h));
            picked.push(h);
        }

        let ready = scenario
            .hyps
            .iter()
            .filter(|(_, k, _)| Scenario::num_cases(*k).is_some())
            .count();
        prop_assert_eq!(picked.len(), ready);
        for &(h, kind, _) in &scenario.hyps {
            prop_assert_eq!(scenario.pending().contains(&h), kind == Kind::NotReady);
        }
    }

    /// Equal case counts go to the larger generation in either queue order.
    #[test]
    fn tie_break_ignores_queue_order(
        num_alts in 1u32..5,
        g1 in 0u32..20,
        g2 in 0u32..20,
    ) {
        prop_assume!(g1 != g2);
        let newer = if g1 < g2 { 1 } else { 0 };

        for layout in [
            [(Kind::Match(num_alts), g1), (Kind::Match(num_alts), g2)],
            [(Kind::Match(num_alts), g2), (Kind::Match(num_alts), g1)],
        ] {
            let mut scenario = Scenario::build(&layout);
            let mut engine = SplitEngine::new();
            let idx = if layout[0].1 == g1 { newer } else { 1 - newer };
            let expected = scenario.hyps[idx].0;
            prop_assert_eq!(scenario.select(&mut engine), Some(expected));
            prop_assert_eq!(scenario.pending(), vec![scenario.hyps[1 - idx].0]);
        }
    }

    /// Fewer cases win whatever the generations.
    #[test]
    fn width_beats_generation(g_narrow in 0u32..100, g_wide in 0u32..100) {
        let layout = [(Kind::Match(4), g_wide), (Kind::Ready, g_narrow)];
        let mut scenario = Scenario::build(&layout);
        let mut engine = SplitEngine::new();
        prop_assert_eq!(scenario.select(&mut engine), Some(scenario.hyps[1].0));
        prop_assert_eq!(scenario.pending(), vec![scenario.hyps[0].0]);
    }

    /// Once the path has used up the budget nothing is selected and no
    /// splittable candidate is lost.
    #[test]
    fn budget_stops_selection(layout in layouts(), used in 0u32..6, budget in 0u32..6) {
        let mut scenario = Scenario::build(&layout);
        for _ in 0..used {
            scenario.goal.split.inc_splits();
        }
        let mut engine = SplitEngine::with_config(GrindConfig::default().with_splits(budget));
        let expected = scenario.expected();
        let selected = scenario.select(&mut engine);

        if used >= budget {
            prop_assert_eq!(selected, None);
            let pending = scenario.pending();
            for &(h, kind, _) in &scenario.hyps {
                if Scenario::num_cases(kind).is_some() || kind == Kind::NotReady {
                    prop_assert!(pending.contains(&h));
                }
            }
            if expected.is_some() {
                prop_assert_eq!(engine.stats().budget_exhausted, 1);
            }
        } else {
            prop_assert_eq!(selected, expected);
        }
    }
}
