//! Determines whether a goal follows from the premises of a context.
//!
//! # Overview
//!
//! [prove](crate::context::Context::prove) is refutation by resolution with a set of support.
//!
//! The goal is negated, and as the goal is a disjunction its negation is a conjunction of unit clauses.
//! These unit clauses make the initial set of support.
//! Then, each resolution step takes at least one clause from the set of support, and adds the resolvent to the set of support.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!        +------------------------------------------------+
//!        |                                                |
//!        ⌄                                                |
//!   +----------+     +--------+   a pair   +---------+    |
//! --| simplify |---->| select |----------->| resolve |----+
//!   +----------+     +--------+            +---------+
//!                        |                      |
//!                        | no pair              | a pair of units
//!                        ⌄                      ⌄
//!                    exhausted               refuted
//! ```
//!
//! The terminal check is made on the pair selected, before resolution: two resolvable unit clauses are complementary, and their resolvent would be the empty clause.
//! A resolvent which is empty is also a refutation, though with the classical rule this happens only for a pair of units.
//!
//! # Termination
//!
//! The atoms of a proof attempt are those of the premises and the goal, and no step introduces an atom.
//! So, there are finitely many clauses which may be derived.
//! Each step notes the pair resolved, and no pair is resolved twice, so the loop ends after finitely many steps.
//! Still, finitely many may be very many, and limits on steps and time may be [configured](crate::config::Config).
//!
//! # Example
//!
//! ```rust
//! # use refute::config::Config;
//! # use refute::context::Context;
//! # use refute::reports::Outcome;
//! # use refute::builder::clause_from_string;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.add_premise(clause_from_string("p").unwrap());
//!
//! let outcome = the_context.prove(clause_from_string("p").unwrap());
//! assert!(matches!(outcome, Ok(Outcome::Refuted(_))));
//! assert_eq!(the_context.counters.resolvents, 0);
//! ```

use std::time::{Duration, Instant};

use crate::{
    context::{Context, ContextState, Counters},
    db::{
        clause::Source,
        store::ClauseStore,
        ClauseKey,
    },
    misc::log::targets,
    reports::{Interruption, Outcome, Refutation},
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

impl Context {
    /// Attempts to prove `goal` from the premises of the context.
    ///
    /// The only error is an empty goal.
    /// A goal which does not follow from the premises results in [Outcome::Exhausted].
    pub fn prove(&mut self, goal: Clause) -> Result<Outcome, ErrorKind> {
        if goal.is_empty() {
            return Err(err::StateError::NoGoal.into());
        }

        log::info!(target: targets::RESOLUTION, "Proving: {goal}");

        let negated_goal = self.setup(&goal);
        self.goal = Some(goal.clone());
        self.state = ContextState::Running;

        let start = Instant::now();

        let outcome = 'resolution_loop: loop {
            if let Some(why) = self.interruption(start.elapsed()) {
                log::info!(target: targets::RESOLUTION, "Interrupted: {why}");
                break 'resolution_loop Outcome::Interrupted(why);
            }

            self.counters.total_iterations += 1;

            self.simplify();

            let Some((left_key, right_key)) = self.select() else {
                break 'resolution_loop Outcome::Exhausted;
            };

            let (left, right) = match (
                self.clause_db.clause(left_key),
                self.clause_db.clause(right_key),
            ) {
                (Some(left), Some(right)) => (left, right),
                _ => {
                    log::error!(target: targets::RESOLUTION, "Selected clause missing from database");
                    break 'resolution_loop Outcome::Exhausted;
                }
            };

            if left.is_unit() && right.is_unit() {
                log::info!(target: targets::RESOLUTION, "Refuted by {left} and {right}");
                break 'resolution_loop Outcome::Refuted(Refutation {
                    goal: goal.clone(),
                    parents: (left_key, right_key),
                    negated_goal: negated_goal.clone(),
                });
            }

            let resolvent = left.resolve(right, self.config.resolution_rule.value);
            log::trace!(target: targets::RESOLUTION, "{left} and {right} resolve to {resolvent}");

            // Only the cancelling rule derives the empty clause from a pair which is not a pair of units.
            if resolvent.is_empty() {
                log::info!(target: targets::RESOLUTION, "Refuted by {left} and {right}");
                break 'resolution_loop Outcome::Refuted(Refutation {
                    goal: goal.clone(),
                    parents: (left_key, right_key),
                    negated_goal: negated_goal.clone(),
                });
            }

            let key = self
                .clause_db
                .intern(resolvent.clone(), Source::Resolution(left_key, right_key));

            self.clause_store.note_resolved(left_key, right_key);
            self.clause_store.add_support(resolvent, key);
            self.counters.resolvents += 1;
        };

        self.counters.time = start.elapsed();

        self.state = match &outcome {
            Outcome::Refuted(refutation) => ContextState::Refuted(refutation.clone()),
            Outcome::Exhausted => ContextState::Exhausted,
            Outcome::Interrupted(why) => ContextState::Interrupted(*why),
        };

        log::info!(target: targets::RESOLUTION, "{goal} is {} after {} iterations", outcome.report(), self.counters.total_iterations);

        Ok(outcome)
    }

    /// Rebuilds the databases of the context from the premises and the negation of `goal`.
    /// Returns keys to the unit clauses of the negated goal.
    fn setup(&mut self, goal: &Clause) -> Vec<ClauseKey> {
        self.clause_db.clear();
        self.clause_store = ClauseStore::default();
        self.counters = Counters::default();

        for premise in &self.premises {
            let key = self.clause_db.intern(premise.clone(), Source::Premise);
            self.clause_store.add_premise(premise.clone(), key);
        }

        let mut negated_goal = Vec::default();
        for unit in goal.negate() {
            let key = self.clause_db.intern(unit.clone(), Source::NegatedGoal);
            self.clause_store.add_support(unit, key);
            negated_goal.push(key);
        }

        negated_goal
    }

    /// The reason to stop the current proof attempt, if there is one.
    fn interruption(&self, elapsed: Duration) -> Option<Interruption> {
        let step_limit = self.config.step_limit.value;
        if step_limit > 0 && self.counters.total_iterations >= step_limit {
            return Some(Interruption::StepLimit);
        }

        let time_limit = self.config.time_limit.value;
        if time_limit > Duration::from_secs(0) && elapsed > time_limit {
            return Some(Interruption::TimeLimit);
        }

        None
    }
}
