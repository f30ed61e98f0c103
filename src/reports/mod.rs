/*!
Reports for the context.

- A [Report] is a high-level report on whether the goal of a proof attempt is true.
- An [Outcome] is the terminal state of a proof attempt, with details sufficient to reconstruct a [proof].
*/

use crate::{context::ContextState, db::ClauseKey, structures::clause::Clause};

pub mod proof;

/// High-level reports regarding a proof attempt.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The goal follows from the premises.
    True,

    /// Whether the goal follows from the premises is unknown, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Refuted(_) => Self::True,
            ContextState::Input
            | ContextState::Running
            | ContextState::Exhausted
            | ContextState::Interrupted(_) => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// The contradiction found by a proof attempt.
///
/// A refutation stands in for the empty clause, and so is derived from a pair of complementary unit clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Refutation {
    /// The goal of the proof attempt.
    pub goal: Clause,

    /// The complementary unit clauses from which the contradiction was derived.
    pub parents: (ClauseKey, ClauseKey),

    /// Keys to each unit clause of the negated goal.
    pub negated_goal: Vec<ClauseKey>,
}

/// Why a proof attempt was stopped before reaching a conclusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interruption {
    /// The configured number of iterations was reached.
    StepLimit,

    /// The configured time limit was reached.
    TimeLimit,
}

impl std::fmt::Display for Interruption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLimit => write!(f, "step limit"),
            Self::TimeLimit => write!(f, "time limit"),
        }
    }
}

/// The terminal state of a proof attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The negation of the goal is inconsistent with the premises, and so the goal follows.
    Refuted(Refutation),

    /// Every pair of clauses which could be resolved has been resolved, without contradiction.
    Exhausted,

    /// The attempt was stopped.
    Interrupted(Interruption),
}

impl Outcome {
    /// The high-level report of the outcome.
    ///
    /// ```rust
    /// # use refute::reports::{Interruption, Outcome, Report};
    /// assert_eq!(Outcome::Exhausted.report(), Report::Unknown);
    /// assert_eq!(Outcome::Interrupted(Interruption::StepLimit).report(), Report::Unknown);
    /// ```
    pub fn report(&self) -> Report {
        match self {
            Self::Refuted(_) => Report::True,
            Self::Exhausted | Self::Interrupted(_) => Report::Unknown,
        }
    }
}
