/*!
The context --- to which premises are added and within which proof attempts take place.

A context holds a configuration, a collection of premises, and the databases of the most recent proof attempt.
Each call to [prove](Context::prove) rebuilds the databases from the premises, so a context may be used for any number of goals without one attempt leaking into the next.

# Example
```rust
# use refute::context::{Context, ContextState};
# use refute::config::Config;
# use refute::reports::Report;
# use refute::builder::clause_from_string;
let mut the_context = Context::from_config(Config::default());

the_context.add_premise(clause_from_string("p v q").unwrap());

assert!(the_context.prove(clause_from_string("r").unwrap()).is_ok());
assert_eq!(the_context.state, ContextState::Exhausted);
assert_eq!(the_context.report(), Report::Unknown);

assert!(the_context.prove(clause_from_string("q v p").unwrap()).is_ok());
assert_eq!(the_context.report(), Report::True);
```
*/

mod counters;
use std::collections::BTreeSet;

pub use counters::Counters;

use crate::{
    config::Config,
    db::{clause::ClauseDB, store::ClauseStore},
    reports::{Interruption, Outcome, Refutation, Report},
    structures::clause::Clause,
};

/// The state of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, and no proof has been attempted since the last input.
    Input,

    /// A proof attempt is in progress.
    Running,

    /// The negation of the goal was refuted.
    Refuted(Refutation),

    /// No further resolution was possible, and no refutation was found.
    Exhausted,

    /// The proof attempt was stopped before a conclusion was reached.
    Interrupted(Interruption),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Running => write!(f, "Running"),
            Self::Refuted(_) => write!(f, "Refuted"),
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Interrupted(why) => write!(f, "Interrupted ({why})"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The clause database of the most recent proof attempt.
    pub clause_db: ClauseDB,

    /// The clause store of the most recent proof attempt.
    pub clause_store: ClauseStore,

    /// Counters of the most recent proof attempt.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// The premises.
    pub(crate) premises: BTreeSet<Clause>,

    /// The goal of the most recent proof attempt.
    pub(crate) goal: Option<Clause>,
}

impl Context {
    /// A context with the given configuration and no premises.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            clause_db: ClauseDB::default(),
            clause_store: ClauseStore::default(),
            counters: Counters::default(),
            state: ContextState::Input,
            premises: BTreeSet::default(),
            goal: None,
        }
    }

    /// A context with the given configuration and premises.
    pub fn from_premises(config: Config, premises: impl IntoIterator<Item = Clause>) -> Self {
        let mut the_context = Context::from_config(config);
        for premise in premises {
            the_context.add_premise(premise);
        }
        the_context
    }

    /// Adds a premise to the context.
    /// Returns whether the premise was not already present.
    pub fn add_premise(&mut self, clause: Clause) -> bool {
        self.state = ContextState::Input;
        self.premises.insert(clause)
    }

    /// The premises, in order.
    pub fn premises(&self) -> impl Iterator<Item = &Clause> {
        self.premises.iter()
    }

    /// The goal of the most recent proof attempt, if any.
    pub fn goal(&self) -> Option<&Clause> {
        self.goal.as_ref()
    }

    /// A report on the most recent proof attempt.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The outcome of the most recent proof attempt, if the attempt has concluded.
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.state {
            ContextState::Input | ContextState::Running => None,
            ContextState::Refuted(refutation) => Some(Outcome::Refuted(refutation.clone())),
            ContextState::Exhausted => Some(Outcome::Exhausted),
            ContextState::Interrupted(why) => Some(Outcome::Interrupted(*why)),
        }
    }
}
