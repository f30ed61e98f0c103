//! A database of clauses, together with the derivation of each clause.
//!
//! The clause database is an arena.
//! Each clause seen during a proof attempt is interned, and is afterwards accessed through a [ClauseKey].
//!
//! Interning is by value, so a clause derived twice is stored once, and the first derivation of a clause is the derivation kept.
//! Derivations record keys to parent clauses, and as parents are always interned before the clauses derived from them the derivations of a database form a directed acyclic graph.
//!
//! ```rust
//! # use refute::db::clause::{ClauseDB, Source};
//! # use refute::builder::clause_from_string;
//! let mut clause_db = ClauseDB::default();
//!
//! let p = clause_db.intern(clause_from_string("p").unwrap(), Source::Premise);
//! let not_p = clause_db.intern(clause_from_string("~p").unwrap(), Source::NegatedGoal);
//! let again = clause_db.intern(clause_from_string("p").unwrap(), Source::Resolution(p, not_p));
//!
//! assert_eq!(p, again);
//! assert_eq!(clause_db.get(again).map(|d| d.source), Some(Source::Premise));
//!
//! assert_eq!(clause_db.key_of(&clause_from_string("~p").unwrap()), Some(not_p));
//! assert_eq!(clause_db.derivations().count(), 2);
//! ```

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::{misc::log::targets, structures::clause::Clause};

new_key_type! {
    /// A key to a clause in the clause database.
    pub struct ClauseKey;
}

/// How a clause came to be in the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// A clause of the knowledge base.
    Premise,

    /// A unit clause from the negation of the goal.
    NegatedGoal,

    /// The resolvent of two clauses.
    Resolution(ClauseKey, ClauseKey),
}

/// A clause, how the clause was derived, and when.
#[derive(Clone, Debug)]
pub struct Derivation {
    /// The clause.
    pub clause: Clause,

    /// The source of the clause.
    pub source: Source,

    /// The count of clauses interned before the clause.
    pub step: usize,
}

impl Derivation {
    /// The keys to the parents of the clause, if the clause was derived by resolution.
    pub fn parents(&self) -> Option<(ClauseKey, ClauseKey)> {
        match self.source {
            Source::Resolution(left, right) => Some((left, right)),
            Source::Premise | Source::NegatedGoal => None,
        }
    }
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    derivations: SlotMap<ClauseKey, Derivation>,
    index: HashMap<Clause, ClauseKey>,
}

impl ClauseDB {
    /// Interns a clause, returning a key to the clause.
    ///
    /// If the clause is already in the database the source given is ignored, and the key to the existing clause is returned.
    pub fn intern(&mut self, clause: Clause, source: Source) -> ClauseKey {
        if let Some(key) = self.index.get(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Known: {clause}");
            return *key;
        }

        let step = self.derivations.len();
        log::trace!(target: targets::CLAUSE_DB, "{step}: {clause} from {source:?}");

        let key = self.derivations.insert(Derivation {
            clause: clause.clone(),
            source,
            step,
        });
        self.index.insert(clause, key);
        key
    }

    /// The derivation of the clause at `key`, if it exists.
    pub fn get(&self, key: ClauseKey) -> Option<&Derivation> {
        self.derivations.get(key)
    }

    /// The clause at `key`, if it exists.
    pub fn clause(&self, key: ClauseKey) -> Option<&Clause> {
        self.derivations.get(key).map(|derivation| &derivation.clause)
    }

    /// The key to a clause, if the clause has been interned.
    pub fn key_of(&self, clause: &Clause) -> Option<ClauseKey> {
        self.index.get(clause).copied()
    }

    /// A count of interned clauses.
    pub fn count(&self) -> usize {
        self.derivations.len()
    }

    /// Removes every clause from the database.
    pub fn clear(&mut self) {
        self.derivations.clear();
        self.index.clear();
    }

    /// Every derivation in the database, in no particular order.
    pub fn derivations(&self) -> impl Iterator<Item = (ClauseKey, &Derivation)> {
        self.derivations.iter()
    }
}
