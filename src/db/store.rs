//! The working collections of a proof attempt.
//!
//! - Premises, the clauses of the knowledge base.
//! - The set of support, seeded with the negation of the goal and extended with each resolvent.
//! - The pairs of clauses which have been resolved.
//!
//! Premises and the set of support are ordered by the [order on clauses](crate::structures::clause#order), and so iteration over either collection is deterministic.
//! Each clause is stored alongside its key in the [clause database](crate::db::clause).

use std::collections::{BTreeMap, HashSet};

use crate::{db::clause::ClauseKey, structures::clause::Clause};

/// A collection of clauses, in order, with keys.
pub type ClauseMap = BTreeMap<Clause, ClauseKey>;

/// The clause store.
#[derive(Default)]
pub struct ClauseStore {
    premises: ClauseMap,
    support: ClauseMap,
    resolved: HashSet<(ClauseKey, ClauseKey)>,
}

impl ClauseStore {
    /// Adds a clause to the premises.
    pub fn add_premise(&mut self, clause: Clause, key: ClauseKey) {
        self.premises.insert(clause, key);
    }

    /// Adds a clause to the set of support.
    /// Returns whether the clause was not already in the set of support.
    pub fn add_support(&mut self, clause: Clause, key: ClauseKey) -> bool {
        self.support.insert(clause, key).is_none()
    }

    /// The premises.
    pub fn premises(&self) -> &ClauseMap {
        &self.premises
    }

    /// The set of support.
    pub fn support(&self) -> &ClauseMap {
        &self.support
    }

    /// The union of the premises and the set of support, in order.
    pub fn union(&self) -> BTreeMap<&Clause, ClauseKey> {
        self.premises
            .iter()
            .chain(self.support.iter())
            .map(|(clause, key)| (clause, *key))
            .collect()
    }

    /// Removes each clause in `clauses` from the premises and the set of support.
    /// Returns a count of clauses removed.
    pub fn remove_all(&mut self, clauses: &[Clause]) -> usize {
        let mut count = 0;
        for clause in clauses {
            if self.premises.remove(clause).is_some() {
                count += 1;
            }
            if self.support.remove(clause).is_some() {
                count += 1;
            }
        }
        count
    }

    /// Notes the pair of clauses has been resolved, in both orders.
    pub fn note_resolved(&mut self, left: ClauseKey, right: ClauseKey) {
        self.resolved.insert((left, right));
        self.resolved.insert((right, left));
    }

    /// Whether the pair of clauses has been resolved.
    pub fn is_resolved(&self, left: ClauseKey, right: ClauseKey) -> bool {
        self.resolved.contains(&(left, right))
    }
}
