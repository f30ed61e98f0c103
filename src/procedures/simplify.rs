//! Removal of clauses which contribute nothing to a refutation.
//!
//! Two kinds of clause are removed from both the premises and the set of support:
//! - Redundant clauses, which are subsumed by some other clause in either collection.
//!   If 𝐂 ⊂ 𝐃 then any refutation using 𝐃 has a counterpart using 𝐂, and so 𝐃 may be removed.
//! - Tautologies, which contain some literal and its negation, and so are true on every valuation.
//!
//! Each kind is removed in a single sweep over a snapshot of the collections.
//! As subsumption is transitive, removing one subsumed clause never leaves some other subsumed clause without a subsumer, and so a sweep over a snapshot is the same as a sweep which removes clauses as they are found.

use crate::{context::Context, misc::log::targets, structures::clause::Clause};

impl Context {
    /// Removes redundant clauses and then tautologies from the premises and the set of support.
    pub fn simplify(&mut self) {
        self.remove_redundant();
        self.remove_tautologies();
    }

    /// Removes every clause subsumed by some other clause in the premises or the set of support.
    pub fn remove_redundant(&mut self) {
        let union = self.clause_store.union();

        let redundant = union
            .keys()
            .filter(|clause| clause.is_redundant(union.keys().copied()))
            .map(|clause| (*clause).clone())
            .collect::<Vec<Clause>>();

        if !redundant.is_empty() {
            for clause in &redundant {
                log::trace!(target: targets::SIMPLIFICATION, "Redundant: {clause}");
            }
            self.counters.redundant += self.clause_store.remove_all(&redundant);
        }
    }

    /// Removes every tautology from the premises and the set of support.
    pub fn remove_tautologies(&mut self) {
        let tautologies = self
            .clause_store
            .union()
            .into_keys()
            .filter(|clause| clause.is_tautology())
            .cloned()
            .collect::<Vec<Clause>>();

        if !tautologies.is_empty() {
            for clause in &tautologies {
                log::trace!(target: targets::SIMPLIFICATION, "Tautology: {clause}");
            }
            self.counters.tautologies += self.clause_store.remove_all(&tautologies);
        }
    }
}
