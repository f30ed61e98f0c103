//! Selection of a pair of clauses to resolve.
//!
//! A pair (𝐂, 𝐃) is a candidate when:
//! - 𝐂 is in the set of support.
//! - 𝐃 is in the set of support or is a premise.
//! - 𝐂 and 𝐃 are distinct, and resolvable.
//! - (𝐂, 𝐃) has not been resolved.
//!
//! Candidates are examined with 𝐂 in order, and for each 𝐂 with 𝐃 in order, and the first candidate is selected.
//! As the order on clauses is total, the selected pair depends only on the contents of the clause store.

use crate::{context::Context, db::ClauseKey, misc::log::targets};

impl Context {
    /// The first candidate pair of clauses for resolution, if one exists.
    pub fn select(&self) -> Option<(ClauseKey, ClauseKey)> {
        let union = self.clause_store.union();

        for (left, left_key) in self.clause_store.support() {
            for (right, right_key) in &union {
                if left == *right || self.clause_store.is_resolved(*left_key, *right_key) {
                    continue;
                }

                if left.is_resolvable(right) {
                    log::trace!(target: targets::SELECTION, "Selected: {left} with {right}");
                    return Some((*left_key, *right_key));
                }
            }
        }

        log::debug!(target: targets::SELECTION, "No candidates");
        None
    }
}
