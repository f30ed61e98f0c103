/*!
Databases for holding information relevant to a proof attempt.

- The [clause database](crate::db::clause)
  + An arena of every clause seen during a proof attempt, each with a derivation.
- The [clause store](crate::db::store)
  + The premises and set of support from which pairs of clauses are selected for resolution, and a record of the pairs which have been resolved.

Both databases are made fresh for each proof attempt, and so nothing derived while proving one goal is available when proving another.
*/

pub mod clause;
pub mod store;

pub use clause::ClauseKey;
