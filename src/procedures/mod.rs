/*!
Procedures of a proof attempt.

- [prove] drives the resolution loop, and is the place to start.
- [simplify] removes redundant clauses and tautologies.
- [select] chooses the next pair of clauses to resolve.

Each procedure is implemented as a method on a [context](crate::context::Context).
*/

pub mod prove;
pub mod select;
pub mod simplify;
