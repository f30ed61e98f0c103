//! Key structures, literals and clauses.
//!
//! # Other structures without an implementation
//!
//! ## Formulas
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!
//! A knowledge base is a formula, and proving a goal amounts to showing the formula together with the negation of the goal is inconsistent.
//!
//! ## Languages
//!
//! A *language* 𝓛 is some set of atoms, closed under negation, conjunction, and disjunction. \
//! The language of a proof attempt is the set of atoms appearing in the premises and the goal.
//! As this language is finite, so is the collection of clauses which may be derived during an attempt.

pub mod clause;
pub mod literal;
