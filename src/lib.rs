//! A library for proving that a propositional clause is entailed by a knowledge base of clauses.
//!
//! refute decides entailment by refutation: the goal clause is negated, the negation is placed in a *set of support*, and resolution is applied between the set of support and the knowledge base until either two complementary unit clauses meet (a contradiction, so the goal is entailed) or no unexplored pair of clauses remains (the goal is unknown).
//!
//! # Orientation
//!
//! As with most things here, the library is built around a [context].
//!
//! A context is made from a [configuration](crate::config), premises are added to the context, and a goal is [proved](crate::context::Context::prove) against those premises.
//! Internally, a proof attempt is viewed in terms of two databases:
//! - A [clause database](crate::db::clause), an arena which interns every clause seen during the attempt and records how each clause was derived.
//! - A [clause store](crate::db::store), the working collections of premises and set of support, together with the pairs of clauses already resolved.
//!
//! The loop over these databases is factored into [procedures], and the result of a successful attempt may be rendered as a line-numbered [proof](crate::reports::proof).
//!
//! Editing a knowledge base and querying it, one command at a time, is handled by a [session].
//!
//! Useful starting points, then, may be:
//! - The [prove procedure](crate::procedures::prove) to inspect the dynamics of a proof attempt.
//! - The [structures] to familiarise yourself with literals and clauses.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Prove `q` from `p v q`, `~p v q`, and `p v ~q`.
//!
//! ```rust
//! # use refute::config::Config;
//! # use refute::context::Context;
//! # use refute::reports::Report;
//! use refute::builder::clause_from_string;
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! for premise in ["p v q", "~p v q", "p v ~q"] {
//!     the_context.add_premise(clause_from_string(premise).unwrap());
//! }
//!
//! let goal = clause_from_string("q").unwrap();
//! assert!(the_context.prove(goal).is_ok());
//! assert_eq!(the_context.report(), Report::True);
//! ```
//!
//! + Edit and query a knowledge base.
//!
//! ```rust
//! # use refute::config::Config;
//! # use refute::session::{KnowledgeBase, Response};
//! let mut kb = KnowledgeBase::default();
//! let config = Config::default();
//!
//! assert!(kb.assert("rain").is_ok());
//! assert!(kb.assert("~rain v wet").is_ok());
//!
//! match kb.query("wet", &config) {
//!     Ok(Response::Query { proof, .. }) => assert!(proof.to_string().contains("wet is true")),
//!     _ => panic!("query failed"),
//! }
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! For example, when the binary is built with the `log` feature, steps of the resolution loop can be seen with `RUST_LOG=resolution=trace …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;

pub mod session;
