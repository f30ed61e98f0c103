//! Clauses are sets of literals, interpreted as the disjunction of those literals.
//!
//! ```rust
//! # use refute::structures::clause::Clause;
//! # use refute::structures::literal::Literal;
//! let p_or_q = Clause::from_iter([Literal::new("q", false), Literal::new("p", false)]);
//! let not_p = Clause::from(Literal::new("p", true));
//!
//! assert_eq!(p_or_q.to_string(), "p v q");
//! assert!(p_or_q.is_resolvable(&not_p));
//! assert!(!p_or_q.is_tautology());
//! ```
//!
//! # Identity
//!
//! A clause is identified by its literals, and nothing else.
//! In particular, the derivation of a clause is not part of the clause --- two clauses derived in different ways are the same clause.
//! Derivations are recorded alongside clauses in the [clause database](crate::db::clause).
//!
//! # Order
//!
//! Clauses are ordered by size and then lexicographically on their (sorted) literals.
//! So, `q` < `p v q` < `p v ~q` < `~p v q`.
//!
//! This order is used when printing collections of clauses and when searching for a pair of clauses to resolve, and so fixes the course of a proof attempt.

use std::collections::BTreeSet;

use crate::{config::ResolutionRule, structures::literal::Literal};

/// The token separating the literals of a clause when written.
pub const DISJUNCTION: &str = "v";

/// A set of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The literals of the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// A count of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause has no literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the clause contains exactly one literal.
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Whether the clause contains the given literal.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The negation of the clause, as a collection of unit clauses.
    ///
    /// The negation of a disjunction is a conjunction, and so each unit clause is to be read as holding independently.
    pub fn negate(&self) -> Vec<Clause> {
        self.literals
            .iter()
            .map(|literal| Clause::from(literal.negate()))
            .collect()
    }

    /// Whether the negation of some literal in the clause is a literal of `other`.
    pub fn is_resolvable(&self, other: &Clause) -> bool {
        self.literals
            .iter()
            .any(|literal| other.literals.contains(&literal.negate()))
    }

    /// Whether the clause contains some literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.is_resolvable(self)
    }

    /// Whether the clause is distinct from `other` and every literal of the clause is a literal of `other`.
    pub fn subsumes(&self, other: &Clause) -> bool {
        self != other && self.literals.is_subset(&other.literals)
    }

    /// Whether some (distinct) clause in `others` subsumes the clause.
    pub fn is_redundant<'c>(&self, others: impl IntoIterator<Item = &'c Clause>) -> bool {
        others.into_iter().any(|other| other.subsumes(self))
    }

    /// The resolvent of the clause and `other`, following the given rule.
    ///
    /// The clause is not required to be resolvable with `other`, though if not the resolvent is the union of the two clauses.
    pub fn resolve(&self, other: &Clause, rule: ResolutionRule) -> Clause {
        match rule {
            ResolutionRule::Classical => self.resolve_on_first_pair(other),
            ResolutionRule::Cancelling => self.resolve_on_every_pair(other),
        }
    }

    fn resolve_on_first_pair(&self, other: &Clause) -> Clause {
        let pivot = self
            .literals
            .iter()
            .find(|literal| other.literals.contains(&literal.negate()));

        match pivot {
            None => self.literals.union(&other.literals).cloned().collect(),

            Some(pivot) => self
                .literals
                .iter()
                .filter(|literal| *literal != pivot)
                .chain(
                    other
                        .literals
                        .iter()
                        .filter(|literal| !literal.is_complement_of(pivot)),
                )
                .cloned()
                .collect(),
        }
    }

    fn resolve_on_every_pair(&self, other: &Clause) -> Clause {
        let mut remainder = other.literals.clone();
        let mut resolvent = BTreeSet::default();

        for literal in &self.literals {
            if !remainder.remove(&literal.negate()) {
                resolvent.insert(literal.clone());
            }
        }

        resolvent.append(&mut remainder);
        Clause {
            literals: resolvent,
        }
    }
}

impl Ord for Clause {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.literals.len().cmp(&other.literals.len()) {
            std::cmp::Ordering::Equal => self.literals.cmp(&other.literals),
            unequal => unequal,
        }
    }
}

impl PartialOrd for Clause {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause {
            literals: BTreeSet::from([literal]),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " {DISJUNCTION} {literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    fn clause(literals: &[(&str, bool)]) -> Clause {
        literals
            .iter()
            .map(|(atom, negated)| Literal::new(*atom, *negated))
            .collect()
    }

    #[test]
    fn display_is_sorted() {
        let c = clause(&[("q", true), ("p", false), ("r", false)]);
        assert_eq!(c.to_string(), "p v ~q v r");
    }

    #[test]
    fn order_is_size_then_literals() {
        let q = clause(&[("q", false)]);
        let p_q = clause(&[("p", false), ("q", false)]);
        let p_not_q = clause(&[("p", false), ("q", true)]);
        let not_p_q = clause(&[("p", true), ("q", false)]);

        let mut clauses = vec![not_p_q.clone(), p_not_q.clone(), q.clone(), p_q.clone()];
        clauses.sort();
        assert_eq!(clauses, vec![q, p_q, p_not_q, not_p_q]);
    }

    #[test]
    fn negation_is_units() {
        let c = clause(&[("p", false), ("q", true)]);
        assert_eq!(
            c.negate(),
            vec![clause(&[("p", true)]), clause(&[("q", false)])]
        );
    }

    #[test]
    fn tautology() {
        assert!(clause(&[("p", false), ("p", true), ("q", false)]).is_tautology());
        assert!(!clause(&[("p", false), ("q", true)]).is_tautology());
    }

    #[test]
    fn subsumption() {
        let p = clause(&[("p", false)]);
        let p_q = clause(&[("p", false), ("q", false)]);

        assert!(p.subsumes(&p_q));
        assert!(!p_q.subsumes(&p));
        assert!(!p.subsumes(&p));

        assert!(p_q.is_redundant([&p, &p_q]));
        assert!(!p.is_redundant([&p, &p_q]));
    }

    #[test]
    fn rules_agree_on_a_single_clash() {
        let p_q = clause(&[("p", false), ("q", false)]);
        let not_p_r = clause(&[("p", true), ("r", false)]);

        let expected = clause(&[("q", false), ("r", false)]);
        assert_eq!(p_q.resolve(&not_p_r, ResolutionRule::Classical), expected);
        assert_eq!(p_q.resolve(&not_p_r, ResolutionRule::Cancelling), expected);
    }

    #[test]
    fn rules_differ_on_several_clashes() {
        let p_q = clause(&[("p", false), ("q", false)]);
        let not_p_not_q = clause(&[("p", true), ("q", true)]);

        let classical = p_q.resolve(&not_p_not_q, ResolutionRule::Classical);
        assert_eq!(classical, clause(&[("q", false), ("q", true)]));
        assert!(classical.is_tautology());

        assert!(p_q
            .resolve(&not_p_not_q, ResolutionRule::Cancelling)
            .is_empty());
    }
}
