use std::collections::HashMap;

use refute::{
    config::{Config, ResolutionRule},
    context::Context,
    reports::Outcome,
    structures::{clause::Clause, literal::Literal},
};

const ATOMS: [&str; 3] = ["p", "q", "r"];

/// Every clause over [ATOMS] without complementary literals.
fn every_clause() -> Vec<Clause> {
    let mut clauses = Vec::default();

    // Each atom is absent, positive, or negative.
    for code in 1..27_usize {
        let mut literals = Vec::default();
        let mut remaining = code;
        for atom in ATOMS {
            match remaining % 3 {
                1 => literals.push(Literal::new(atom, false)),
                2 => literals.push(Literal::new(atom, true)),
                _ => {}
            }
            remaining /= 3;
        }
        clauses.push(Clause::from_iter(literals));
    }

    clauses
}

fn every_valuation() -> Vec<HashMap<&'static str, bool>> {
    (0..8_usize)
        .map(|bits| {
            ATOMS
                .iter()
                .enumerate()
                .map(|(index, atom)| (*atom, bits & (1 << index) != 0))
                .collect()
        })
        .collect()
}

fn satisfies(valuation: &HashMap<&str, bool>, clause: &Clause) -> bool {
    clause
        .literals()
        .any(|literal| valuation.get(literal.atom()).copied() != Some(literal.is_negated()))
}

fn entails(premises: &[Clause], goal: &Clause) -> bool {
    every_valuation().iter().all(|valuation| {
        !premises.iter().all(|premise| satisfies(valuation, premise)) || satisfies(valuation, goal)
    })
}

#[test]
fn double_negation() {
    for atom in ATOMS {
        for negated in [false, true] {
            let literal = Literal::new(atom, negated);
            assert_eq!(literal.negate().negate(), literal);
            assert_ne!(literal.negate(), literal);
        }
    }
}

#[test]
fn self_resolvable_iff_tautology() {
    let mut clauses = every_clause();
    clauses.push(Clause::from_iter([Literal::new("p", false), Literal::new("p", true)]));
    clauses.push(Clause::from_iter([
        Literal::new("p", false),
        Literal::new("q", true),
        Literal::new("q", false),
    ]));

    for clause in &clauses {
        let complementary = clause
            .literals()
            .any(|literal| clause.contains(&literal.negate()));
        assert_eq!(clause.is_resolvable(clause), complementary);
        assert_eq!(clause.is_tautology(), complementary);
    }
}

#[test]
fn subsumed_clauses_are_redundant() {
    let clauses = every_clause();
    for a in &clauses {
        for b in &clauses {
            let subset = a.literals().all(|literal| b.contains(literal));
            if subset && a != b {
                assert!(b.is_redundant([a, b]));
                assert!(!a.is_redundant([a, b]));
            }
        }
        assert!(!a.is_redundant([a]));
    }
}

#[test]
fn classical_resolvents_are_entailed() {
    let clauses = every_clause();
    for left in &clauses {
        for right in &clauses {
            if !left.is_resolvable(right) {
                continue;
            }
            let resolvent = left.resolve(right, ResolutionRule::Classical);
            assert!(
                entails(&[left.clone(), right.clone()], &resolvent) || resolvent.is_empty(),
                "{left} and {right} resolve to {resolvent}"
            );
        }
    }
}

#[test]
fn rules_agree_on_a_single_clash() {
    let clauses = every_clause();
    for left in &clauses {
        for right in &clauses {
            let clashes = left
                .literals()
                .filter(|literal| right.contains(&literal.negate()))
                .count();
            if clashes == 1 {
                assert_eq!(
                    left.resolve(right, ResolutionRule::Classical),
                    left.resolve(right, ResolutionRule::Cancelling)
                );
            }
        }
    }
}

#[test]
fn proof_attempts_end_with_the_right_conclusion() {
    // Satisfiable, with r true on each model.
    let premises = ["p v q", "~p v r", "~q v r"]
        .iter()
        .map(|s| refute::builder::clause_from_string(s).unwrap())
        .collect::<Vec<_>>();

    for goal in every_clause() {
        let mut config = Config::default();
        assert!(config.resolution_rule.set(ResolutionRule::Classical));

        let mut the_context = Context::from_premises(config, premises.clone());
        let outcome = the_context.prove(goal.clone());

        match outcome {
            Ok(Outcome::Refuted(_)) => assert!(entails(&premises, &goal), "{goal}"),
            Ok(Outcome::Exhausted) => assert!(!entails(&premises, &goal), "{goal}"),
            _ => panic!("{goal}"),
        }
    }
}
