use refute::{
    builder::clause_from_string,
    config::{Config, ResolutionRule},
    context::{Context, ContextState},
    reports::{proof::Proof, Interruption, Outcome, Report},
    structures::clause::Clause,
    types::err::{ErrorKind, StateError},
};

fn clauses(strings: &[&str]) -> Vec<Clause> {
    strings
        .iter()
        .map(|s| clause_from_string(s).unwrap())
        .collect()
}

fn context_from(premises: &[&str]) -> Context {
    Context::from_premises(Config::default(), clauses(premises))
}

fn proof_of(premises: &[&str], goal: &str) -> Proof {
    let mut the_context = context_from(premises);
    assert!(the_context.prove(clause_from_string(goal).unwrap()).is_ok());
    Proof::from_context(&the_context).unwrap()
}

mod refutation {
    use super::*;

    #[test]
    fn q_from_three_premises() {
        let mut the_context = context_from(&["p v q", "~p v q", "p v ~q"]);
        let outcome = the_context.prove(clause_from_string("q").unwrap());
        assert!(matches!(outcome, Ok(Outcome::Refuted(_))));

        let proof = Proof::from_context(&the_context).unwrap();
        let expected = "\
1. p v q
2. ~p v q
3. ~q
===============
4. p (3, 1)
5. q (4, 2)
6. NIL (5, 3)
===============
[CONCLUSION]: q is true";
        assert_eq!(proof.to_string(), expected);
    }

    #[test]
    fn contradiction_cites_complementary_units() {
        let proof = proof_of(&["p v q", "~p v q", "p v ~q"], "q");

        let nil = proof.derived.last().unwrap();
        assert!(nil.clause.is_none());
        assert_eq!(proof.derived.iter().filter(|l| l.clause.is_none()).count(), 1);

        let (left, right) = nil.parents.unwrap();
        let clause_at = |index: usize| {
            proof
                .lines()
                .find(|line| line.index == index)
                .and_then(|line| line.clause.clone())
                .unwrap()
        };
        assert_eq!(clause_at(left), clause_from_string("q").unwrap());
        assert_eq!(clause_at(right), clause_from_string("~q").unwrap());
    }

    #[test]
    fn unit_goal_from_itself() {
        let mut the_context = context_from(&["p"]);
        assert!(the_context.prove(clause_from_string("p").unwrap()).is_ok());
        assert_eq!(the_context.report(), Report::True);
        assert_eq!(the_context.counters.resolvents, 0);

        let expected = "\
1. p
2. ~p
===============
3. NIL (2, 1)
===============
[CONCLUSION]: p is true";
        assert_eq!(Proof::from_context(&the_context).unwrap().to_string(), expected);
    }

    #[test]
    fn negation_does_not_follow() {
        let mut the_context = context_from(&["p"]);
        assert_eq!(
            the_context.prove(clause_from_string("~p").unwrap()),
            Ok(Outcome::Exhausted)
        );
    }

    #[test]
    fn chain() {
        let mut the_context = context_from(&["rain", "~rain v wet", "~wet v slippery"]);
        let outcome = the_context.prove(clause_from_string("slippery").unwrap());
        assert!(matches!(outcome, Ok(Outcome::Refuted(_))));
    }

    #[test]
    fn disjunctive_goal() {
        let mut the_context = context_from(&["~p v r", "~q v r", "p v q"]);
        assert!(matches!(
            the_context.prove(clause_from_string("r v s").unwrap()),
            Ok(Outcome::Refuted(_))
        ));
    }

    #[test]
    fn unused_premises_are_not_written() {
        let proof = proof_of(&["p", "s v t", "u"], "p");
        assert_eq!(proof.known.len(), 2);
        assert!(!proof.to_string().contains("s v t"));
    }

    #[test]
    fn lines_cite_earlier_lines() {
        let proof = proof_of(&["a v b", "~a v c", "~b v c", "~c v d"], "d");
        assert_eq!(proof.report, Report::True);

        for (position, line) in proof.lines().enumerate() {
            assert_eq!(line.index, position + 1);
            if let Some((left, right)) = line.parents {
                assert!(left < line.index && right < line.index);
            }
        }
    }
}

mod exhaustion {
    use super::*;

    #[test]
    fn unrelated_goal() {
        let mut the_context = context_from(&["p v q"]);
        assert_eq!(
            the_context.prove(clause_from_string("r").unwrap()),
            Ok(Outcome::Exhausted)
        );
        assert_eq!(the_context.report(), Report::Unknown);

        let expected = "\
1. p v q
2. ~r
===============
[CONCLUSION]: r is unknown";
        assert_eq!(Proof::from_context(&the_context).unwrap().to_string(), expected);
    }

    #[test]
    fn unknown_writes_every_negated_unit() {
        let proof = proof_of(&["p v q"], "r v s");
        let expected = "\
1. p v q
2. ~r
3. ~s
===============
[CONCLUSION]: r v s is unknown";
        assert_eq!(proof.to_string(), expected);
    }

    #[test]
    fn no_premises() {
        let proof = proof_of(&[], "p");
        assert_eq!(proof.report, Report::Unknown);
        assert_eq!(proof.known.len(), 1);
    }

    #[test]
    fn empty_goal() {
        let mut the_context = context_from(&["p"]);
        assert_eq!(
            the_context.prove(Clause::default()),
            Err(ErrorKind::State(StateError::NoGoal))
        );
    }
}

mod context {
    use super::*;

    #[test]
    fn attempts_do_not_leak() {
        let mut the_context = context_from(&["p v q", "~p v q"]);

        assert!(the_context.prove(clause_from_string("q").unwrap()).is_ok());
        assert_eq!(the_context.report(), Report::True);
        let derived = the_context.clause_db.count();

        assert!(the_context.prove(clause_from_string("r").unwrap()).is_ok());
        assert_eq!(the_context.report(), Report::Unknown);

        assert!(the_context.prove(clause_from_string("q").unwrap()).is_ok());
        assert_eq!(the_context.clause_db.count(), derived);
    }

    #[test]
    fn input_after_premise() {
        let mut the_context = context_from(&["p"]);
        assert!(the_context.prove(clause_from_string("p").unwrap()).is_ok());
        assert!(the_context.add_premise(clause_from_string("q").unwrap()));
        assert_eq!(the_context.state, ContextState::Input);
        assert!(the_context.outcome().is_none());
        assert!(Proof::from_context(&the_context).is_none());
    }

    #[test]
    fn determinism() {
        let premises = ["a v b", "~a v c", "~b v c", "~c v d", "a v ~d"];

        let first = proof_of(&premises, "d").to_string();
        for _ in 0..5 {
            assert_eq!(proof_of(&premises, "d").to_string(), first);
        }

        let mut reversed = premises;
        reversed.reverse();
        assert_eq!(proof_of(&reversed, "d").to_string(), first);
    }
}

mod limits {
    use super::*;

    #[test]
    fn step_limit() {
        let mut config = Config::default();
        assert!(config.step_limit.set(1));

        let mut the_context =
            Context::from_premises(config, clauses(&["p v q", "~p v q", "p v ~q"]));

        assert_eq!(
            the_context.prove(clause_from_string("q").unwrap()),
            Ok(Outcome::Interrupted(Interruption::StepLimit))
        );
        assert_eq!(the_context.counters.total_iterations, 1);
        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(
            Proof::from_context(&the_context).unwrap().report,
            Report::Unknown
        );
    }

    #[test]
    fn generous_step_limit() {
        let mut config = Config::default();
        assert!(config.step_limit.set(100));

        let mut the_context =
            Context::from_premises(config, clauses(&["p v q", "~p v q", "p v ~q"]));

        assert!(matches!(
            the_context.prove(clause_from_string("q").unwrap()),
            Ok(Outcome::Refuted(_))
        ));
    }
}

mod rules {
    use super::*;

    fn classical() -> Config {
        let mut config = Config::default();
        assert!(config.resolution_rule.set(ResolutionRule::Classical));
        config
    }

    #[test]
    fn cancelling_by_default() {
        assert_eq!(
            Config::default().resolution_rule.value,
            ResolutionRule::Cancelling
        );
    }

    #[test]
    fn rules_agree_on_single_clashes() {
        let premises = ["p v q", "~p v q", "p v ~q"];

        let mut the_context = Context::from_premises(classical(), clauses(&premises));
        assert!(the_context.prove(clause_from_string("q").unwrap()).is_ok());

        assert_eq!(
            Proof::from_context(&the_context).unwrap().to_string(),
            proof_of(&premises, "q").to_string()
        );
    }

    #[test]
    fn cancelling_across_several_clashes() {
        let premises = ["p v q v r", "~p v ~q"];

        // p v q and ~p v ~q cancel to the empty clause.
        let mut the_context = context_from(&premises);
        assert!(matches!(
            the_context.prove(clause_from_string("r v s").unwrap()),
            Ok(Outcome::Refuted(_))
        ));

        let proof = Proof::from_context(&the_context).unwrap();
        let nil = proof.derived.last().unwrap();
        assert!(nil.clause.is_none());
        assert_eq!(nil.parents, Some((4, 1)));

        // Classical resolution on the same pair gives a tautology.
        let mut the_context = Context::from_premises(classical(), clauses(&premises));
        assert_eq!(
            the_context.prove(clause_from_string("r v s").unwrap()),
            Ok(Outcome::Exhausted)
        );
    }
}

mod simplification {
    use super::*;

    fn clause(string: &str) -> Clause {
        clause_from_string(string).unwrap()
    }

    #[test]
    fn tautological_premise_is_removed() {
        let mut the_context = context_from(&["p v ~p", "q"]);
        assert!(matches!(
            the_context.prove(clause("q")),
            Ok(Outcome::Refuted(_))
        ));

        assert_eq!(the_context.counters.tautologies, 1);
        assert_eq!(
            the_context.clause_store.premises().keys().collect::<Vec<_>>(),
            vec![&clause("q")]
        );
    }

    #[test]
    fn tautological_resolvent_is_removed() {
        let mut config = Config::default();
        assert!(config.resolution_rule.set(ResolutionRule::Classical));
        let mut the_context =
            Context::from_premises(config, clauses(&["p v q v r", "~p v ~q"]));

        assert_eq!(the_context.prove(clause("r")), Ok(Outcome::Exhausted));

        // p v q and ~p v ~q resolve to q v ~q.
        assert_eq!(the_context.counters.resolvents, 2);
        assert_eq!(the_context.counters.tautologies, 1);
        assert_eq!(
            the_context.clause_store.support().keys().collect::<Vec<_>>(),
            vec![&clause("~r"), &clause("p v q")]
        );
    }

    #[test]
    fn premises_subsumed_by_resolvents_are_removed() {
        let mut the_context = context_from(&["p v q", "~p v q", "p v ~q"]);
        assert!(matches!(
            the_context.prove(clause("q")),
            Ok(Outcome::Refuted(_))
        ));

        // ~q removes p v ~q, then p removes p v q, then q removes ~p v q.
        assert_eq!(the_context.counters.redundant, 3);
        assert!(the_context.clause_store.premises().is_empty());
        assert_eq!(
            the_context.clause_store.support().keys().collect::<Vec<_>>(),
            vec![&clause("p"), &clause("q"), &clause("~q")]
        );
    }

    #[test]
    fn premise_subsumed_by_negated_goal_is_removed() {
        let mut the_context = context_from(&["~r v s"]);
        assert_eq!(the_context.prove(clause("r")), Ok(Outcome::Exhausted));

        assert_eq!(the_context.counters.redundant, 1);
        assert!(the_context.clause_store.premises().is_empty());
    }
}

mod graph {
    use super::*;

    #[test]
    fn edges_from_parents() {
        let graph = proof_of(&["p"], "p").to_graph();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(
            graph.edge_weights().copied().collect::<Vec<_>>(),
            vec!["left", "right"]
        );
    }

    #[test]
    fn dot_without_edge_labels() {
        let graph = proof_of(&["p v q", "~p v q", "p v ~q"], "q").to_graph();
        let dot = petgraph::dot::Dot::with_config(&graph, &[petgraph::dot::Config::EdgeNoLabel])
            .to_string();

        assert!(dot.contains("6. NIL"));
        assert_eq!(dot.matches("->").count(), 6);
        assert!(!dot.contains("left"));
    }
}
