//! Line-numbered proofs, reconstructed from the clause database of a proof attempt.
//!
//! A proof is written in three parts:
//!
//! 1. The known clauses: premises used by the refutation, then unit clauses of the negated goal used by the refutation, each in order.
//! 2. The derived clauses, in the order of derivation, each citing the lines of its parents, and ending with `NIL` for the contradiction.
//! 3. A conclusion.
//!
//! For example, a proof of `q` from `p v q`, `~p v q`, and `p v ~q`:
//!
//! ```none
//! 1. p v q
//! 2. ~p v q
//! 3. ~q
//! ===============
//! 4. p (3, 1)
//! 5. q (4, 2)
//! 6. NIL (5, 3)
//! ===============
//! [CONCLUSION]: q is true
//! ```
//!
//! If no refutation was found, there are no derived clauses, and every premise and every unit clause of the negated goal is written as known.
//!
//! # Reconstruction
//!
//! The clauses used by a refutation are found by a walk from the parents of the refutation through the derivations of the clause database.
//! The walk uses an explicit stack, and notes visited clauses, so a clause used by several derivations is visited once and the depth of a derivation is not limited by the call stack.

use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::graph::{Graph, NodeIndex};

use crate::{
    context::{Context, ContextState},
    db::{
        clause::{ClauseDB, Source},
        ClauseKey,
    },
    misc::log::targets,
    reports::{Refutation, Report},
    structures::clause::Clause,
};

/// The separator between parts of a proof.
pub const SEPARATOR: &str = "===============";

/// A line of a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofLine {
    /// The number of the line.
    pub index: usize,

    /// The clause of the line, or `None` for the contradiction.
    pub clause: Option<Clause>,

    /// The numbers of the lines of the parents of the clause, if derived.
    pub parents: Option<(usize, usize)>,
}

impl std::fmt::Display for ProofLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.clause {
            Some(clause) => write!(f, "{}. {clause}", self.index)?,
            None => write!(f, "{}. NIL", self.index)?,
        }
        if let Some((left, right)) = self.parents {
            write!(f, " ({left}, {right})")?;
        }
        Ok(())
    }
}

/// A proof, or a record of what was known when no proof was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// The goal.
    pub goal: Clause,

    /// Whether the goal was proved.
    pub report: Report,

    /// Premises and unit clauses of the negated goal.
    pub known: Vec<ProofLine>,

    /// Derived clauses, ending with the contradiction, if the goal was proved.
    pub derived: Vec<ProofLine>,
}

impl Proof {
    /// The proof from the most recent attempt of a context, if the attempt has concluded.
    pub fn from_context(context: &Context) -> Option<Proof> {
        let goal = context.goal()?;
        match &context.state {
            ContextState::Input | ContextState::Running => None,

            ContextState::Refuted(refutation) => Some(Proof::refuted(refutation, &context.clause_db)),

            ContextState::Exhausted | ContextState::Interrupted(_) => {
                Some(Proof::unknown(goal, context.premises()))
            }
        }
    }

    /// The proof of a refutation, from the clause database the refutation was found with.
    pub fn refuted(refutation: &Refutation, clause_db: &ClauseDB) -> Proof {
        let negated_goal = refutation
            .negated_goal
            .iter()
            .copied()
            .collect::<HashSet<ClauseKey>>();

        let mut used_premises = BTreeMap::<&Clause, ClauseKey>::default();
        let mut used_goal = BTreeMap::<&Clause, ClauseKey>::default();
        let mut derived = Vec::<(usize, ClauseKey)>::default();

        let mut visited = HashSet::<ClauseKey>::default();
        let mut stack = vec![refutation.parents.1, refutation.parents.0];

        while let Some(key) = stack.pop() {
            if !visited.insert(key) {
                continue;
            }

            let Some(derivation) = clause_db.get(key) else {
                log::error!(target: targets::PROOF, "Derivation missing from the clause database");
                continue;
            };

            if negated_goal.contains(&key) {
                used_goal.insert(&derivation.clause, key);
                continue;
            }

            match derivation.source {
                Source::Premise => {
                    used_premises.insert(&derivation.clause, key);
                }

                Source::NegatedGoal => {
                    used_goal.insert(&derivation.clause, key);
                }

                Source::Resolution(left, right) => {
                    derived.push((derivation.step, key));
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        derived.sort_unstable();

        let mut lines = HashMap::<ClauseKey, usize>::default();
        let mut index = 0;

        let mut known = Vec::default();
        for (clause, key) in used_premises.into_iter().chain(used_goal) {
            index += 1;
            lines.insert(key, index);
            known.push(ProofLine {
                index,
                clause: Some(clause.clone()),
                parents: None,
            });
        }

        let cite = |lines: &HashMap<ClauseKey, usize>, (left, right): (ClauseKey, ClauseKey)| {
            match (lines.get(&left), lines.get(&right)) {
                (Some(left), Some(right)) => (*left, *right),
                _ => {
                    log::error!(target: targets::PROOF, "Parent cited before its line");
                    (0, 0)
                }
            }
        };

        let mut derived_lines = Vec::default();
        for (_, key) in derived {
            let Some(derivation) = clause_db.get(key) else {
                continue;
            };
            let Some(parents) = derivation.parents() else {
                continue;
            };

            index += 1;
            let parents = cite(&lines, parents);
            lines.insert(key, index);
            derived_lines.push(ProofLine {
                index,
                clause: Some(derivation.clause.clone()),
                parents: Some(parents),
            });
        }

        derived_lines.push(ProofLine {
            index: index + 1,
            clause: None,
            parents: Some(cite(&lines, refutation.parents)),
        });

        log::debug!(target: targets::PROOF, "Proof of {} in {} lines", refutation.goal, index + 1);

        Proof {
            goal: refutation.goal.clone(),
            report: Report::True,
            known,
            derived: derived_lines,
        }
    }

    /// A record of the premises and the negated goal, for a goal which was not proved.
    pub fn unknown<'p>(goal: &Clause, premises: impl IntoIterator<Item = &'p Clause>) -> Proof {
        let mut premises = premises.into_iter().collect::<Vec<_>>();
        premises.sort_unstable();
        premises.dedup();

        let negated_goal = goal.negate();

        let known = premises
            .into_iter()
            .chain(negated_goal.iter())
            .enumerate()
            .map(|(offset, clause)| ProofLine {
                index: offset + 1,
                clause: Some(clause.clone()),
                parents: None,
            })
            .collect();

        Proof {
            goal: goal.clone(),
            report: Report::Unknown,
            known,
            derived: Vec::default(),
        }
    }

    /// Every line of the proof, in order.
    pub fn lines(&self) -> impl Iterator<Item = &ProofLine> {
        self.known.iter().chain(self.derived.iter())
    }

    /// The derivation as a graph, with an edge from each parent line to each derived line.
    ///
    /// Edges are weighted with the side of the parent in the derivation, `left` or `right`.
    ///
    /// ```rust
    /// # use refute::session::{KnowledgeBase, Response};
    /// # use refute::config::Config;
    /// let kb = KnowledgeBase::from_lines(["p"]).unwrap();
    /// let Ok(Response::Query { proof, .. }) = kb.query("p", &Config::default()) else { panic!() };
    ///
    /// let graph = proof.to_graph();
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// let dot = petgraph::dot::Dot::with_config(&graph, &[petgraph::dot::Config::EdgeNoLabel]);
    /// assert!(dot.to_string().contains("3. NIL"));
    /// ```
    pub fn to_graph(&self) -> Graph<String, &'static str> {
        let mut graph = Graph::<String, &'static str>::new();
        let mut nodes = HashMap::<usize, NodeIndex>::default();

        for line in self.lines() {
            let label = match &line.clause {
                Some(clause) => format!("{}. {clause}", line.index),
                None => format!("{}. NIL", line.index),
            };
            let node = graph.add_node(label);
            nodes.insert(line.index, node);

            if let Some((left, right)) = line.parents {
                for (parent, side) in [(left, "left"), (right, "right")] {
                    if let Some(parent_node) = nodes.get(&parent) {
                        graph.add_edge(*parent_node, node, side);
                    }
                }
            }
        }

        graph
    }
}

impl std::fmt::Display for Proof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.known {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{SEPARATOR}")?;

        if !self.derived.is_empty() {
            for line in &self.derived {
                writeln!(f, "{line}")?;
            }
            writeln!(f, "{SEPARATOR}")?;
        }

        write!(f, "[CONCLUSION]: {} is {}", self.goal, self.report)
    }
}
