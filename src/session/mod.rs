/*!
Sessions over a knowledge base --- asserting, retracting, and querying clauses.

A [KnowledgeBase] is a sequence of lines, each either a clause or a comment.
Edits to a knowledge base are textual:
- An assertion appends a clause, unless the (normalised) text of the clause is already present.
- A retraction removes the first line whose (normalised) text matches the clause.

A query reads every clause of the knowledge base as a premise, and attempts to prove the clause queried in a fresh [context](crate::context::Context).
So, nothing derived during one query is available to another.

```rust
# use refute::config::Config;
# use refute::session::{KnowledgeBase, Response};
# use refute::reports::Report;
# use refute::types::err::{ErrorKind, KnowledgeBaseError};
let mut kb = KnowledgeBase::default();

assert!(matches!(kb.assert("s v t"), Ok(Response::Added(_))));
assert!(matches!(kb.retract("s v t"), Ok(Response::Removed(_))));
assert!(kb.is_empty());

assert!(matches!(
    kb.retract("s v t"),
    Err(ErrorKind::KnowledgeBase(KnowledgeBaseError::ClauseNotFound(_)))
));
```

A knowledge base stored as a file is edited through a [KnowledgeFile].
*/

mod command;
pub use command::{read_commands, Command, Operation};

mod file;
pub use file::KnowledgeFile;

use std::io::{BufRead, Write};

use crate::{
    builder::{clause_from_string, normalise},
    config::Config,
    context::{Context, Counters},
    misc::log::targets,
    reports::{proof::Proof, Outcome},
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

/// A line of a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    /// The text of the line.
    text: String,

    /// The clause of the line, or `None` for an empty line or a comment.
    clause: Option<Clause>,
}

impl Entry {
    fn read(line: &str) -> Result<Entry, err::ParseError> {
        let trimmed = line.trim();
        match trimmed.is_empty() || trimmed.starts_with('#') {
            true => Ok(Entry {
                text: trimmed.to_string(),
                clause: None,
            }),
            false => Ok(Entry {
                text: normalise(trimmed),
                clause: Some(clause_from_string(trimmed)?),
            }),
        }
    }
}

/// The result of applying a command to a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// The clause was added.
    Added(String),

    /// The clause was already present, and the knowledge base is unchanged.
    AlreadyPresent(String),

    /// The clause was removed.
    Removed(String),

    /// The proof, or record of what was known, from a query.
    Query { proof: Proof, counters: Counters },
}

impl Response {
    /// Whether the response follows a change to the knowledge base.
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Removed(_))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added(clause) => write!(f, "added {clause}"),
            Self::AlreadyPresent(clause) => write!(f, "{clause} already present in database"),
            Self::Removed(clause) => write!(f, "removed {clause}"),
            Self::Query { proof, .. } => write!(f, "{proof}"),
        }
    }
}

/// A knowledge base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<Entry>,
}

impl KnowledgeBase {
    /// A knowledge base from lines of text.
    pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Result<Self, ErrorKind> {
        let mut entries = Vec::default();
        for (index, line) in lines.into_iter().enumerate() {
            match Entry::read(line.as_ref()) {
                Ok(entry) => entries.push(entry),
                Err(e) => return Err(err::ParseError::Line(index + 1, Box::new(e)).into()),
            }
        }
        Ok(KnowledgeBase { entries })
    }

    /// Reads a knowledge base.
    pub fn read_from(reader: impl BufRead) -> Result<Self, ErrorKind> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        KnowledgeBase::from_lines(lines)
    }

    /// Writes the knowledge base, one line at a time.
    pub fn write_to(&self, mut writer: impl Write) -> std::io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{}", entry.text)?;
        }
        writer.flush()
    }

    /// Every line of the knowledge base, including comments.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    /// The lines of the knowledge base which are clauses, without comments or empty lines.
    pub fn clause_lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.clause.is_some())
            .map(|entry| entry.text.as_str())
    }

    /// The clauses of the knowledge base, in the order given.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.entries.iter().filter_map(|entry| entry.clause.as_ref())
    }

    /// A count of the clauses of the knowledge base.
    pub fn len(&self) -> usize {
        self.clauses().count()
    }

    /// Whether the knowledge base has no clauses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether some clause of the knowledge base is written as `text`, after normalisation.
    pub fn contains(&self, text: &str) -> bool {
        self.position(&normalise(text)).is_some()
    }

    fn position(&self, normalised: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.clause.is_some() && entry.text == normalised)
    }

    /// Adds the clause written as `text`, unless present.
    pub fn assert(&mut self, text: &str) -> Result<Response, ErrorKind> {
        let clause = clause_from_string(text)?;
        let text = normalise(text);

        if self.position(&text).is_some() {
            log::debug!(target: targets::KNOWLEDGE_BASE, "Already present: {text}");
            return Ok(Response::AlreadyPresent(text));
        }

        log::info!(target: targets::KNOWLEDGE_BASE, "Added: {text}");
        self.entries.push(Entry {
            text: text.clone(),
            clause: Some(clause),
        });
        Ok(Response::Added(text))
    }

    /// Removes the clause written as `text`, if present.
    pub fn retract(&mut self, text: &str) -> Result<Response, ErrorKind> {
        let text = normalise(text);

        match self.position(&text) {
            Some(index) => {
                log::info!(target: targets::KNOWLEDGE_BASE, "Removed: {text}");
                self.entries.remove(index);
                Ok(Response::Removed(text))
            }

            None => {
                log::info!(target: targets::KNOWLEDGE_BASE, "Not present: {text}");
                Err(err::KnowledgeBaseError::ClauseNotFound(text).into())
            }
        }
    }

    /// Attempts to prove the clause written as `text` from the clauses of the knowledge base.
    pub fn query(&self, text: &str, config: &Config) -> Result<Response, ErrorKind> {
        let goal = clause_from_string(text)?;

        let mut the_context = Context::from_premises(config.clone(), self.clauses().cloned());

        let proof = match the_context.prove(goal.clone())? {
            Outcome::Refuted(refutation) => Proof::refuted(&refutation, &the_context.clause_db),
            Outcome::Exhausted | Outcome::Interrupted(_) => {
                Proof::unknown(&goal, the_context.premises())
            }
        };

        Ok(Response::Query {
            proof,
            counters: the_context.counters.clone(),
        })
    }

    /// Applies a command to the knowledge base.
    pub fn apply(&mut self, command: &Command, config: &Config) -> Result<Response, ErrorKind> {
        match command.operation {
            Operation::Query => self.query(&command.clause, config),
            Operation::Assert => self.assert(&command.clause),
            Operation::Retract => self.retract(&command.clause),
        }
    }
}
