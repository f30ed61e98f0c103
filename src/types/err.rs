//! Error types used in the library.
//!
//! - Parse errors follow from malformed clause or command text, and abort whatever operation the text was given to.
//! - Knowledge base errors follow from editing a knowledge base, e.g. retracting a clause which is not present.
//!   These are reported, and leave the knowledge base unchanged.
//!
//! Note, a goal which does not follow from a knowledge base is *not* an error.
//! Instead, an attempt to prove the goal [exhausts](crate::reports::Outcome::Exhausted) the clauses which may be derived.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    KnowledgeBase(KnowledgeBaseError),
    State(StateError),
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty clause was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// Some string which is not an atom was found in place of an atom.
    Identifier(String),

    /// A command line without a (recognised) command character.
    Command(String),

    /// Some problem at a specific line.
    Line(usize, Box<ParseError>),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when editing or storing a knowledge base.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KnowledgeBaseError {
    /// A clause to be retracted is not present.
    ClauseNotFound(String),

    /// Reading or writing a stored knowledge base failed.
    Io(std::io::ErrorKind),
}

impl From<KnowledgeBaseError> for ErrorKind {
    fn from(e: KnowledgeBaseError) -> Self {
        ErrorKind::KnowledgeBase(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::KnowledgeBase(KnowledgeBaseError::Io(e.kind()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A proof was requested, though no goal was given.
    NoGoal,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "expected a clause, found nothing"),
            Self::Negation => write!(f, "a negation is missing an atom"),
            Self::Identifier(s) => write!(f, "'{s}' is not an atom"),
            Self::Command(s) => write!(f, "'{s}' does not end with one of '?', '+', '-'"),
            Self::Line(line, e) => write!(f, "line {line}: {e}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::KnowledgeBase(KnowledgeBaseError::ClauseNotFound(clause)) => {
                write!(f, "{clause} not present in database")
            }
            Self::KnowledgeBase(KnowledgeBaseError::Io(kind)) => {
                write!(f, "Knowledge base error: {kind}")
            }
            Self::State(StateError::NoGoal) => write!(f, "No goal clause was found"),
        }
    }
}
