use std::{io::BufRead, str::FromStr};

use crate::{
    builder::normalise,
    types::err::{self, ErrorKind},
};

/// What to do with the clause of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Whether the clause follows from the knowledge base, written `?`.
    Query,

    /// Add the clause to the knowledge base, written `+`.
    Assert,

    /// Remove the clause from the knowledge base, written `-`.
    Retract,
}

impl Operation {
    /// The character used to write the operation.
    pub fn as_char(&self) -> char {
        match self {
            Self::Query => '?',
            Self::Assert => '+',
            Self::Retract => '-',
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '?' => Ok(Self::Query),
            '+' => Ok(Self::Assert),
            '-' => Ok(Self::Retract),
            _ => Err(()),
        }
    }
}

/// A clause (as text) paired with an operation, written as the clause followed by the character of the operation.
///
/// ```rust
/// # use refute::session::{Command, Operation};
/// let command: Command = "Coffee v ~Tea ?".parse().unwrap();
/// assert_eq!(command.clause, "coffee v ~tea");
/// assert_eq!(command.operation, Operation::Query);
///
/// assert!("coffee".parse::<Command>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// The (normalised) text of the clause.
    pub clause: String,

    /// The operation.
    pub operation: Operation,
}

impl FromStr for Command {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let operation = chars
            .next_back()
            .and_then(|c| Operation::try_from(c).ok())
            .ok_or_else(|| err::ParseError::Command(trimmed.to_string()))?;

        let clause = normalise(chars.as_str());
        if clause.is_empty() {
            return Err(err::ParseError::Empty);
        }

        Ok(Command { clause, operation })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.clause, self.operation.as_char())
    }
}

/// Reads a command file, one command to a line, skipping empty lines and lines beginning with `#`.
pub fn read_commands(reader: impl BufRead) -> Result<Vec<Command>, ErrorKind> {
    let mut commands = Vec::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match trimmed.parse::<Command>() {
            Ok(command) => commands.push(command),
            Err(e) => return Err(err::ParseError::Line(index + 1, Box::new(e)).into()),
        }
    }

    Ok(commands)
}
