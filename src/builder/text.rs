use std::io::BufRead;

use crate::{
    structures::{
        clause::{Clause, DISJUNCTION},
        literal::{Literal, NEGATION},
    },
    types::err::{self, ErrorKind},
};

/// A clause together with the (normalised) text the clause was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseLine {
    pub text: String,
    pub clause: Clause,
}

/// Reads a clause from a string.
pub fn clause_from_string(string: &str) -> Result<Clause, err::ParseError> {
    let mut literals = Vec::default();

    for token in string.split_whitespace() {
        let token = token.to_lowercase();
        if token == DISJUNCTION {
            continue;
        }

        let (atom, negated) = match token.strip_prefix(NEGATION) {
            Some(atom) => (atom, true),
            None => (token.as_str(), false),
        };

        if atom.is_empty() {
            return Err(err::ParseError::Negation);
        }

        if !atom.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(err::ParseError::Identifier(token));
        }

        literals.push(Literal::new(atom, negated));
    }

    match literals.is_empty() {
        true => Err(err::ParseError::Empty),
        false => Ok(Clause::from_iter(literals)),
    }
}

/// The text of a clause in lower case and with single spaces between tokens.
///
/// Clauses in a knowledge base are compared by normalised text.
pub fn normalise(string: &str) -> String {
    string
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads every clause of a knowledge base, skipping empty lines and lines beginning with `#`.
///
/// Errors note the (one-indexed) line of the error.
pub fn read_clauses(reader: impl BufRead) -> Result<Vec<ClauseLine>, ErrorKind> {
    let mut clauses = Vec::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match clause_from_string(trimmed) {
            Ok(clause) => clauses.push(ClauseLine {
                text: normalise(trimmed),
                clause,
            }),
            Err(e) => return Err(err::ParseError::Line(index + 1, Box::new(e)).into()),
        }
    }

    Ok(clauses)
}

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        assert_eq!(clause_from_string("P v ~Q"), clause_from_string("p v ~q"));
    }

    #[test]
    fn duplicates_collapse() {
        let clause = clause_from_string("p v p v ~q").unwrap();
        assert_eq!(clause.size(), 2);
    }

    #[test]
    fn malformed() {
        assert_eq!(clause_from_string("   "), Err(err::ParseError::Empty));
        assert_eq!(clause_from_string("v"), Err(err::ParseError::Empty));
        assert_eq!(clause_from_string("p v ~"), Err(err::ParseError::Negation));
        assert_eq!(
            clause_from_string("p v q!"),
            Err(err::ParseError::Identifier("q!".to_string()))
        );
    }

    #[test]
    fn normalised_text() {
        assert_eq!(normalise("  ~P   v Q "), "~p v q");
    }

    #[test]
    fn knowledge_base_lines() {
        let text = "# a comment\n\np v q\n~p\n";
        let clauses = read_clauses(text.as_bytes()).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].text, "p v q");
        assert_eq!(clauses[1].clause, clause_from_string("~p").unwrap());
    }

    #[test]
    fn knowledge_base_errors_note_lines() {
        let text = "p v q\n\np v ~\n";
        assert_eq!(
            read_clauses(text.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(
                3,
                Box::new(err::ParseError::Negation)
            )))
        );
    }
}
