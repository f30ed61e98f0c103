use std::{fs::File, io::BufReader, path::Path};

use refute::{
    builder::read_clauses,
    session::{read_commands, Command},
    structures::clause::Clause,
    types::err::ErrorKind,
};

pub(super) enum ReadError {
    FailedToOpen(String),
    NoGoal,
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(path) => write!(f, "Failed to open {path}."),
            Self::NoGoal => write!(f, "The file has no clauses, and so no goal."),
            Self::ParseError(err) => write!(f, "{err}."),
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ReadError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(_) => Err(ReadError::FailedToOpen(path.display().to_string())),
    }
}

/// Reads the premises and goal at `path`, where the goal is the last clause.
pub(super) fn read_problem(path: &Path) -> Result<(Vec<Clause>, Clause), ReadError> {
    let mut clauses = read_clauses(open(path)?).map_err(ReadError::ParseError)?;

    match clauses.pop() {
        Some(goal) => Ok((
            clauses.into_iter().map(|line| line.clause).collect(),
            goal.clause,
        )),
        None => Err(ReadError::NoGoal),
    }
}

/// Reads the commands at `path`.
pub(super) fn read_command_file(path: &Path) -> Result<Vec<Command>, ReadError> {
    read_commands(open(path)?).map_err(ReadError::ParseError)
}
