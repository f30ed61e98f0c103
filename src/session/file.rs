use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use crate::{config::Config, misc::log::targets, types::err::ErrorKind};

use super::{Command, KnowledgeBase, Response};

/// A knowledge base stored as a file, one clause to a line.
///
/// Each command reads the file afresh, applies the command, and if the command edits the knowledge base writes the result back.
/// The result is written to a temporary file alongside the knowledge base and then renamed over it, so a failed command leaves the file as it was.
#[derive(Clone, Debug)]
pub struct KnowledgeFile {
    path: PathBuf,
}

impl KnowledgeFile {
    /// A knowledge base stored at `path`.
    ///
    /// ```rust
    /// # use refute::session::KnowledgeFile;
    /// let file = KnowledgeFile::new("knowledge.txt");
    /// assert_eq!(file.path(), std::path::Path::new("knowledge.txt"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        KnowledgeFile { path: path.into() }
    }

    /// The path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the knowledge base from the file.
    pub fn load(&self) -> Result<KnowledgeBase, ErrorKind> {
        let file = File::open(&self.path)?;
        KnowledgeBase::read_from(BufReader::new(file))
    }

    /// Writes the knowledge base to the file.
    pub fn store(&self, knowledge_base: &KnowledgeBase) -> Result<(), ErrorKind> {
        let mut temporary = self.path.clone().into_os_string();
        temporary.push(".tmp");
        let temporary = PathBuf::from(temporary);

        let written = File::create(&temporary)
            .and_then(|file| knowledge_base.write_to(BufWriter::new(file)))
            .and_then(|_| std::fs::rename(&temporary, &self.path));

        if let Err(e) = written {
            log::error!(target: targets::KNOWLEDGE_BASE, "Failed to store {:?}: {e}", self.path);
            let _ = std::fs::remove_file(&temporary);
            return Err(e.into());
        }

        Ok(())
    }

    /// Applies a command to the knowledge base of the file.
    pub fn apply(&self, command: &Command, config: &Config) -> Result<Response, ErrorKind> {
        let mut knowledge_base = self.load()?;
        let response = knowledge_base.apply(command, config)?;

        if response.is_edit() {
            self.store(&knowledge_base)?;
        }

        Ok(response)
    }
}
