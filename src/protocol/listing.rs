//! Remote directory listing entries
//!
//! Converts raw `LIST` lines into typed entries.

use log::debug;
use suppaftp::list::File as ListedFile;

/// Kind of a remote directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One record of a remote directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    name: String,
    kind: EntryKind,
}

impl RemoteEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Parses one line of a `LIST` response (UNIX or DOS style).
    ///
    /// Symbolic links and lines the parser does not understand become
    /// `EntryKind::Other`, keeping the raw line as the name.
    pub fn from_list_line(line: &str) -> Self {
        match line.parse::<ListedFile>() {
            Ok(listed) => {
                let kind = if listed.is_file() {
                    EntryKind::File
                } else if listed.is_directory() {
                    EntryKind::Directory
                } else {
                    EntryKind::Other
                };
                Self::new(listed.name(), kind)
            }
            Err(e) => {
                debug!("Unparseable listing line {:?}: {:?}", line, e);
                Self::new(line.trim(), EntryKind::Other)
            }
        }
    }
}
