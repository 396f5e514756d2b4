//! In-memory file tree served by the fake server.

/// A node of the fake file tree
#[derive(Debug, Clone)]
pub enum FakeEntry {
    Directory,
    File(Vec<u8>),
}

/// Absolute `/`-separated paths to entries, kept in insertion order so
/// listings come back in a predictable order.
#[derive(Debug, Clone, Default)]
pub struct FakeFileSystem {
    entries: Vec<(String, FakeEntry)>,
    listing_only: Vec<(String, String)>,
}

/// `/pub/` -> `/pub`, `pub//data` -> `/pub/data`
pub fn normalize(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty() && *p != ".").collect();
    format!("/{}", parts.join("/"))
}

fn parent_of(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) | None => "/",
        Some((parent, _)) => parent,
    }
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&mut self, path: &str) -> &mut Self {
        self.entries.push((normalize(path), FakeEntry::Directory));
        self
    }

    pub fn add_file(&mut self, path: &str, content: &[u8]) -> &mut Self {
        self.entries
            .push((normalize(path), FakeEntry::File(content.to_vec())));
        self
    }

    pub fn is_directory(&self, path: &str) -> bool {
        let path = normalize(path);
        path == "/"
            || self
                .entries
                .iter()
                .any(|(p, e)| *p == path && matches!(e, FakeEntry::Directory))
            || self.entries.iter().any(|(p, _)| parent_of(p) == path)
    }

    /// Adds a file line to the listing of `dir` with `name` exactly as
    /// given, e.g. `../x`. Only the listing shows it; it cannot be retrieved.
    pub fn add_listing_only(&mut self, dir: &str, name: &str) -> &mut Self {
        self.listing_only.push((normalize(dir), name.to_string()));
        self
    }

    pub fn file(&self, path: &str) -> Option<&[u8]> {
        let path = normalize(path);
        self.entries.iter().find_map(|(p, e)| match e {
            FakeEntry::File(content) if *p == path => Some(content.as_slice()),
            _ => None,
        })
    }

    /// UNIX `ls -l` style lines for the direct children of `dir`
    pub fn list_lines(&self, dir: &str) -> Vec<String> {
        let dir = normalize(dir);
        let extra = self
            .listing_only
            .iter()
            .filter(|(d, _)| *d == dir)
            .map(|(_, name)| {
                format!("-rw-r--r--   1 ftp      ftp             3 Jan 01 12:00 {}", name)
            });
        self.entries
            .iter()
            .filter(|(p, _)| parent_of(p) == dir && *p != dir)
            .map(|(p, entry)| {
                let name = p.rsplit('/').next().unwrap_or(p);
                match entry {
                    FakeEntry::Directory => format!(
                        "drwxr-xr-x   1 ftp      ftp          4096 Jan 01 12:00 {}",
                        name
                    ),
                    FakeEntry::File(content) => format!(
                        "-rw-r--r--   1 ftp      ftp      {:>8} Jan 01 12:00 {}",
                        content.len(),
                        name
                    ),
                }
            })
            .chain(extra)
            .collect()
    }
}
