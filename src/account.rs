//! Account credential files.
//!
//! One flat text file per account, named `<account>.txt`, holding a labeled
//! posting key somewhere in its body. Files are created externally; this
//! module only reads and removes them.

use regex::Regex;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Matches a labeled posting key: WIF version prefix `5` followed by at
/// least 50 characters of the base-58 alphabet (no `0`, `O`, `I`, `l`).
fn posting_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""posting"\s*:\s*"(5[1-9A-HJ-NP-Za-km-z]{50,})""#).unwrap())
}

/// A private posting key authorizing actions for one account
#[derive(Clone, PartialEq, Eq)]
pub struct PostingKey(String);

impl PostingKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PostingKey {
    // Key material stays out of logs and panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostingKey(5…)")
    }
}

/// Extract the labeled posting key from credential-file content.
pub fn extract_posting_key(content: &str) -> Option<PostingKey> {
    posting_key_re()
        .captures(content)
        .map(|caps| PostingKey(caps[1].to_string()))
}

/// One credential file: path plus the account name derived from the stem
#[derive(Debug, Clone)]
pub struct AccountFile {
    path: PathBuf,
    name: String,
}

impl AccountFile {
    /// Build from a path, requiring a `.txt` extension and a UTF-8 stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            return None;
        }
        let name = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            path: path.to_path_buf(),
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and extract its posting key, if any.
    pub fn read_key(&self) -> io::Result<Option<PostingKey>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(extract_posting_key(&content))
    }

    /// Remove the file. Returns `Ok(false)` when it was already gone, which
    /// a racing worker may legitimately cause.
    pub fn remove(&self) -> io::Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
