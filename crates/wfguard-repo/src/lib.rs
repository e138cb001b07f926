//! Filesystem adapter: discover workflow files and parse them into documents.
//!
//! Discovery and parsing are the only IO in the pipeline besides reading the policy.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod parse;

pub use discover::{discover_workflow_files, is_workflow_file};
pub use error::{LoadError, ParseError};
pub use parse::parse_document;

use camino::Utf8Path;
use tracing::debug;
use wfguard_types::Document;

/// Load every workflow document under `repo_root/workflows_dir`.
///
/// Documents come back in walk order (lexical by file name at each level).
/// The first unreadable or unparsable file aborts the load; no partial result is returned.
pub fn load_documents(
    repo_root: &Utf8Path,
    workflows_dir: &Utf8Path,
    exclude: &[String],
) -> Result<Vec<Document>, LoadError> {
    let files = discover_workflow_files(repo_root, workflows_dir, exclude)?;

    let mut documents = Vec::with_capacity(files.len());
    for rel in files {
        let abs = repo_root.join(rel.as_str());
        let text = std::fs::read_to_string(&abs).map_err(|source| LoadError::Read {
            path: abs.clone(),
            source,
        })?;
        let doc = parse_document(rel, &text).map_err(|source| LoadError::Parse {
            path: abs.clone(),
            source,
        })?;
        debug!(path = %doc.path, keys = doc.root.len(), "loaded workflow document");
        documents.push(doc);
    }

    Ok(documents)
}

/// Entry points for `cargo fuzz`. Not part of the stable API.
#[doc(hidden)]
pub mod fuzz {
    use wfguard_types::RepoPath;

    pub fn parse_workflow(text: &str) -> Result<wfguard_types::Document, crate::ParseError> {
        crate::parse_document(RepoPath::new("fuzz.yml"), text)
    }
}
