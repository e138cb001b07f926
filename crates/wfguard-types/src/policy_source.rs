use camino::Utf8PathBuf;

/// Where the policy program comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicySource {
    /// Read from a file; unreadable files are fatal.
    File(Utf8PathBuf),
    /// The policy compiled into the binary.
    Embedded,
}

impl Default for PolicySource {
    fn default() -> Self {
        PolicySource::File(Utf8PathBuf::from(crate::ids::DEFAULT_POLICY_FILE))
    }
}
