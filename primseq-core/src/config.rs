use std::path::PathBuf;

pub const DEFAULT_MIN_QUERY_LEN: usize = 50;
pub const DEFAULT_MAX_QUERY_LEN: usize = 5000;

/// Thresholds for the fragment query length advisory. Queries outside the
/// range are still searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_query_len: usize,
    pub max_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            max_query_len: DEFAULT_MAX_QUERY_LEN,
        }
    }
}

impl SearchConfig {
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    pub fn with_max_query_len(mut self, len: usize) -> Self {
        self.max_query_len = len;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuerySource {
    /// Literal fragment searched as given.
    Fragment(String),
    /// Primer list file (`.txt` or `.csv`).
    PrimerFile(PathBuf),
}

/// The values a job needs before any searching starts: where the sequences
/// are, what to look for, and where the reports go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobConfig {
    pub input: PathBuf,
    pub query: QuerySource,
    pub output: PathBuf,
    pub search: SearchConfig,
}

impl JobConfig {
    pub fn new(input: impl Into<PathBuf>, query: QuerySource, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            query,
            output: output.into(),
            search: SearchConfig::default(),
        }
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
