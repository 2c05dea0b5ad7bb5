use thiserror::Error;

/// Failures a search call can surface. `InvalidQuery` is a caller mistake
/// mapped to 400; `Store` means a required lookup did not complete and the
/// whole call fails (no partial buckets).
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("query must not be empty")]
    InvalidQuery,

    #[error("{stage} failed: {cause}")]
    Store {
        stage: &'static str,
        cause: anyhow::Error,
    },
}
