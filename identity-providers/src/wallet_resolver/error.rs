use thiserror::Error;

/// Failure of an async wallet lookup collaborator.
///
/// These never cross the resolver boundary; the resolver converts them into
/// a `None` result and a logged diagnostic.
#[derive(Clone, Error, Debug)]
pub enum ResolutionError {
    #[error("Lookup failed: `{0}`")]
    LookupFailed(String),
    #[error("Lookup timed out")]
    Timeout,
}
