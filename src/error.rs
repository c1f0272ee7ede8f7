use thiserror::Error;

/// Crate-wide result alias backed by `anyhow`.
pub type Result<T> = anyhow::Result<T>;

/// A validation attempt that could not produce a verdict.
///
/// Every transport-level problem (connectivity, TLS, timeout, non-2xx status,
/// unparseable body) collapses into a single failure for the whole attempt;
/// the failing request is not singled out beyond the underlying error text.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
