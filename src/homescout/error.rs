use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Listing not found: {0}")]
    ListingNotFound(u64),

    /// Transport or upstream failure in a listing data source. Not raised by
    /// the bundled in-memory gateway; remote gateways map their I/O faults
    /// onto this variant.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// A data-source payload that cannot be coerced into a listing.
    #[error("Malformed listing data: {0}")]
    MalformedData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
