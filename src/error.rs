use std::time::Duration;

/// Errors raised for programmer-usage mistakes and local failures.
///
/// Per-request upstream failures are never surfaced through this type: they are
/// absorbed by the response normalizer and returned as error mappings carrying a
/// `status` key. Only bad ranges, bad configuration, premature accessor use and
/// local setup failures escape as `Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The numeric value of the start date exceeds the numeric value of the end
    /// date. Checked on the raw inputs, before nearest-date snapping.
    #[error("end date {end} is not greater than start date {start}")]
    InvalidRange { start: String, end: String },

    /// The concurrency limit was set above the upstream per-host cap. The
    /// service cannot process more than 10 concurrent requests from one host.
    #[error(
        "the maximum number of concurrent requests cannot be {0}, since the API \
         service cannot process more than 10 concurrent requests from the same host"
    )]
    Configuration(usize),

    /// A last-request accessor was queried before any request completed.
    #[error("{0}; try to make a valid request first")]
    NotFound(&'static str),

    /// An operation that must see a well-formed dates listing got an error
    /// mapping instead. Carries the upstream `detail` field as its message.
    #[error("{0}")]
    Upstream(String),

    /// The blocking or per-invocation async HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The runtime backing a concurrent batch could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// A request timeout of zero (or otherwise unusable) duration was supplied.
    #[error("invalid request timeout {0:?}")]
    Timeout(Duration),
}
