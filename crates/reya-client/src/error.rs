use thiserror::Error;

/// A whole-snapshot fetch failure.
///
/// Fetches either fully succeed or fail with one of these; there is no
/// partial-snapshot recovery and no retry. The caller is expected to
/// surface the message and stop rendering the affected domain.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

// Note: FetchError implements std::error::Error via thiserror::Error,
// so it automatically converts to anyhow::Error via anyhow's blanket impl
