use thiserror::Error;

/// Failure of a single provider call.
///
/// Every variant stays inside one dispatch: the service boundary converts
/// all of them into a demo reply, so none of these reach the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport failure: DNS, connect, refusal, abort, or timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `detail` is the provider's nested error message
    /// when the body carried one, otherwise the raw status text.
    #[error("HTTP {status}: {detail}")]
    HttpStatus { status: u16, detail: String },

    /// 2xx response whose body does not contain the expected reply text.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

pub type ChatResult<T> = Result<T, ProviderError>;
