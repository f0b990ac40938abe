use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error returned by caller-supplied request hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong during a single API call.
///
/// No variant is retried by the client; each call independently reports
/// its own outcome to the immediate caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Network, DNS or connection failure while talking to the API.
    #[error("sending request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-200 status. The body is kept verbatim
    /// for diagnostics and is never parsed as an envelope.
    #[error("got non-200 status code: {status} {reason}; response body: {body}")]
    HttpStatus {
        status: StatusCode,
        reason: String,
        body: String,
    },

    /// The response body was not a well-formed `{status, message, result}`
    /// envelope.
    #[error("unmarshaling response envelope: {0}")]
    EnvelopeParse(#[source] serde_json::Error),

    /// The API reported a failure (`status` other than `"1"`); the upstream
    /// message is surfaced verbatim.
    #[error("etherscan server: {0}")]
    Api(String),

    /// The envelope was valid but `result` did not match the shape the
    /// endpoint declares.
    #[error("unmarshaling result of {action}: {source}")]
    ResultDecode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Text that should have been a decimal integer was not one.
    #[error("malformed decimal integer {0:?}")]
    MalformedNumber(String),

    /// Text that should have been a unix-seconds timestamp was not one.
    #[error("malformed unix timestamp {0:?}")]
    MalformedTimestamp(String),

    /// Receipt status is not reported for transactions mined before the
    /// Byzantium fork (block 4,370,000).
    #[error("pre-byzantium transaction does not support receipt status check")]
    PreByzantiumTx,

    /// The configured base URL could not be parsed.
    #[error("parsing base URL: {0}")]
    BaseUrl(#[source] url::ParseError),

    /// The before-request hook aborted the call.
    #[error("running before-request hook: {0}")]
    BeforeHook(#[source] BoxError),

    /// The after-request hook replaced the call's outcome.
    #[error("running after-request hook: {0}")]
    AfterHook(#[source] BoxError),
}
