//! The API client: URL crafting, request execution, hooks and the typed
//! endpoint surface (one submodule per `module` routing key).

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::chain::Chain;
use crate::error::{BoxError, Error};
use crate::response;

pub mod account;
pub mod block;
pub mod contract;
pub mod gas;
pub mod logs;
pub mod stats;
pub mod transaction;

pub use block::Closest;

/// Production endpoint of the Etherscan v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/v2/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT_VALUE: &str = concat!("chainscan/", env!("CARGO_PKG_VERSION"), " (Rust)");

/// Rendered query parameters of one call, before the client injects
/// `module`, `action`, `apikey` and `chainid`.
pub type Query = Vec<(&'static str, String)>;

/// Runs before every request, on the calling task. Returning an error
/// aborts the call; useful for rate limiting.
pub type BeforeRequestHook =
    Box<dyn Fn(&str, &str, &Query) -> Result<(), BoxError> + Send + Sync>;

/// Runs after every request, even on failure. The last argument carries
/// the call's error, if any; returning an error replaces the outcome.
pub type AfterRequestHook =
    Box<dyn Fn(&str, &str, &Query, Option<&Error>) -> Result<(), BoxError> + Send + Sync>;

/// Sort direction accepted by the list endpoints. Only these two values
/// are producible; the API rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

impl Sort {
    pub fn as_str(self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }

    fn from_desc(desc: bool) -> Self {
        if desc {
            Sort::Desc
        } else {
            Sort::Asc
        }
    }
}

/// Etherscan-family API client.
///
/// Stateless after construction and safe for concurrent use: every call
/// is independent and only reads the immutable configuration. Hooks must
/// themselves be safe for concurrent invocation when the client is
/// shared.
pub struct Client {
    http: reqwest::Client,
    key: String,
    base_url: Url,
    chain: Chain,
    verbose: bool,
    before_request: Option<BeforeRequestHook>,
    after_request: Option<AfterRequestHook>,
}

/// Configuration surface for [`Client`], for use against non-default
/// endpoints (BscScan and friends), custom transports or hooks.
pub struct ClientBuilder {
    key: String,
    base_url: String,
    chain: Chain,
    timeout: Duration,
    verbose: bool,
    http: Option<reqwest::Client>,
    before_request: Option<BeforeRequestHook>,
    after_request: Option<AfterRequestHook>,
}

impl ClientBuilder {
    pub fn new(chain: Chain, key: impl Into<String>) -> Self {
        ClientBuilder {
            key: key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            chain,
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
            http: None,
            before_request: None,
            after_request: None,
        }
    }

    /// Base endpoint to call, e.g. `https://api.etherscan.io/v2/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Client-level timeout for each API call. Ignored when a custom
    /// transport is supplied; configure that client's timeout instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// When true, dumps every outgoing request and incoming response to
    /// stderr. Control flow is unaffected.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Use a pre-configured pooling HTTP client instead of building one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn before_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str, &Query) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.before_request = Some(Box::new(hook));
        self
    }

    pub fn after_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str, &Query, Option<&Error>) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.after_request = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = Url::parse(&self.base_url).map_err(Error::BaseUrl)?;
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };
        Ok(Client {
            http,
            key: self.key,
            base_url,
            chain: self.chain,
            verbose: self.verbose,
            before_request: self.before_request,
            after_request: self.after_request,
        })
    }
}

impl Client {
    /// Client against the production endpoint with a 30 second timeout.
    pub fn new(chain: Chain, key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(chain, key).build()
    }

    pub fn builder(chain: Chain, key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(chain, key)
    }

    /// Network this client targets.
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// Build the final request target: the caller's rendered parameters
    /// plus the four injected routing/credential parameters.
    fn craft_url(&self, module: &str, action: &str, query: &Query) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("module", module);
            pairs.append_pair("action", action);
            pairs.append_pair("apikey", &self.key);
            pairs.append_pair("chainid", &self.chain.id().to_string());
        }
        url
    }

    /// Issue a single GET and return the raw body. Non-200 responses are
    /// a terminal [`Error::HttpStatus`] and never reach the envelope
    /// decoder.
    pub async fn execute(&self, module: &str, action: &str, query: &Query) -> Result<Bytes, Error> {
        let request = self
            .http
            .get(self.craft_url(module, action, query))
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .build()?;

        if self.verbose {
            dump_request(&request);
        }

        let response = self.http.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if self.verbose {
            dump_response(status, &headers, &body);
        }

        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                status,
                reason: status.canonical_reason().unwrap_or("").to_owned(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    /// Run the before/after hooks around one executed and decoded call.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        module: &str,
        action: &'static str,
        query: Query,
    ) -> Result<T, Error> {
        if let Some(hook) = &self.before_request {
            hook(module, action, &query).map_err(Error::BeforeHook)?;
        }

        let outcome = self.execute_and_decode(module, action, &query).await;

        if let Some(hook) = &self.after_request {
            if let Err(err) = hook(module, action, &query, outcome.as_ref().err()) {
                return Err(Error::AfterHook(err));
            }
        }

        outcome
    }

    async fn execute_and_decode<T: DeserializeOwned>(
        &self,
        module: &str,
        action: &'static str,
        query: &Query,
    ) -> Result<T, Error> {
        let body = self.execute(module, action, query).await?;
        response::read_response(action, &body)
    }
}

fn dump_request(request: &reqwest::Request) {
    eprintln!("\n{} {}", request.method(), request.url());
    for (name, value) in request.headers() {
        eprintln!("{name}: {}", value.to_str().unwrap_or("<binary>"));
    }
}

fn dump_response(status: StatusCode, headers: &reqwest::header::HeaderMap, body: &[u8]) {
    eprintln!("\nHTTP {status}");
    for (name, value) in headers {
        eprintln!("{name}: {}", value.to_str().unwrap_or("<binary>"));
    }
    eprintln!("\n{}", String::from_utf8_lossy(body));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn craft_url_injects_routing_and_credentials() {
        let client = Client::new(Chain::EthereumMainnet, "abc123").unwrap();
        let url = client.craft_url(
            "testing",
            "craftURL",
            &vec![("one", "1".to_owned()), ("two", "2".to_owned())],
        );

        assert!(url.as_str().starts_with("https://api.etherscan.io/v2/api?"));

        let pairs = query_map(&url);
        assert_eq!(pairs["module"], "testing");
        assert_eq!(pairs["action"], "craftURL");
        assert_eq!(pairs["apikey"], "abc123");
        assert_eq!(pairs["chainid"], "1");
        assert_eq!(pairs["one"], "1");
        assert_eq!(pairs["two"], "2");
        assert_eq!(url.query_pairs().count(), 6);
    }

    #[test]
    fn craft_url_respects_custom_base_and_chain() {
        let client = Client::builder(Chain::BnbSmartChainMainnet, "k")
            .base_url("https://api.bscscan.com/api")
            .build()
            .unwrap();
        let url = client.craft_url("account", "balance", &Query::new());

        assert!(url.as_str().starts_with("https://api.bscscan.com/api?"));
        assert_eq!(query_map(&url)["chainid"], "56");
    }

    #[test]
    fn bad_base_url_fails_at_build() {
        let built = Client::builder(Chain::EthereumMainnet, "k")
            .base_url("not a url")
            .build();
        assert!(matches!(built, Err(Error::BaseUrl(_))));
    }

    #[test]
    fn sort_maps_desc_flag_to_literals() {
        assert_eq!(Sort::from_desc(false).as_str(), "asc");
        assert_eq!(Sort::from_desc(true).as_str(), "desc");
    }

    /// Serve exactly one canned HTTP response on a local socket and
    /// return the address to point the client at.
    async fn one_shot_server(response: &'static [u8]) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response).await;
        });
        addr
    }

    #[tokio::test]
    async fn non_200_response_is_http_status_error() {
        let addr = one_shot_server(
            b"HTTP/1.1 403 Forbidden\r\ncontent-length: 9\r\nconnection: close\r\n\r\nforbidden",
        )
        .await;

        let client = Client::builder(Chain::EthereumMainnet, "k")
            .base_url(format!("http://{addr}/api"))
            .build()
            .unwrap();

        let err = client.eth_supply().await.unwrap_err();
        match err {
            Error::HttpStatus { status, body, .. } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "forbidden");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn executes_and_decodes_an_envelope_end_to_end() {
        let body = br#"{"status":"1","message":"OK","result":"120000"}"#;
        let addr = one_shot_server(
            b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 47\r\nconnection: close\r\n\r\n{\"status\":\"1\",\"message\":\"OK\",\"result\":\"120000\"}",
        )
        .await;
        assert_eq!(body.len(), 47);

        let client = Client::builder(Chain::EthereumMainnet, "k")
            .base_url(format!("http://{addr}/api"))
            .build()
            .unwrap();

        let supply = client.eth_supply().await.unwrap();
        assert_eq!(supply.to_string(), "120000");
    }

    #[tokio::test]
    async fn before_hook_aborts_the_call() {
        let client = Client::builder(Chain::EthereumMainnet, "k")
            .before_request(|_, _, _| Err("rate limited".into()))
            .build()
            .unwrap();

        let err = client.eth_supply().await.unwrap_err();
        assert!(matches!(err, Error::BeforeHook(_)));
    }

    #[tokio::test]
    async fn after_hook_fires_on_failure_and_may_replace_the_error() {
        // Nothing listens on this port; the transport fails fast.
        let client = Client::builder(Chain::EthereumMainnet, "k")
            .base_url("http://127.0.0.1:9/api")
            .after_request(|_, _, _, err| {
                assert!(err.is_some());
                Err("observed failure".into())
            })
            .build()
            .unwrap();

        let err = client.eth_supply().await.unwrap_err();
        assert!(matches!(err, Error::AfterHook(_)));
    }
}
