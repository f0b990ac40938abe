//! Typed client for Etherscan-family block explorer APIs.
//!
//! Every call is a single HTTP GET against the v2 `api` endpoint with
//! `module`/`action` routing, decoded from the uniform
//! `{status, message, result}` JSON envelope into typed results.
//!
//! ```no_run
//! use chainscan::{Chain, Client};
//!
//! # async fn run() -> Result<(), chainscan::Error> {
//! let client = Client::new(Chain::EthereumMainnet, "YourApiKeyToken")?;
//! let balance = client.account_balance("0x742d35Cc6634C0532925a3b844Bc454e4438f44e").await?;
//! println!("{balance} wei");
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod client;
pub mod error;
pub mod response;
pub mod types;

pub use chain::Chain;
pub use client::{Client, ClientBuilder, Closest, Sort};
pub use error::{BoxError, Error};
pub use types::{BigInt, UnixTime};
