//! `module=logs` endpoint: event log queries.

use crate::client::{Client, Query};
use crate::error::Error;
use crate::response::Log;

/// Parameters of `logs`/`getLogs`. All four fields are required by the
/// endpoint and always render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogParams {
    pub from_block: u64,
    pub to_block: u64,
    pub topic0: String,
    pub address: String,
}

impl LogParams {
    pub fn to_query(&self) -> Query {
        vec![
            ("fromBlock", self.from_block.to_string()),
            ("toBlock", self.to_block.to_string()),
            ("topic0", self.topic0.clone()),
            ("address", self.address.clone()),
        ]
    }
}

impl Client {
    /// Logs matching `topic0` emitted by `address` within the block range.
    pub async fn get_logs(
        &self,
        from_block: u64,
        to_block: u64,
        address: &str,
        topic0: &str,
    ) -> Result<Vec<Log>, Error> {
        let params = LogParams {
            from_block,
            to_block,
            topic0: topic0.to_owned(),
            address: address.to_owned(),
        };
        self.call("logs", "getLogs", params.to_query()).await
    }
}
