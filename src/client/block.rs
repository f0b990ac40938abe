//! `module=block` endpoints: block rewards and block-by-time lookup.

use crate::client::{Client, Query};
use crate::error::Error;
use crate::response::BlockRewards;

/// Which block to pick when no block was mined at the exact timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closest {
    Before,
    After,
}

impl Closest {
    pub fn as_str(self) -> &'static str {
        match self {
            Closest::Before => "before",
            Closest::After => "after",
        }
    }
}

/// Parameters of `block`/`getblockreward`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRewardParams {
    pub block_no: u64,
}

impl BlockRewardParams {
    pub fn to_query(&self) -> Query {
        vec![("blockno", self.block_no.to_string())]
    }
}

/// Parameters of `block`/`getblocknobytime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNumberParams {
    pub timestamp: i64,
    pub closest: Closest,
}

impl BlockNumberParams {
    pub fn to_query(&self) -> Query {
        vec![
            ("timestamp", self.timestamp.to_string()),
            ("closest", self.closest.as_str().to_owned()),
        ]
    }
}

impl Client {
    /// Block and uncle rewards for one block.
    pub async fn block_reward(&self, block_no: u64) -> Result<BlockRewards, Error> {
        let params = BlockRewardParams { block_no };
        self.call("block", "getblockreward", params.to_query()).await
    }

    /// Number of the block mined closest to a unix timestamp.
    pub async fn block_number_by_time(
        &self,
        timestamp: i64,
        closest: Closest,
    ) -> Result<u64, Error> {
        let params = BlockNumberParams { timestamp, closest };
        let text: String = self
            .call("block", "getblocknobytime", params.to_query())
            .await?;
        text.parse().map_err(|_| Error::MalformedNumber(text))
    }
}
