//! `module=account` endpoints: balances, transaction lists, token
//! transfers and mined blocks.

use crate::client::{Client, Query, Sort};
use crate::error::Error;
use crate::response::{
    AccountBalance, Erc1155Transfer, Erc20Transfer, Erc721Transfer, InternalTx, MinedBlock,
    NormalTx,
};
use crate::types::BigInt;

/// Parameters of `account`/`balance`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBalanceParams {
    pub tag: String,
    pub address: String,
}

impl AccountBalanceParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.tag.is_empty() {
            query.push(("tag", self.tag.clone()));
        }
        if !self.address.is_empty() {
            query.push(("address", self.address.clone()));
        }
        query
    }
}

/// Parameters of `account`/`balancemulti`. The addresses render as one
/// comma-joined `address` value; the API does not accept repeated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiAccountBalanceParams {
    pub tag: String,
    pub addresses: Vec<String>,
}

impl MultiAccountBalanceParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.tag.is_empty() {
            query.push(("tag", self.tag.clone()));
        }
        if !self.addresses.is_empty() {
            query.push(("address", self.addresses.join(",")));
        }
        query
    }
}

/// Parameters of `account`/`txlist` and `account`/`txlistinternal`.
///
/// The block-range bounds are optional so that an explicitly set start
/// block of 0 stays distinguishable from "no bound". Paging fields
/// always render; the endpoint requires them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxListParams {
    pub address: String,
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: u64,
    pub offset: u64,
    pub sort: Option<Sort>,
}

impl TxListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.address.is_empty() {
            query.push(("address", self.address.clone()));
        }
        if let Some(start_block) = self.start_block {
            query.push(("startblock", start_block.to_string()));
        }
        if let Some(end_block) = self.end_block {
            query.push(("endblock", end_block.to_string()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("offset", self.offset.to_string()));
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().to_owned()));
        }
        query
    }
}

/// Parameters of the token-transfer actions (`tokentx`, `tokennfttx`,
/// `token1155tx`). Either the contract address, the holder address or
/// both may be given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTransferParams {
    pub contract_address: Option<String>,
    pub address: Option<String>,
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: u64,
    pub offset: u64,
    pub sort: Option<Sort>,
}

impl TokenTransferParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(contract_address) = &self.contract_address {
            query.push(("contractaddress", contract_address.clone()));
        }
        if let Some(address) = &self.address {
            query.push(("address", address.clone()));
        }
        if let Some(start_block) = self.start_block {
            query.push(("startblock", start_block.to_string()));
        }
        if let Some(end_block) = self.end_block {
            query.push(("endblock", end_block.to_string()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("offset", self.offset.to_string()));
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().to_owned()));
        }
        query
    }
}

/// Parameters of `account`/`getminedblocks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinedBlockParams {
    pub address: String,
    pub block_type: String,
    pub page: u64,
    pub offset: u64,
}

impl MinedBlockParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.address.is_empty() {
            query.push(("address", self.address.clone()));
        }
        if !self.block_type.is_empty() {
            query.push(("blocktype", self.block_type.clone()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("offset", self.offset.to_string()));
        query
    }
}

/// Parameters of `account`/`tokenbalance`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBalanceParams {
    pub contract_address: String,
    pub address: String,
    pub tag: String,
}

impl TokenBalanceParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.contract_address.is_empty() {
            query.push(("contractaddress", self.contract_address.clone()));
        }
        if !self.address.is_empty() {
            query.push(("address", self.address.clone()));
        }
        if !self.tag.is_empty() {
            query.push(("tag", self.tag.clone()));
        }
        query
    }
}

impl Client {
    /// Ether balance of a single address at the latest block, in wei.
    pub async fn account_balance(&self, address: &str) -> Result<BigInt, Error> {
        let params = AccountBalanceParams {
            tag: "latest".to_owned(),
            address: address.to_owned(),
        };
        self.call("account", "balance", params.to_query()).await
    }

    /// Ether balances for up to 20 addresses in one call.
    pub async fn multi_account_balance(
        &self,
        addresses: &[&str],
    ) -> Result<Vec<AccountBalance>, Error> {
        let params = MultiAccountBalanceParams {
            tag: "latest".to_owned(),
            addresses: addresses.iter().map(|a| (*a).to_owned()).collect(),
        };
        self.call("account", "balancemulti", params.to_query()).await
    }

    /// Normal (external) transactions by address, paged.
    pub async fn normal_txs(
        &self,
        address: &str,
        start_block: Option<u64>,
        end_block: Option<u64>,
        page: u64,
        offset: u64,
        desc: bool,
    ) -> Result<Vec<NormalTx>, Error> {
        let params = TxListParams {
            address: address.to_owned(),
            start_block,
            end_block,
            page,
            offset,
            sort: Some(Sort::from_desc(desc)),
        };
        self.call("account", "txlist", params.to_query()).await
    }

    /// Internal (message-call) transactions by address, paged.
    pub async fn internal_txs(
        &self,
        address: &str,
        start_block: Option<u64>,
        end_block: Option<u64>,
        page: u64,
        offset: u64,
        desc: bool,
    ) -> Result<Vec<InternalTx>, Error> {
        let params = TxListParams {
            address: address.to_owned(),
            start_block,
            end_block,
            page,
            offset,
            sort: Some(Sort::from_desc(desc)),
        };
        self.call("account", "txlistinternal", params.to_query()).await
    }

    /// ERC-20 token transfers, filtered by contract and/or holder.
    pub async fn erc20_transfers(
        &self,
        contract_address: Option<&str>,
        address: Option<&str>,
        start_block: Option<u64>,
        end_block: Option<u64>,
        page: u64,
        offset: u64,
        desc: bool,
    ) -> Result<Vec<Erc20Transfer>, Error> {
        let params = TokenTransferParams {
            contract_address: contract_address.map(str::to_owned),
            address: address.map(str::to_owned),
            start_block,
            end_block,
            page,
            offset,
            sort: Some(Sort::from_desc(desc)),
        };
        self.call("account", "tokentx", params.to_query()).await
    }

    /// ERC-721 token transfers, filtered by contract and/or holder.
    pub async fn erc721_transfers(
        &self,
        contract_address: Option<&str>,
        address: Option<&str>,
        start_block: Option<u64>,
        end_block: Option<u64>,
        page: u64,
        offset: u64,
        desc: bool,
    ) -> Result<Vec<Erc721Transfer>, Error> {
        let params = TokenTransferParams {
            contract_address: contract_address.map(str::to_owned),
            address: address.map(str::to_owned),
            start_block,
            end_block,
            page,
            offset,
            sort: Some(Sort::from_desc(desc)),
        };
        self.call("account", "tokennfttx", params.to_query()).await
    }

    /// ERC-1155 token transfers, filtered by contract and/or holder.
    pub async fn erc1155_transfers(
        &self,
        contract_address: Option<&str>,
        address: Option<&str>,
        start_block: Option<u64>,
        end_block: Option<u64>,
        page: u64,
        offset: u64,
        desc: bool,
    ) -> Result<Vec<Erc1155Transfer>, Error> {
        let params = TokenTransferParams {
            contract_address: contract_address.map(str::to_owned),
            address: address.map(str::to_owned),
            start_block,
            end_block,
            page,
            offset,
            sort: Some(Sort::from_desc(desc)),
        };
        self.call("account", "token1155tx", params.to_query()).await
    }

    /// Blocks validated by an address, paged.
    pub async fn blocks_mined(
        &self,
        address: &str,
        page: u64,
        offset: u64,
    ) -> Result<Vec<MinedBlock>, Error> {
        let params = MinedBlockParams {
            address: address.to_owned(),
            block_type: "blocks".to_owned(),
            page,
            offset,
        };
        self.call("account", "getminedblocks", params.to_query()).await
    }

    /// Uncle blocks mined by an address, paged.
    pub async fn uncles_mined(
        &self,
        address: &str,
        page: u64,
        offset: u64,
    ) -> Result<Vec<MinedBlock>, Error> {
        let params = MinedBlockParams {
            address: address.to_owned(),
            block_type: "uncles".to_owned(),
            page,
            offset,
        };
        self.call("account", "getminedblocks", params.to_query()).await
    }

    /// ERC-20 token balance of `address` on `contract_address`, in the
    /// token's smallest unit.
    pub async fn token_balance(
        &self,
        contract_address: &str,
        address: &str,
    ) -> Result<BigInt, Error> {
        let params = TokenBalanceParams {
            contract_address: contract_address.to_owned(),
            address: address.to_owned(),
            tag: "latest".to_owned(),
        };
        self.call("account", "tokenbalance", params.to_query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn as_map(query: Query) -> HashMap<&'static str, String> {
        let len = query.len();
        let map: HashMap<_, _> = query.into_iter().collect();
        // No duplicate keys sneaked in.
        assert_eq!(map.len(), len);
        map
    }

    #[test]
    fn account_balance_params_render() {
        assert!(AccountBalanceParams::default().to_query().is_empty());

        let query = as_map(
            AccountBalanceParams {
                tag: "latest".to_owned(),
                address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_owned(),
            }
            .to_query(),
        );
        assert_eq!(query["tag"], "latest");
        assert_eq!(query["address"], "0x742d35Cc6634C0532925a3b844Bc454e4438f44e");
    }

    #[test]
    fn multi_balance_params_join_addresses_under_one_key() {
        assert!(MultiAccountBalanceParams::default().to_query().is_empty());

        let query = as_map(
            MultiAccountBalanceParams {
                tag: "latest".to_owned(),
                addresses: vec!["0xAAA".to_owned(), "0xBBB".to_owned()],
            }
            .to_query(),
        );
        assert_eq!(query["address"], "0xAAA,0xBBB");
        assert_eq!(query["tag"], "latest");
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn tx_list_params_minimal() {
        let query = as_map(
            TxListParams {
                address: "0xABC".to_owned(),
                page: 1,
                offset: 10,
                ..Default::default()
            }
            .to_query(),
        );
        assert_eq!(query["address"], "0xABC");
        assert_eq!(query["page"], "1");
        assert_eq!(query["offset"], "10");
        // Absent optional fields are omitted entirely.
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn tx_list_params_full() {
        let query = as_map(
            TxListParams {
                address: "0xABC".to_owned(),
                start_block: Some(12345),
                end_block: Some(12346),
                page: 1,
                offset: 10,
                sort: Some(Sort::Asc),
            }
            .to_query(),
        );
        assert_eq!(query["startblock"], "12345");
        assert_eq!(query["endblock"], "12346");
        assert_eq!(query["sort"], "asc");
        assert_eq!(query.len(), 6);
    }

    #[test]
    fn tx_list_params_zero_start_block_still_renders() {
        let query = as_map(
            TxListParams {
                address: "0xABC".to_owned(),
                start_block: Some(0),
                page: 1,
                offset: 10,
                ..Default::default()
            }
            .to_query(),
        );
        assert_eq!(query["startblock"], "0");
    }

    #[test]
    fn token_transfer_params_render() {
        let minimal = as_map(
            TokenTransferParams {
                page: 1,
                offset: 10,
                ..Default::default()
            }
            .to_query(),
        );
        assert_eq!(minimal.len(), 2);
        assert_eq!(minimal["page"], "1");
        assert_eq!(minimal["offset"], "10");

        let full = as_map(
            TokenTransferParams {
                contract_address: Some("0xCCC".to_owned()),
                address: Some("0xDDD".to_owned()),
                start_block: Some(12345),
                end_block: Some(12346),
                page: 1,
                offset: 10,
                sort: Some(Sort::Desc),
            }
            .to_query(),
        );
        assert_eq!(full["contractaddress"], "0xCCC");
        assert_eq!(full["address"], "0xDDD");
        assert_eq!(full["sort"], "desc");
        assert_eq!(full.len(), 7);
    }

    #[test]
    fn mined_block_params_always_render_paging() {
        let query = as_map(
            MinedBlockParams {
                page: 0,
                offset: 0,
                ..Default::default()
            }
            .to_query(),
        );
        assert_eq!(query["page"], "0");
        assert_eq!(query["offset"], "0");
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn token_balance_params_render() {
        assert!(TokenBalanceParams::default().to_query().is_empty());

        let query = as_map(
            TokenBalanceParams {
                contract_address: "0xCCC".to_owned(),
                address: "0xDDD".to_owned(),
                tag: "latest".to_owned(),
            }
            .to_query(),
        );
        assert_eq!(query["contractaddress"], "0xCCC");
        assert_eq!(query["address"], "0xDDD");
        assert_eq!(query["tag"], "latest");
    }
}
