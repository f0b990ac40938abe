//! Typed `result` payloads, one per endpoint.
//!
//! Decoding is plain structural field mapping; all protocol quirks live in
//! the envelope decoder. Numeric fields the API ships as decimal strings
//! use the codecs from [`crate::types`].

use serde::Deserialize;

use crate::types::{dec_f64, dec_u64, ratio_list, BigInt, UnixTime};

/// One element of `account`/`balancemulti`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountBalance {
    pub account: String,
    pub balance: BigInt,
}

/// One element of `account`/`txlist`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalTx {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub hash: String,
    #[serde(with = "dec_u64")]
    pub nonce: u64,
    pub block_hash: String,
    #[serde(with = "dec_u64")]
    pub transaction_index: u64,
    pub from: String,
    pub to: String,
    pub value: BigInt,
    #[serde(with = "dec_u64")]
    pub gas: u64,
    pub gas_price: BigInt,
    pub is_error: String,
    #[serde(rename = "txreceipt_status")]
    pub tx_receipt_status: String,
    pub input: String,
    pub contract_address: String,
    #[serde(with = "dec_u64")]
    pub cumulative_gas_used: u64,
    #[serde(with = "dec_u64")]
    pub gas_used: u64,
    #[serde(with = "dec_u64")]
    pub confirmations: u64,
}

/// One element of `account`/`txlistinternal`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTx {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: BigInt,
    pub contract_address: String,
    pub input: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "dec_u64")]
    pub gas: u64,
    #[serde(with = "dec_u64")]
    pub gas_used: u64,
    pub trace_id: String,
    pub is_error: String,
    pub err_code: String,
}

/// One element of `account`/`tokentx`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Transfer {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub hash: String,
    #[serde(with = "dec_u64")]
    pub nonce: u64,
    pub block_hash: String,
    pub from: String,
    pub contract_address: String,
    pub to: String,
    pub value: BigInt,
    pub token_name: String,
    pub token_symbol: String,
    #[serde(with = "dec_u64")]
    pub token_decimal: u64,
    #[serde(with = "dec_u64")]
    pub transaction_index: u64,
    #[serde(with = "dec_u64")]
    pub gas: u64,
    pub gas_price: BigInt,
    #[serde(with = "dec_u64")]
    pub gas_used: u64,
    #[serde(with = "dec_u64")]
    pub cumulative_gas_used: u64,
    pub input: String,
    #[serde(with = "dec_u64")]
    pub confirmations: u64,
}

/// One element of `account`/`tokennfttx`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Transfer {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub hash: String,
    #[serde(with = "dec_u64")]
    pub nonce: u64,
    pub block_hash: String,
    pub from: String,
    pub contract_address: String,
    pub to: String,
    #[serde(rename = "tokenID")]
    pub token_id: BigInt,
    pub token_name: String,
    pub token_symbol: String,
    #[serde(with = "dec_u64")]
    pub token_decimal: u64,
    #[serde(with = "dec_u64")]
    pub transaction_index: u64,
    #[serde(with = "dec_u64")]
    pub gas: u64,
    pub gas_price: BigInt,
    #[serde(with = "dec_u64")]
    pub gas_used: u64,
    #[serde(with = "dec_u64")]
    pub cumulative_gas_used: u64,
    pub input: String,
    #[serde(with = "dec_u64")]
    pub confirmations: u64,
}

/// One element of `account`/`token1155tx`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc1155Transfer {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub hash: String,
    #[serde(with = "dec_u64")]
    pub nonce: u64,
    pub block_hash: String,
    pub from: String,
    pub contract_address: String,
    pub to: String,
    #[serde(rename = "tokenID")]
    pub token_id: BigInt,
    pub token_value: BigInt,
    pub token_name: String,
    pub token_symbol: String,
    #[serde(with = "dec_u64")]
    pub transaction_index: u64,
    #[serde(with = "dec_u64")]
    pub gas: u64,
    pub gas_price: BigInt,
    #[serde(with = "dec_u64")]
    pub gas_used: u64,
    #[serde(with = "dec_u64")]
    pub cumulative_gas_used: u64,
    pub input: String,
    #[serde(with = "dec_u64")]
    pub confirmations: u64,
}

/// One element of `account`/`getminedblocks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinedBlock {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub block_reward: BigInt,
}

/// `block`/`getblockreward`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRewards {
    #[serde(with = "dec_u64")]
    pub block_number: u64,
    pub time_stamp: UnixTime,
    pub block_miner: String,
    pub block_reward: BigInt,
    pub uncles: Vec<UncleReward>,
    pub uncle_inclusion_reward: BigInt,
}

/// Uncle entry inside [`BlockRewards`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UncleReward {
    pub miner: String,
    #[serde(rename = "unclePosition", with = "dec_u64")]
    pub uncle_position: u64,
    #[serde(rename = "blockreward")]
    pub block_reward: BigInt,
}

/// One element of `contract`/`getsourcecode`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractSource {
    pub source_code: String,
    #[serde(rename = "ABI")]
    pub abi: String,
    pub contract_name: String,
    pub compiler_version: String,
    pub optimization_used: String,
    pub runs: String,
    pub constructor_arguments: String,
    #[serde(rename = "EVMVersion")]
    pub evm_version: String,
    pub library: String,
    pub license_type: String,
    pub proxy: String,
    pub implementation: String,
    pub swarm_source: String,
}

/// `transaction`/`getstatus`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    /// `"0"` when execution succeeded, `"1"` when it errored.
    pub is_error: String,
    pub err_description: String,
}

/// `transaction`/`gettxreceiptstatus`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReceiptStatus {
    pub status: String,
}

/// One element of `logs`/`getLogs`. All quantities are hex strings
/// (`"0x..."`) as the API ships them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    pub block_number: String,
    pub time_stamp: String,
    pub gas_price: String,
    pub gas_used: String,
    pub log_index: String,
    pub transaction_hash: String,
    pub transaction_index: String,
}

/// `gastracker`/`gasoracle`. Prices are in Gwei.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GasPrices {
    #[serde(rename = "LastBlock", with = "dec_u64")]
    pub last_block: u64,
    #[serde(rename = "SafeGasPrice", with = "dec_f64")]
    pub safe_gas_price: f64,
    #[serde(rename = "ProposeGasPrice", with = "dec_f64")]
    pub propose_gas_price: f64,
    #[serde(rename = "FastGasPrice", with = "dec_f64")]
    pub fast_gas_price: f64,
    #[serde(rename = "suggestBaseFee", with = "dec_f64")]
    pub suggest_base_fee: f64,
    #[serde(rename = "gasUsedRatio", with = "ratio_list")]
    pub gas_used_ratio: Vec<f64>,
}

/// `stats`/`ethprice`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatestPrice {
    #[serde(with = "dec_f64")]
    pub ethbtc: f64,
    pub ethbtc_timestamp: UnixTime,
    #[serde(with = "dec_f64")]
    pub ethusd: f64,
    pub ethusd_timestamp: UnixTime,
}
