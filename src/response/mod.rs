//! Decoding of the uniform `{status, message, result}` response envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::Error;

mod models;

pub use models::{
    AccountBalance, BlockRewards, ContractSource, Erc1155Transfer, Erc20Transfer, Erc721Transfer,
    ExecutionStatus, GasPrices, InternalTx, LatestPrice, Log, MinedBlock, NormalTx, ReceiptStatus,
    UncleReward,
};

/// The three-field wrapper every endpoint answers with. `result` is kept
/// raw so it can be decoded into the caller's type only after the status
/// check passes.
#[derive(Deserialize)]
struct Envelope {
    status: String,
    message: String,
    result: Option<Box<RawValue>>,
}

/// Actions known to put the human-readable error text into `result`
/// instead of `message` when a call fails. This is a fixed per-endpoint
/// allowlist, not a heuristic; extend it only after observing the live
/// API misbehave for an action.
const ERROR_TEXT_IN_RESULT: &[&str] =
    &["getabi", "getsourcecode", "getblocknobytime", "gasestimate"];

/// Token-transfer actions where the API omits `tokenDecimal` for some
/// non-standard tokens, shipping `""` instead of `"0"`.
const TOKEN_TRANSFER_ACTIONS: &[&str] = &["tokentx", "tokennfttx", "token1155tx"];

/// Parse `body` as an envelope, enforce `status == "1"` and decode
/// `result` into `T`.
pub(crate) fn read_response<T: DeserializeOwned>(
    action: &'static str,
    body: &[u8],
) -> Result<T, Error> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(Error::EnvelopeParse)?;

    if envelope.status != "1" {
        let mut message = envelope.message;
        if ERROR_TEXT_IN_RESULT.contains(&action) {
            if let Some(raw) = &envelope.result {
                if let Ok(text) = serde_json::from_str::<String>(raw.get()) {
                    if !text.is_empty() {
                        message = text;
                    }
                }
            }
        }
        return Err(Error::Api(message));
    }

    let raw = match &envelope.result {
        Some(raw) => raw.get(),
        None => "null",
    };

    let decoded = if TOKEN_TRANSFER_ACTIONS.contains(&action) {
        // Repair missing tokenDecimal before structural decoding so one
        // odd token does not fail the whole batch.
        let repaired = raw.replace(r#""tokenDecimal":"""#, r#""tokenDecimal":"0""#);
        serde_json::from_str(&repaired)
    } else {
        serde_json::from_str(raw)
    };

    decoded.map_err(|source| Error::ResultDecode { action, source })
}
