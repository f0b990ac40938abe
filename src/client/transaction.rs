//! `module=transaction` endpoints: execution and receipt status checks.

use crate::client::{Client, Query};
use crate::error::Error;
use crate::response::{ExecutionStatus, ReceiptStatus};

/// Parameters shared by the transaction actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParams {
    pub tx_hash: String,
}

impl TransactionParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.tx_hash.is_empty() {
            query.push(("txhash", self.tx_hash.clone()));
        }
        query
    }
}

impl Client {
    /// Contract execution status of a transaction.
    pub async fn execution_status(&self, tx_hash: &str) -> Result<ExecutionStatus, Error> {
        let params = TransactionParams {
            tx_hash: tx_hash.to_owned(),
        };
        self.call("transaction", "getstatus", params.to_query()).await
    }

    /// Receipt status of a transaction: 0 failed, 1 succeeded.
    ///
    /// Transactions mined before the Byzantium fork carry no receipt
    /// status; those fail with [`Error::PreByzantiumTx`].
    pub async fn receipt_status(&self, tx_hash: &str) -> Result<u8, Error> {
        let params = TransactionParams {
            tx_hash: tx_hash.to_owned(),
        };
        let raw: ReceiptStatus = self
            .call("transaction", "gettxreceiptstatus", params.to_query())
            .await?;
        match raw.status.as_str() {
            "0" => Ok(0),
            "1" => Ok(1),
            _ => Err(Error::PreByzantiumTx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_params_render() {
        assert!(TransactionParams::default().to_query().is_empty());
        assert_eq!(
            TransactionParams {
                tx_hash: "0x513c1ba0bebf66436b5fed86ab668452b7805593c05073eb2d51d3a52f480a76"
                    .to_owned()
            }
            .to_query(),
            vec![(
                "txhash",
                "0x513c1ba0bebf66436b5fed86ab668452b7805593c05073eb2d51d3a52f480a76".to_owned()
            )]
        );
    }
}
