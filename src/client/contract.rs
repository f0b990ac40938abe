//! `module=contract` endpoints: verified ABI and source lookup.

use crate::client::{Client, Query};
use crate::error::Error;
use crate::response::ContractSource;

/// Parameters shared by the contract actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractParams {
    pub address: String,
}

impl ContractParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.address.is_empty() {
            query.push(("address", self.address.clone()));
        }
        query
    }
}

impl Client {
    /// ABI of a verified contract, as the raw JSON string the API ships.
    pub async fn contract_abi(&self, address: &str) -> Result<String, Error> {
        let params = ContractParams {
            address: address.to_owned(),
        };
        self.call("contract", "getabi", params.to_query()).await
    }

    /// Source code of a verified contract.
    pub async fn contract_source(&self, address: &str) -> Result<Vec<ContractSource>, Error> {
        let params = ContractParams {
            address: address.to_owned(),
        };
        self.call("contract", "getsourcecode", params.to_query()).await
    }
}
