//! `module=stats` endpoints: supplies and the latest ether price.

use crate::client::{Client, Query};
use crate::error::Error;
use crate::response::LatestPrice;
use crate::types::BigInt;

/// Parameters of `stats`/`tokensupply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTotalSupplyParams {
    pub contract_address: String,
}

impl TokenTotalSupplyParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if !self.contract_address.is_empty() {
            query.push(("contractaddress", self.contract_address.clone()));
        }
        query
    }
}

impl Client {
    /// Total supply of ether, in wei.
    pub async fn eth_supply(&self) -> Result<BigInt, Error> {
        self.call("stats", "ethsupply", Query::new()).await
    }

    /// Latest ether price, in BTC and USD.
    pub async fn eth_price(&self) -> Result<LatestPrice, Error> {
        self.call("stats", "ethprice", Query::new()).await
    }

    /// Total supply of an ERC-20 token, in its smallest unit.
    pub async fn token_supply(&self, contract_address: &str) -> Result<BigInt, Error> {
        let params = TokenTotalSupplyParams {
            contract_address: contract_address.to_owned(),
        };
        self.call("stats", "tokensupply", params.to_query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_supply_params_render() {
        assert!(TokenTotalSupplyParams::default().to_query().is_empty());
        assert_eq!(
            TokenTotalSupplyParams {
                contract_address: "0x57d90b64a1a57749b0f932f1a3395792e12e7055".to_owned()
            }
            .to_query(),
            vec![(
                "contractaddress",
                "0x57d90b64a1a57749b0f932f1a3395792e12e7055".to_owned()
            )]
        );
    }
}
