//! `module=gastracker` endpoints: confirmation-time estimate and the
//! gas price oracle.

use std::time::Duration;

use crate::client::{Client, Query};
use crate::error::Error;
use crate::response::GasPrices;

/// Parameters of `gastracker`/`gasestimate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GasEstimateParams {
    /// Gas price in wei.
    pub gas_price: u64,
}

impl GasEstimateParams {
    pub fn to_query(&self) -> Query {
        vec![("gasPrice", self.gas_price.to_string())]
    }
}

impl Client {
    /// Estimated confirmation time at the given gas price (wei).
    pub async fn gas_estimate(&self, gas_price: u64) -> Result<Duration, Error> {
        let params = GasEstimateParams { gas_price };
        let seconds: String = self
            .call("gastracker", "gasestimate", params.to_query())
            .await?;
        let value: f64 = seconds
            .parse()
            .map_err(|_| Error::MalformedNumber(seconds.clone()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(Error::MalformedNumber(seconds));
        }
        Ok(Duration::from_secs_f64(value))
    }

    /// Suggested gas prices, in Gwei.
    pub async fn gas_oracle(&self) -> Result<GasPrices, Error> {
        self.call("gastracker", "gasoracle", Query::new()).await
    }
}
