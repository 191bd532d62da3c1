use crate::error::AppError;
use crate::presentation::meta::CountryCurrencyMap;
use async_trait::async_trait;

/// Interface for the metadata service
#[async_trait]
pub trait MetaService: Send + Sync {
    /// Gets the currencies each country can send and receive
    ///
    /// # Arguments
    /// * `bank_fields` - Whether to include each country's required bank fields
    async fn country_currency_map(
        &self,
        bank_fields: bool,
    ) -> Result<Vec<CountryCurrencyMap>, AppError>;
}
