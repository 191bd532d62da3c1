use crate::error::AppError;
use crate::model::requests::QuoteRequest;
use crate::model::responses::BatchQuoteResponse;
use crate::presentation::exchange_rate::Quote;
use async_trait::async_trait;

/// Interface for the exchange rate service
#[async_trait]
pub trait ExchangeRateService: Send + Sync {
    /// Requests a single exchange rate quote
    async fn create_quote(&self, request: &QuoteRequest) -> Result<Quote, AppError>;

    /// Requests several quotes at once
    ///
    /// # Returns
    /// * The quotes that were issued and the requests that failed
    async fn create_multiple_quotes(
        &self,
        requests: &[QuoteRequest],
    ) -> Result<BatchQuoteResponse, AppError>;
}
