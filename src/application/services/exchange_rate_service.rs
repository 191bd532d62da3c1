use crate::application::interfaces::exchange_rate::ExchangeRateService;
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::filters::QueryParams;
use crate::model::http::HttpClient;
use crate::model::requests::QuoteRequest;
use crate::model::responses::BatchQuoteResponse;
use crate::presentation::exchange_rate::Quote;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the exchange rate service
pub struct ExchangeRateServiceImpl {
    client: Arc<HttpClient>,
}

impl ExchangeRateServiceImpl {
    /// Creates a new instance of the exchange rate service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExchangeRateService for ExchangeRateServiceImpl {
    async fn create_quote(&self, request: &QuoteRequest) -> Result<Quote, AppError> {
        info!(
            "Requesting quote {} -> {}",
            request.from_currency, request.to_currency
        );
        let quote: Quote = self
            .client
            .post(
                &format!("{API_PREFIX}/exchangerates/quotes"),
                &QueryParams::new(),
                request,
            )
            .await?;
        debug!("Quote {} issued at rate {}", quote.id, quote.rate);
        Ok(quote)
    }

    async fn create_multiple_quotes(
        &self,
        requests: &[QuoteRequest],
    ) -> Result<BatchQuoteResponse, AppError> {
        info!("Requesting {} quotes", requests.len());
        let response: BatchQuoteResponse = self
            .client
            .post(
                &format!("{API_PREFIX}/exchangerates/quotes/batch"),
                &QueryParams::new(),
                requests,
            )
            .await?;
        debug!(
            "Quotes issued: {}, failed: {}",
            response.quotes.len(),
            response.failures.len()
        );
        Ok(response)
    }
}
