use veem_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple payment example");

    let client = Client::new(Config::new()).await?;

    let quote = client
        .exchange_rates()
        .create_quote(&QuoteRequest::sending(100.0, "USD", "EUR", "DE"))
        .await?;
    info!("Quote {} at rate {}", quote.id, quote.rate);

    let payee = Entity::new(
        "Grace",
        "Hopper",
        "grace@example.com",
        "DE",
        ContactType::Business,
    )
    .with_business_name("Hopper Compilers GmbH");

    let draft = DraftPayment::new(payee, Amount::new(quote.to_amount, "EUR"))
        .with_exchange_rate_quote_id(quote.id.clone())
        .with_notes("Sandbox test payment");

    let payment = client.payments().create(&draft).await?;
    info!("Payment {} created with status {}", payment.id, payment.status);

    let payment = client.payments().cancel(payment.id).await?;
    info!("Payment {} is now {}", payment.id, payment.status);

    Ok(())
}
