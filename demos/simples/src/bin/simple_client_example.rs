use veem_client::application::client::Client;
use veem_client::application::config::Config;
use veem_client::application::interfaces::contact::ContactService;
use veem_client::model::filters::Filter;
use veem_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // Credentials come from VEEM_CLIENT_ID / VEEM_CLIENT_SECRET
    let client = Client::new(Config::new()).await?;
    info!("✓ Client created and authenticated");

    let mut page = client.contacts().list(&[Filter::page_size(10)]).await?;
    loop {
        for contact in page.items() {
            info!(
                "{:>8} {} {} <{}>",
                contact.id.unwrap_or_default(),
                contact.first_name,
                contact.last_name,
                contact.email
            );
        }
        if !page.has_next() {
            break;
        }
        page = page.next().await?;
    }

    info!("Listed {} contacts", page.total_elements());
    Ok(())
}
