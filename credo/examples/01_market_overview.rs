use std::sync::Arc;

use credo::Credo;
use credo_mock::MockBackend;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create a backend. Swap in `credo_api::ApiBackend::builder().build()?`
    //    to target a live scoring service (honors CREDO_API_URL).
    let backend = Arc::new(MockBackend::new());

    // 2. Build the Credo client and register the backend.
    let credo = Credo::builder().with_backend(backend).build()?;

    // 3. Fetch the landing-page view: issuer directory plus headlines.
    //    Either half degrades to empty if its fetch fails.
    let overview = credo.overview().await?;

    println!("Issuers ({}):", overview.issuers.len());
    for issuer in &overview.issuers {
        println!(
            "  [{}] {} ({})",
            issuer.id,
            issuer.name,
            issuer.ticker.as_deref().unwrap_or("-"),
        );
    }

    println!("\nHeadlines ({}):", overview.news.len());
    for article in overview.news.iter().take(5) {
        println!("  - {}", article.title);
    }

    Ok(())
}
