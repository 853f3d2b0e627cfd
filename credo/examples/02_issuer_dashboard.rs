use std::sync::Arc;

use credo::Credo;
use credo_mock::MockBackend;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,credo=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // 1. Create a backend and build the client.
    let backend = Arc::new(MockBackend::new());
    let credo = Credo::builder().with_backend(backend).build()?;

    // 2. Assemble the full dashboard for one issuer. Score, fundamentals,
    //    events, and news are fetched concurrently; each degrades on its
    //    own if the fetch fails.
    let dashboard = credo.issuer_dashboard(1).await?;

    println!("Issuer: {}", dashboard.issuer.name);
    match &dashboard.score {
        Some(s) => {
            println!("Score: {:.0}", s.score);
            println!("Top drivers:");
            for entry in s.shap.iter().take(3) {
                println!("  {:<16} {:+.2}", entry.feature, entry.shap_value);
            }
        }
        None => match dashboard.synthetic_score {
            Some(s) => println!("Score (synthetic fallback): {s:.0}"),
            None => println!("No score available"),
        },
    }

    println!("\nRecent events ({}):", dashboard.events.len());
    for event in dashboard.events.iter().take(5) {
        println!(
            "  {} {:<10} {}",
            event.timestamp.date_naive(),
            event.event_type,
            event.description.as_deref().unwrap_or(""),
        );
    }

    Ok(())
}
