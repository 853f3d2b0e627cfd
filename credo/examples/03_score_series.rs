use std::sync::Arc;

use credo::Credo;
use credo_mock::MockBackend;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client against the fixture backend.
    let backend = Arc::new(MockBackend::new());
    let credo = Credo::builder().with_backend(backend).build()?;

    // 2. The dashboard carries a derived score series: one point per
    //    fundamentals report date, with events within 30 days feeding the
    //    sentiment term.
    let dashboard = credo.issuer_dashboard(1).await?;

    println!("Synthetic score series for {}:", dashboard.issuer.name);
    println!("{:<12} {:>6} {:>14} {:>14}", "date", "score", "revenue", "debt");
    for point in &dashboard.series {
        println!(
            "{:<12} {:>6.0} {:>14.0} {:>14.0}",
            point.date.to_string(),
            point.score,
            point.revenue,
            point.total_debt,
        );
    }

    Ok(())
}
