//! Parses a small chat export and tallies sentiment per sender.
//!
//! Run with: RUST_LOG=desi_text=debug cargo run --example chat_export

use desi_text::{parse_log_line, Sentiment};
use indexmap::IndexMap;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXPORT: &str = "\
25/01/2025, 14:30 - Rahul: Bhai party kab hai? 😂
25/01/2025, 14:31 - Priya: I love this song
25/01/2025, 14:31 - Priya: kal milte hai
Messages to this group are now secured with end-to-end encryption
25/01/2025, 14:33 - Rahul: haha pakka :)";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "desi_text=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut tally: IndexMap<String, IndexMap<Sentiment, usize>> = IndexMap::new();
    let mut skipped = 0;

    for line in EXPORT.lines() {
        match parse_log_line(line) {
            Some(record) => {
                println!("{}", serde_json::to_string(&record)?);
                *tally
                    .entry(record.sender)
                    .or_default()
                    .entry(record.sentiment)
                    .or_default() += 1;
            }
            None => skipped += 1,
        }
    }

    for (sender, counts) in &tally {
        let summary: Vec<String> = counts.iter().map(|(s, n)| format!("{s}={n}")).collect();
        println!("{sender}: {}", summary.join(", "));
    }
    println!("skipped {skipped} non-message line(s)");

    Ok(())
}
