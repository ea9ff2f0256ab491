use anyhow::Result;
use std::path::Path;
use tezaurs_conj::client::TezaursClient;
use tezaurs_conj::config::Config;
use tezaurs_conj::fill;
use tezaurs_conj::records::VerbDocument;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tezaurs_conj=info")),
        )
        .init();

    let config = Config::default();
    let client = TezaursClient::new(&config)?;

    // A malformed input file is fatal before any output is written.
    let mut doc = VerbDocument::load(Path::new(&config.input_path))?;
    info!(records = doc.records.len(), input = %config.input_path, "loaded verb records");

    fill::fill_records(&client, &mut doc, config.pacing).await;

    doc.save(Path::new(&config.output_path))?;
    info!("Done. Wrote: {}", config.output_path);
    Ok(())
}
