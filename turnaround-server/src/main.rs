use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use turnaround_server::config::ServerConfig;
use turnaround_server::decoder::{Decoder, DecoderConfig};
use turnaround_server::ingest::read_schedule;
use turnaround_server::names::NameDirectory;
use turnaround_server::pipeline::Pipeline;
use turnaround_server::web::{AppState, ConnectionReport, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;

    let decoder_config = match &config.layout_path {
        Some(path) => {
            info!(path = %path.display(), "loading decoder layout");
            DecoderConfig::load(path)?
        }
        None => DecoderConfig::default(),
    };
    let pipeline = Pipeline::new(Decoder::new(&decoder_config));

    let names = match &config.names_path {
        Some(path) => {
            let names = NameDirectory::load(path)?;
            info!(path = %path.display(), count = names.len(), "loaded name directory");
            names
        }
        None => NameDirectory::empty(),
    };

    // One-shot mode: `turnaround-server schedule.ssim`
    if let Some(path) = std::env::args_os().nth(1) {
        return run_batch(Path::new(&path), &pipeline, &names);
    }

    let state = AppState::new(pipeline, names);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Turnaround server listening on http://{addr}");
    info!("  GET  /health       - Health check");
    info!("  POST /connections  - Connect arrivals to departures in an SSIM file");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Process one schedule file and print the report as JSON on stdout.
fn run_batch(path: &Path, pipeline: &Pipeline, names: &NameDirectory) -> Result<(), Box<dyn Error>> {
    let text = read_schedule(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let output = pipeline.run(&text);
    let report = ConnectionReport::build(&output, names);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
