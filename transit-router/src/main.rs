use std::error::Error;
use std::io::{self, BufWriter, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_router::config::ServerConfig;
use transit_router::requests::{Document, RequestError, load_catalogue, process_document};
use transit_router::routing::{RoutingSettings, TransportRouter};
use transit_router::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so batch output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        None => run_batch(),
        Some("serve") => serve(ServerConfig::from_env()?).await,
        Some(other) => {
            Err(format!("unknown command {other:?}; expected no arguments or `serve`").into())
        }
    }
}

/// Reads a request document from stdin and writes the answers to stdout.
fn run_batch() -> Result<(), Box<dyn Error>> {
    let document = Document::from_reader(io::stdin().lock())?;
    let responses = process_document(&document)?;

    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &responses)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Loads the catalogue document and serves the HTTP API.
async fn serve(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    let document = Document::from_path(&config.catalogue_path)?;
    let catalogue = load_catalogue(&document)?;
    let settings = document
        .routing_settings
        .map(RoutingSettings::from)
        .ok_or(RequestError::MissingRoutingSettings)?;
    let router = TransportRouter::new(&catalogue, settings)?;

    let app = create_router(AppState::new(catalogue, router));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "transit router listening");
    info!(
        "endpoints: GET /health, GET /buses/:name, GET /stops/:name, \
         GET /route?from=&to=, POST /stat_requests"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
