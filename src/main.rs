//! VPAGen Worker Service Entry Point
//!
//! Loads configuration and starts the HTTP server.

use vpagen_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
