// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! devserve binary entry point.

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use devserve::cli::Args;
use devserve::DevServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let config = args.into_config(&std::env::current_dir()?);
    let server = match DevServer::bind(&config).await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let addr = server.local_addr()?;
    println!(
        "Serving {} at http://{addr} (Ctrl+C to stop)",
        server.root().display()
    );
    server.run_until(ctrl_c()).await;
    println!("\nShutting down server");
    Ok(())
}

/// Resolves on Ctrl+C. If the handler cannot be installed, never resolves.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
