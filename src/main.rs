//! Users service entry point.

use axum::extract::Request;
use axum::ServiceExt;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use users_service::api::{create_router, AppState};
use users_service::config::Config;
use users_service::metrics;
use users_service::utils::shutdown_signal;
use users_service::AppError;

/// Minimal HTTP service with static pages and an in-memory users collection.
#[derive(Parser, Debug)]
#[command(name = "users-service")]
#[command(about = "Serves static pages and CRUD over an in-memory users collection")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind (overrides BIND_HOST).
    #[arg(long)]
    host: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind (overrides BIND_HOST).
        #[arg(long)]
        host: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("users_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve { port, host }) => cmd_serve(port, host).await,
        None => cmd_serve(args.port, args.host).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("USERS SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Host: {}", config.bind_host);
    println!("  Port: {}", config.port);
    println!(
        "  Metrics: {}",
        config.metrics_addr.as_deref().unwrap_or("Disabled")
    );
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>, host_override: Option<String>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        AppError::Config(e)
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }
    if let Some(host) = host_override {
        config.bind_host = host;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    // Metrics exporter is optional
    if let Some(addr) = config.metrics_socket_addr() {
        metrics::install_exporter(addr)?;
    }

    let addr = config.listen_addr().map_err(AppError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await.map_err(AppError::Io)?;
    info!("Example app listening at http://localhost:{}", config.port);
    info!("Bound to {}", addr);

    let router = create_router(AppState::new());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(router))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Io)?;

    info!("Server stopped");
    Ok(())
}
