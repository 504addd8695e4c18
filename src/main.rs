//! CI/CD practice web service entry point.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cicd_practice::app_info::{app_info, APP_NAME, APP_VERSION};
use cicd_practice::config::Config;
use cicd_practice::metrics;
use cicd_practice::server::{self, shutdown_signal};
use cicd_practice::create_router;

/// CI/CD practice web service.
#[derive(Parser, Debug)]
#[command(name = "cicd-practice")]
#[command(about = "Small Axum web service used to exercise a CI/CD pipeline")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Interface to bind (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration; CLI flags win over the environment
    let config = Config::load()?.with_overrides(args.host.clone(), args.port);

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("cicd_practice=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("{} - CONFIGURATION CHECK", APP_NAME.to_uppercase());
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    let info = app_info();
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Application: {} v{}", info.name, info.version);
    println!("  Framework: {}", info.framework);
    println!("  Bind Address: {}", config.bind_address());
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    info!("Starting {} v{}", APP_NAME, APP_VERSION);

    let listener = server::bind(&config).await?;
    server::run(listener, create_router(), shutdown_signal()).await?;

    Ok(())
}
