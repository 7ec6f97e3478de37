//! directory-analyzer CLI entry point

use anyhow::Context;
use clap::{Parser, Subcommand};
use directory_analyzer::{
    config::Config, http, mcp::get_tool_definitions, mcp::McpServer, store::SummaryStore,
    ServiceContext,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "directory-analyzer")]
#[command(version, about = "Document access tools for LLM agents over HTTP and MCP", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database file (overrides config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start MCP server on stdio
    Mcp,

    /// Write a default config file and create the database schema
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Print the tool catalog as JSON
    Tools,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stdout belongs to the MCP transport; logs always go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Init { force } => handle_init(cli.config, cli.db, force).await,
        Commands::Tools => {
            let tools = get_tool_definitions();
            let catalog = serde_json::json!({ "tools": tools });
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        }
        Commands::Serve { host, port } => {
            let mut config = load_config(cli.config.as_deref(), cli.db)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let ctx = open_context(&config).await?;
            let addr = config.bind_addr()?;
            http::serve(ctx.clone(), addr)
                .await
                .with_context(|| format!("HTTP server on {} failed", addr))?;
            ctx.store.close().await;
            Ok(())
        }
        Commands::Mcp => {
            let config = load_config(cli.config.as_deref(), cli.db)?;
            let ctx = open_context(&config).await?;
            McpServer::new(ctx.clone())
                .run()
                .await
                .context("MCP server failed")?;
            ctx.store.close().await;
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>, db: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(path).context("Failed to load configuration")?;
    if let Some(db) = db {
        config.storage.db_file = db;
    }
    Ok(config)
}

/// Create the documents directory, open the store and ensure its schema
async fn open_context(config: &Config) -> anyhow::Result<ServiceContext> {
    std::fs::create_dir_all(&config.documents.books_dir).with_context(|| {
        format!(
            "Failed to create documents directory {}",
            config.documents.books_dir.display()
        )
    })?;

    let store = SummaryStore::open(&config.storage.db_file)
        .await
        .with_context(|| {
            format!(
                "Failed to open database {}",
                config.storage.db_file.display()
            )
        })?;

    info!(
        db = %config.storage.db_file.display(),
        books_dir = %config.documents.books_dir.display(),
        "Service ready"
    );
    Ok(ServiceContext::new(config, store))
}

async fn handle_init(path: Option<PathBuf>, db: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let config_path = path.unwrap_or_else(Config::default_config_path);

    let mut config = if config_path.exists() && !force {
        info!("Keeping existing config at {}", config_path.display());
        Config::load(&config_path)?
    } else {
        let config = Config::default();
        config.save(&config_path)?;
        config
    };

    if let Some(db) = db {
        config.storage.db_file = db;
    }

    let ctx = open_context(&config).await?;
    ctx.store.close().await;

    println!("✓ directory-analyzer initialized");
    println!("  Config: {}", config_path.display());
    println!("  Database: {}", config.storage.db_file.display());
    Ok(())
}
