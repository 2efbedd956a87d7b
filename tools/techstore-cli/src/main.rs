//! TechStore CLI - Browse the catalog and run cart sessions from the terminal.
//!
//! Commands:
//! - `techstore catalog` - List products or show one product
//! - `techstore cart` - Run a scripted cart session
//! - `techstore shop` - Run an interactive cart session
//! - `techstore hero` - Watch the featured-product rotation
//! - `techstore config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use techstore_observability::{init_tracing, LogFormat};

use commands::{CartArgs, CatalogArgs, ConfigArgs, HeroArgs, ShopArgs};

/// TechStore CLI - Storefront catalog, cart and checkout link
#[derive(Parser)]
#[command(name = "techstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// Build a cart from flags and print the checkout summary
    Cart(CartArgs),

    /// Interactive shopping session
    Shop(ShopArgs),

    /// Watch the featured-product banner rotate
    Hero(HeroArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    if let Err(e) = init_tracing(log_format, cli.verbose) {
        output.debug(&format!("tracing disabled: {}", e));
    }

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Hero(args) => commands::hero::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
