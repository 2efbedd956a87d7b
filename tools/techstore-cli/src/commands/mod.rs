//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod hero;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products (featured only by default).
    List {
        /// Show every product instead of the featured ones.
        #[arg(short, long)]
        all: bool,

        /// Hide products that are out of stock.
        #[arg(long)]
        available: bool,
    },
    /// Show product details.
    Show {
        /// Product id, as it appears in /product/<id>.
        id: String,

        /// Write the product's QR code as SVG to this file.
        #[arg(long)]
        qr: Option<String>,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add one unit of a product (repeatable, or comma separated).
    #[arg(short, long, value_delimiter = ',')]
    pub add: Vec<u32>,

    /// Set a quantity as <id>=<qty>; zero or less removes the line.
    #[arg(short, long)]
    pub set: Vec<String>,

    /// Remove a product from the cart.
    #[arg(short, long, value_delimiter = ',')]
    pub remove: Vec<u32>,

    /// Discount code to apply.
    #[arg(long)]
    pub code: Option<String>,

    /// Print the order message link.
    #[arg(long)]
    pub link: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Do not write session events to stderr.
    #[arg(long)]
    pub no_log: bool,
}

/// Arguments for the hero command.
#[derive(Args)]
pub struct HeroArgs {
    /// Stop after this many seconds (runs until Ctrl-C otherwise).
    #[arg(short, long)]
    pub seconds: Option<u64>,

    /// Seed for product selection, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file (techstore.json with --json).
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
