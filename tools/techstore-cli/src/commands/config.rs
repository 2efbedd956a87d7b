//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, save};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => config_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("base_url", &config.store.base_url);

    ctx.output.info("[contact]");
    ctx.output.kv("phone", &config.contact.phone);
    ctx.output.kv("endpoint", &config.contact.endpoint);

    ctx.output.info("[discount]");
    ctx.output.kv("codes", &config.discount.codes.join(", "));
    ctx.output.kv("percent", &config.discount.percent.to_string());

    ctx.output.info("[hero]");
    ctx.output.kv("rotation_ms", &config.hero.rotation_ms.to_string());
    ctx.output
        .kv("transition_ms", &config.hero.transition_ms.to_string());
    ctx.output
        .kv("progress_tick_ms", &config.hero.progress_tick_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let name = if ctx.output.is_json() {
        "techstore.json"
    } else {
        "techstore.toml"
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        save(&ctx.config, &config_path)?;
        ctx.output
            .json(&serde_json::json!({ "created": config_path }));
    } else {
        fs::write(&config_path, generate_default_config(&ctx.config.store.name))?;
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}

fn config_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": path }));
        }
        Some(path) => println!("{}", path.display()),
        None if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": null }));
        }
        None => ctx
            .output
            .info("No config file found; using defaults. Run `techstore config init` to create one."),
    }
    Ok(())
}
