//! Live featured-product rotation.

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use techstore_commerce::catalog::Product;
use techstore_commerce::showcase::{HeroEvent, HeroRotator};
use tokio::time::{self, Instant};

use super::HeroArgs;
use crate::context::Context;
use crate::output::{badge, price_line};

/// Run the hero command.
pub async fn run(args: HeroArgs, ctx: &Context) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let timing = ctx.config.hero_timing();
    let mut hero = HeroRotator::new(&ctx.catalog, timing, &mut rng);

    let Some(first) = hero.current() else {
        ctx.output.info("Cargando productos destacados...");
        return Ok(());
    };

    let bar = ctx.output.countdown();
    show(ctx, &bar, first);

    let mut progress = time::interval(ctx.config.progress_tick());
    let mut rotation = time::interval(timing.rotation());
    // Both intervals fire immediately on the first tick.
    progress.tick().await;
    rotation.tick().await;

    let transition_end = time::sleep(Duration::ZERO);
    tokio::pin!(transition_end);
    let mut transitioning = false;

    let deadline = async {
        match args.seconds {
            Some(secs) => time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = progress.tick() => {
                hero.advance_progress(ctx.config.progress_tick());
                bar.set_position(hero.progress().round() as u64);
                bar.set_message(format!("{}s", hero.seconds_remaining()));
            }
            _ = rotation.tick() => {
                if let Some(event) = hero.rotate(&mut rng) {
                    report(ctx, &bar, &hero, event);
                    transition_end.as_mut().reset(Instant::now() + timing.transition());
                    transitioning = true;
                }
            }
            _ = &mut transition_end, if transitioning => {
                transitioning = false;
                if let Some(event) = hero.finish_transition() {
                    report(ctx, &bar, &hero, event);
                }
            }
            _ = &mut deadline => break,
            result = &mut ctrl_c => {
                result?;
                break;
            }
        }
    }

    bar.finish_and_clear();
    Ok(())
}

fn report(ctx: &Context, bar: &ProgressBar, hero: &HeroRotator, event: HeroEvent) {
    tracing::debug!(?event, "hero event");

    if ctx.output.is_json() {
        if let Ok(line) = serde_json::to_string(&event) {
            println!("{}", line);
        }
        return;
    }

    if let HeroEvent::ProductShown(_) = event {
        if let Some(product) = hero.current() {
            show(ctx, bar, product);
        }
    }
}

fn show(ctx: &Context, bar: &ProgressBar, product: &Product) {
    if ctx.output.is_json() {
        return;
    }

    let badges: Vec<String> = product.hero_badges().into_iter().map(badge).collect();
    bar.println(format!(
        "{} {}  {}  {}",
        product.image,
        product.name,
        price_line(product),
        badges.join(" ")
    ));
}
