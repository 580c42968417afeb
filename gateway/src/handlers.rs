use crate::server::{AppState, router};
use crate::templates::Templates;
use anyhow::{Context, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use gateway_core::{
    FsContentStore, GatewayConfig, HttpDirectory, Markdown, PageAssembler, SiteLinks, derive,
};
use gateway_ob::{Patp, UrbitOb};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

/// Collect the root command's arguments into a `GatewayConfig`.
pub fn config_from_matches(args: &ArgMatches) -> anyhow::Result<GatewayConfig> {
    let listen = *args
        .get_one::<SocketAddr>("listen")
        .ok_or_else(|| anyhow!("--listen is required"))?;
    let content_dir = args
        .get_one::<String>("content-dir")
        .ok_or_else(|| anyhow!("--content-dir is required"))?;
    let directory_url = args
        .get_one::<Url>("directory-url")
        .ok_or_else(|| anyhow!("--directory-url is required"))?;
    let image_host = args
        .get_one::<String>("image-host")
        .ok_or_else(|| anyhow!("--image-host is required"))?;
    let explorer_url = args
        .get_one::<String>("explorer-url")
        .ok_or_else(|| anyhow!("--explorer-url is required"))?;
    let timeout = *args
        .get_one::<u64>("timeout")
        .ok_or_else(|| anyhow!("--timeout is required"))?;

    Ok(GatewayConfig {
        listen,
        content_dir: PathBuf::from(shellexpand::tilde(content_dir).as_ref()),
        directory_url: directory_url.clone(),
        links: SiteLinks::new(image_host, explorer_url),
        timeout: Duration::from_secs(timeout),
    })
}

/// Wire the production collaborators together.
pub fn build_state(config: &GatewayConfig) -> anyhow::Result<AppState> {
    let directory = HttpDirectory::new(&config.directory_url, config.timeout)
        .context("Failed to build directory client")?;
    let assembler = PageAssembler::new(
        Arc::new(UrbitOb),
        Arc::new(FsContentStore::new(config.content_dir.clone())),
        Arc::new(directory),
        Arc::new(Markdown::new()),
        config.links.clone(),
    );
    let templates = Templates::load().context("Failed to parse page templates")?;

    Ok(AppState {
        assembler,
        templates,
    })
}

pub async fn handle_serve(args: &ArgMatches, quiet: bool) -> anyhow::Result<()> {
    let config = config_from_matches(args)?;
    let state = Arc::new(build_state(&config)?);

    if !config.content_dir.is_dir() {
        tracing::warn!(
            "Content directory {} does not exist, every page will use defaults",
            config.content_dir.display()
        );
    }

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    if !quiet {
        println!(
            "{} Serving identifier pages on {}",
            "✓".green().bold(),
            format!("http://{}/id/~zod", config.listen).bright_white()
        );
        println!(
            "{} Directory: {}",
            "→".blue(),
            config.directory_url.as_str().bright_white()
        );
        println!(
            "{} Content: {}",
            "→".blue(),
            config.content_dir.display().to_string().bright_white()
        );
        println!();
    }
    info!("Listening on {}", config.listen);

    axum::serve(listener, router(state))
        .await
        .context("Server stopped unexpectedly")
}

/// Structural facts about an identifier, computed without the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub id: Patp,
    pub tier: &'static str,
    pub parent: Option<Patp>,
    pub galaxy: Option<Patp>,
}

pub fn resolve_offline(raw: &str) -> anyhow::Result<Resolution> {
    let id: Patp = raw
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid @p", raw))?;
    let hierarchy = derive(&UrbitOb, &id, None);

    Ok(Resolution {
        tier: hierarchy.rank.label(),
        parent: hierarchy.parent,
        galaxy: hierarchy.galaxy,
        id,
    })
}

pub fn handle_resolve(args: &ArgMatches) -> anyhow::Result<()> {
    let raw = args
        .get_one::<String>("ID")
        .ok_or_else(|| anyhow!("an identifier is required"))?;
    let resolution = resolve_offline(raw)?;

    print_divider();
    println!("  {}", resolution.id.as_str().bright_white().bold());
    print_divider();
    println!("{} ID Type: {}", "→".blue(), resolution.tier.bright_white());
    println!("{} Value:   {}", "→".blue(), resolution.id.to_hex());
    if let Some(parent) = &resolution.parent {
        println!("{} Parent:  {}", "→".blue(), parent.as_str().bright_white());
    }
    if let Some(galaxy) = &resolution.galaxy {
        println!("{} Galaxy:  {}", "→".blue(), galaxy.as_str().bright_white());
    }
    Ok(())
}
