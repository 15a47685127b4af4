//! Folio - typed content registry for a personal portfolio site.

mod cli;
mod content;
mod data;
mod logger;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use content::handle::{content, init_content};
use content::{Route, SiteContent};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_content(load_content(&cli)?);
    let site = content();

    match &cli.command {
        Commands::Check => {
            if site.content_path.exists() {
                log!("content"; "loaded {}", site.content_path.display());
            } else {
                log!("content"; "no {} found, using built-in content", cli.content.display());
            }
            log!("check"; "{} nav links, {} social links, {} pages - all checks passed",
                site.navbar.len(), site.social.len(), Route::ALL.len());
            Ok(())
        }
        Commands::Dump { route } => {
            let json = match route {
                Some(route) => data::to_json(&data::page_payload(&site, *route))?,
                None => data::to_json(&data::site_payload(&site))?,
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// Load and validate content from CLI arguments.
///
/// Falls back to the built-in content when the file does not exist.
fn load_content(cli: &Cli) -> Result<SiteContent> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let path = root.join(&cli.content);

    // Dump output must stay valid JSON, so loading itself does not log;
    // the check command reports what was loaded.
    let mut content = if path.exists() {
        SiteContent::from_path(&path)?
    } else {
        SiteContent::default()
    };
    content.content_path = path;

    content.validate()?;

    Ok(content)
}
