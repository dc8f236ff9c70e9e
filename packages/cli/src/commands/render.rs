use super::read_page;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use pagecraft_evaluator::{render_page, Element, KeyGenerator};
use pagecraft_registry::{DirectoryLoader, ModuleRegistry};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page JSON file
    pub page: String,

    /// Pretty-print the element tree
    #[arg(long)]
    pub pretty: bool,
}

pub async fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let element = render_file(&Path::new(cwd).join(&args.page), config.get_modules_dir(cwd)).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&element)?
    } else {
        serde_json::to_string(&element)?
    };
    println!("{output}");
    Ok(())
}

async fn render_file(path: &Path, modules_dir: PathBuf) -> Result<Element> {
    let page = read_page(path)?;
    let registry = ModuleRegistry::new(DirectoryLoader::new(modules_dir));

    let element = render_page(&registry, &KeyGenerator::new(), &page).await?;
    info!(
        page = %path.display(),
        modules_dir = %registry.loader().root().display(),
        modules = registry.len(),
        "Page rendered"
    );
    Ok(element)
}
