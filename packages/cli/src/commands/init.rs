use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::TEXT_MODULE;
use pagecraft_registry::Module;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft project...".bright_blue().bold());

    let config = Config::default();
    let modules_dir = config.get_modules_dir(cwd);
    if !modules_dir.exists() {
        fs::create_dir_all(&modules_dir)
            .with_context(|| format!("Failed to create {}", modules_dir.display()))?;
        println!("  {} Created {}/", "✓".green(), config.modules_dir);
    }

    // Pasted plain text renders through this module
    let text_descriptor = modules_dir.join(format!("{TEXT_MODULE}.json"));
    if !text_descriptor.exists() {
        let module = Module::new(TEXT_MODULE, "Text").with_description("Plain text");
        fs::write(&text_descriptor, serde_json::to_string_pretty(&module)?)?;
        println!("  {} Created {}/{}.json", "✓".green(), config.modules_dir, TEXT_MODULE);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Add module descriptors to {}/", config.modules_dir);
    println!("  2. Run: pagecraft render page.json");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_text_module() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(InitArgs { force: false }, &cwd).unwrap();

        assert_eq!(Config::load(&cwd).unwrap(), Config::default());
        let descriptor = fs::read_to_string(dir.path().join("modules/core.Text.json")).unwrap();
        let module: Module = serde_json::from_str(&descriptor).unwrap();
        assert_eq!(module.id, TEXT_MODULE);
        assert_eq!(module.renderer, "Text");
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config_path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&config_path, r#"{ "modulesDir": "custom" }"#).unwrap();

        init(InitArgs { force: false }, &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().modules_dir, "custom");

        init(InitArgs { force: true }, &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().modules_dir, "modules");
    }
}
