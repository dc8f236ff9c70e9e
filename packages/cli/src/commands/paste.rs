use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_document::PageComponent;
use pagecraft_editor::{fallback_component, to_clipboard_text, try_parse_paste};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Args)]
pub struct PasteArgs {
    /// File holding the pasted text (reads stdin when omitted)
    pub file: Option<String>,
}

pub fn paste(args: PasteArgs, cwd: &str) -> Result<()> {
    let text = match &args.file {
        Some(file) => {
            let path = Path::new(cwd).join(file);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    println!("{}", to_clipboard_text(&paste_component(&text))?);
    Ok(())
}

fn paste_component(text: &str) -> PageComponent {
    match try_parse_paste(text) {
        Ok(component) => component,
        Err(reason) => {
            eprintln!(
                "{} Inserted as plain text ({})",
                "⚠️".yellow(),
                reason
            );
            fallback_component(text)
        }
    }
}
