use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use pagecraft_editor::{to_block_coordinates, to_linear_coordinates};
use std::path::Path;

#[derive(Debug, Args)]
pub struct CursorArgs {
    #[command(subcommand)]
    pub command: CursorCommand,
}

#[derive(Debug, Subcommand)]
pub enum CursorCommand {
    /// Map a code-editor caret to a block caret
    ToBlock {
        /// Markup file
        file: String,

        #[arg(long)]
        line: usize,

        #[arg(long)]
        column: usize,
    },

    /// Map a block caret to a code-editor caret
    ToLinear {
        /// Markup file
        file: String,

        #[arg(long)]
        block: usize,

        #[arg(long)]
        offset: usize,
    },
}

pub fn cursor(args: CursorArgs, cwd: &str) -> Result<()> {
    let output = match args.command {
        CursorCommand::ToBlock { file, line, column } => {
            let markup = read_markup(cwd, &file)?;
            serde_json::to_string(&to_block_coordinates(&markup, line, column))?
        }
        CursorCommand::ToLinear {
            file,
            block,
            offset,
        } => {
            let markup = read_markup(cwd, &file)?;
            serde_json::to_string(&to_linear_coordinates(&markup, block, offset))?
        }
    };

    println!("{output}");
    Ok(())
}

fn read_markup(cwd: &str, file: &str) -> Result<String> {
    let path = Path::new(cwd).join(file);
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}
