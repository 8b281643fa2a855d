use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use cliselect::Menu;

#[derive(Parser)]
#[command(name = "cliselect", about = "Pick one option with the arrow keys")]
struct Args {
    /// Prompt shown above the options
    #[arg(short, long, default_value = "Select IDE")]
    prompt: String,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to a file only: stderr output would break the in-place redraw.
    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new().build();
        let log_file = File::create(path)?;
        WriteLogger::init(LevelFilter::Debug, log_config, log_file)?;
    }

    let mut menu = Menu::new(args.prompt);
    menu.add_hint("Use the arrow keys, enter to pick, esc to cancel")
        .add_item("VS Code", "vscode")
        .add_item("Vim", "vim")
        .add_item("Emacs", "emacs")
        .add_item("Helix", "helix");

    let choice = menu.try_display()?;
    log::info!("selection: {choice:?}");

    if choice.is_empty() {
        println!("No selection");
    } else {
        println!("Chosen: {choice}");
    }

    Ok(())
}
