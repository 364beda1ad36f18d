//! vtop: a graphical activity monitor for the terminal.
//!
//! Run with:  `RUST_LOG=debug vtop --theme brew`
//! Logs go to `$XDG_STATE_HOME/vtop/vtop.log` so they never draw over the UI.

use anyhow::Result;
use clap::Parser;
use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;
use vtop_terminal::Options;
use vtop_theme::BUILTIN_THEMES;

#[derive(Parser, Debug)]
#[command(name = "vtop", version, about = "A graphical activity monitor for the terminal")]
struct Args {
    /// Theme to use: a built-in name or a file in the themes directory
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Path to the config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the built-in themes and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_themes {
        for (name, _) in BUILTIN_THEMES {
            println!("{name}");
        }
        return Ok(());
    }

    init_logging();
    tracing::info!("vtop v{} starting", env!("CARGO_PKG_VERSION"));

    vtop_terminal::run(Options {
        config_path: args.config.unwrap_or_else(vtop_config::default_path),
        theme:       args.theme,
    })
    .map_err(Into::into)
}

/// RUST_LOG controls verbosity (default: info).  Falls back to discarding
/// output when the log file cannot be opened.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let dir = vtop_config::state_dir();
    let file = std::fs::create_dir_all(&dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("vtop.log"))
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);
    match file {
        Ok(file) => builder.with_writer(Mutex::new(file)).init(),
        Err(_) => builder.with_writer(std::io::sink).init(),
    }
}
