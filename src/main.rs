//! Quill - A small terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! quill
//! quill src/main.c
//! quill --quit-times 1 --no-highlight notes.txt
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quill::app::{App, DEFAULT_QUIT_TIMES};
use quill::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use quill::perf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
struct Cli {
    /// File to edit; starts with an empty buffer when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Disable syntax highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Extra Ctrl-Q presses needed to quit with unsaved changes
    #[arg(long, value_name = "N")]
    quit_times: Option<u8>,

    /// Write log output to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log timing of document loads and redraws (needs --log-file)
    #[arg(long)]
    perf: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(flags: &ConfigFlags) -> Result<()> {
    let mut filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    if flags.perf {
        filter = filter.add_directive("quill::perf=debug".parse()?);
    }
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    // The terminal belongs to the editor; logs go to a file or nowhere.
    match &flags.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(&effective)?;
    perf::set_enabled(effective.perf);
    tracing::debug!(?effective, "starting");

    let mut app = App::new(cli.file)
        .with_quit_times(effective.quit_times.unwrap_or(DEFAULT_QUIT_TIMES))
        .with_highlight(!effective.no_highlight);

    app.run().context("Application error")
}
