//! ArenaKV Driver Binary
//!
//! Runs an operation script against a fresh in-memory store and prints the
//! result of every command.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use arenakv::{script, Config, Store};

/// ArenaKV script driver
#[derive(Parser, Debug)]
#[command(name = "arenakv")]
#[command(about = "In-memory record store driven by an operation script")]
#[command(version)]
struct Args {
    /// Initial arena size in bytes
    initial_arena_size: u32,

    /// Initial index capacity (must be a power of two)
    initial_index_capacity: usize,

    /// Path to the command script
    command_file: PathBuf,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,arenakv=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> arenakv::Result<()> {
    let config = Config::builder()
        .initial_arena_size(args.initial_arena_size)
        .initial_index_capacity(args.initial_index_capacity)
        .build();

    let mut store = Store::new(&config)?;

    tracing::info!(
        arena_size = args.initial_arena_size,
        index_capacity = args.initial_index_capacity,
        "ArenaKV v{}",
        arenakv::VERSION
    );

    let input = fs::read_to_string(&args.command_file)?;
    for block in script::run(&mut store, &input)? {
        println!("{block}");
    }

    Ok(())
}
