//! treesh binary.
//!
//! Line-oriented shell over an in-memory namespace.
//!
//! Usage:
//!   # Interactive
//!   cargo run
//!
//!   # Run a script, one command per line
//!   cargo run -- --script session.txt --quiet
//!
//!   # Trace path resolution
//!   RUST_LOG=treesh_core=trace cargo run

mod app;
mod config;
mod models;
mod utils;

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use app::Terminal;
use config::builtins;

/// Shell over an in-memory hierarchical namespace.
#[derive(Parser, Debug)]
#[command(name = "treesh")]
#[command(version, about = "Shell over an in-memory hierarchical namespace")]
struct Args {
    /// Scrollback capacity in lines
    #[arg(long, default_value_t = config::MAX_TERMINAL_HISTORY, value_parser = clap::value_parser!(u32).range(1..))]
    history: u32,

    /// Log filter used when RUST_LOG is unset (e.g. debug, treesh_core=trace)
    #[arg(long, default_value = config::DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Run the commands in FILE, one per line, instead of reading stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Do not print the banner
    #[arg(short, long)]
    quiet: bool,
}

enum Flow {
    Continue,
    Exit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut terminal = Terminal::new(args.history as usize);
    let mut stdout = io::stdout().lock();

    if !args.quiet {
        let banner = format!(
            "{}\n{} v{} - {}\n",
            config::ASCII_BANNER.trim_end(),
            config::APP_NAME,
            config::APP_VERSION,
            config::APP_TAGLINE
        );
        terminal.notice(&banner);
        writeln!(stdout, "{}", banner)?;
    }

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            tracing::info!(script = %path.display(), "running script");
            run(&mut terminal, BufReader::new(file), &mut stdout, false)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run(&mut terminal, stdin.lock(), &mut stdout, interactive)?;
        }
    }

    let (held, capacity) = terminal.scrollback_usage();
    tracing::debug!(
        held,
        capacity,
        cwd = %terminal.namespace().pwd_path(),
        "session closed"
    );
    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter: {}", level))?,
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Read lines until EOF or `exit`, printing each result as it is recorded.
fn run<R: BufRead, W: Write>(
    terminal: &mut Terminal,
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "{}", terminal.prompt())?;
            out.flush()?;
        }
        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }
        if let Flow::Exit = handle(terminal, &line, out)? {
            break;
        }
    }
    Ok(())
}

fn handle<W: Write>(terminal: &mut Terminal, line: &str, out: &mut W) -> Result<Flow> {
    match line.trim() {
        "" => {}
        builtins::EXIT => return Ok(Flow::Exit),
        builtins::HELP => {
            terminal.notice(config::HELP_TEXT);
            write!(out, "{}", config::HELP_TEXT)?;
        }
        builtins::HISTORY => {
            for recorded in terminal.lines_newest_first() {
                writeln!(out, "{}", recorded)?;
            }
        }
        builtins::CLEAR => terminal.clear_history(),
        input => {
            let recorded = terminal.submit(input);
            tracing::trace!(seq = recorded.seq, "recorded");
            writeln!(out, "{}", recorded)?;
        }
    }
    Ok(Flow::Continue)
}
