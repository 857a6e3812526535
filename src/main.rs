//! Command-line driver for the terminal simulator.
//!
//! ```text
//! learnsh                      interactive prompt on stdin
//! learnsh -c 'ls -a'           run one line
//! learnsh lesson.sh            run a script, echoing each prompt
//! learnsh --load fs.json --dump -c 'rm -r documents'
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use learnsh::{FileSystem, Session};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Linux terminal simulator over an in-memory filesystem.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run a single command line and exit.
    #[arg(short = 'c', value_name = "LINE", conflicts_with = "script")]
    command: Option<String>,

    /// Script with one command line per line.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Start from a JSON filesystem snapshot instead of the demo tree.
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Print the final filesystem as a JSON snapshot.
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let fs = match &cli.load {
        Some(path) => load_snapshot(path)?,
        None => FileSystem::initial(),
    };
    let mut session = Session::with_filesystem(fs);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(line) = &cli.command {
        run_line(&mut session, line, &mut out)?;
    } else if let Some(path) = &cli.script {
        run_script(&mut session, path, &mut out)?;
    } else {
        run_interactive(&mut session, io::stdin().lock(), &mut out)?;
    }

    if cli.dump {
        let json = session
            .filesystem()
            .to_json()
            .context("failed to serialize filesystem")?;
        writeln!(out, "{}", json)?;
    }

    Ok(())
}

fn load_snapshot(path: &Path) -> Result<FileSystem> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let fs = FileSystem::from_json(&json)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    info!("loaded snapshot {} at {}", path.display(), fs.current_path());
    Ok(fs)
}

/// Run one line and print its output.
fn run_line(session: &mut Session, line: &str, out: &mut impl Write) -> Result<()> {
    let result = session.submit(line);
    for text in &result.output {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

/// Run every line of a script, echoing the prompt and input first.
fn run_script(session: &mut Session, path: &Path, out: &mut impl Write) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    debug!("running {} lines from {}", script.lines().count(), path.display());

    for line in script.lines() {
        writeln!(out, "{} {}", session.prompt(), line)?;
        run_line(session, line, out)?;
    }
    Ok(())
}

/// Read-eval-print loop until end of input.
fn run_interactive(session: &mut Session, mut input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in session.transcript() {
        writeln!(out, "{}", line)?;
    }

    let mut buf = String::new();
    loop {
        write!(out, "{} ", session.prompt())?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let result = session.submit(buf.trim_end_matches(['\r', '\n']));
        if result.clear_screen {
            write!(out, "{}", CLEAR_SEQUENCE)?;
        }
        for text in &result.output {
            writeln!(out, "{}", text)?;
        }
    }
}
