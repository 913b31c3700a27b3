//! CLI tool to run a command file through the record interpreter.
//!
//! Usage:
//!   cipher-run [commands.txt]
//!   cipher-run commands.txt -o transcript.txt --trace
//!
//! If no output file is specified, writes the transcript to stdout.

use cipher_batch::Interpreter;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Run ADD/REM/PRINT commands against an in-memory record collection.
#[derive(Parser)]
#[command(name = "cipher-run")]
struct Cli {
    /// Command file, one command per line
    #[arg(default_value = "test.txt")]
    input: String,

    /// Write the transcript to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print a per-command trace to stderr
    #[arg(long)]
    trace: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Write the transcript to `path`, creating missing parent directories, or to
/// stdout when no path is given. Stdout output always ends with a newline.
fn write_output(path: Option<&Path>, transcript: &str) -> io::Result<()> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(transcript.as_bytes())?;
        if !transcript.is_empty() && !transcript.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return stdout.flush();
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, transcript)
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let script = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading command file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Input:  {}", cli.input);
        eprintln!("Output: {}", cli.output.as_deref().unwrap_or("(stdout)"));
    }

    let mut interpreter = Interpreter::new();
    let report = if cli.trace {
        let (report, trace) = interpreter.run_script_traced(&script);
        for line in trace.render() {
            eprintln!("{line}");
        }
        report
    } else {
        interpreter.run_script(&script)
    };

    let output = report.output_text();
    let target = cli.output.as_deref().unwrap_or("stdout");
    if let Err(e) = write_output(cli.output.as_deref().map(Path::new), &output) {
        eprintln!("Error writing transcript to {target}: {e}");
        process::exit(1);
    }

    if cli.verbose {
        eprintln!(
            "Processed {} commands -> {} records",
            report.commands, report.final_count
        );
    }
}
