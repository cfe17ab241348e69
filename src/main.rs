use anyhow::Context;
use clap::Parser;
use classbook::cli::{self, RunOptions};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "classbook")]
#[command(about = "Convert class-schedule and student-roster workbooks to JSON.")]
#[command(long_about = "Classbook - Excel workbooks to schedule dashboard JSON

Prompts for a file name (without extension) and a conversion mode, then
writes <name>.json next to <name>.xlsx.

MODES:
  1, class    - Class schedule: every sheet's columns A, D, H, I
                → {\"<sheet>\": [{\"Time\", \"Section\", \"Location\"}]}
  2, student  - Student roster: first sheet, id / name / 22 class columns
                → {\"<id>\": {\"name\", \"class\"}}

Answers given on the command line skip the matching prompt.

EXAMPLES:
  classbook                         # Fully interactive
  classbook schedule --mode class   # schedule.xlsx → schedule.json
  classbook students -m 2           # students.xlsx → students.json

Diagnostics go to stderr; set RUST_LOG or pass --verbose for more.")]
#[command(version)]
struct Cli {
    /// Workbook name without extension (prompted when omitted)
    name: Option<String>,

    /// Conversion mode: 1/class or 2/student (prompted when omitted)
    #[arg(short, long, env = "CLASSBOOK_MODE")]
    mode: Option<String>,

    /// Workbook file extension
    #[arg(long = "ext", default_value = "xlsx", env = "CLASSBOOK_EXT")]
    extension: String,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "classbook=debug"
    } else {
        "classbook=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    let options = RunOptions {
        name: cli.name,
        mode: cli.mode,
        extension: cli.extension,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let result = cli::run(&options, &mut input, &mut out);
    cli::report(&result, &mut out).context("Failed to write to stdout")?;

    Ok(())
}
