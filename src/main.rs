//! cellscope CLI: analyze one cell of Python source and print the report.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use cellscope::analysis::modules::NoVersions;
use cellscope::{logging, Analyzer, Result};

/// Static dependency analyzer for notebook cells.
///
/// Reads one cell of Python source from FILE (or stdin) and prints the
/// analysis report as JSON.
#[derive(Parser)]
#[command(name = "cellscope", version, about)]
struct Cli {
    /// Source file to analyze; stdin when omitted.
    file: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,

    /// Skip module version resolution (no interpreter round-trips).
    #[arg(long)]
    no_versions: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = match &cli.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let analyzer = if cli.no_versions {
        Analyzer::with_version_lookup(NoVersions)
    } else {
        Analyzer::new()
    };
    let report = analyzer.analyze(&source);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
