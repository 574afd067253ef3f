use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Render a concrete compression-test lab report (JSON) as a paginated PDF.
#[derive(Parser)]
#[command(name = "laudo-pdf", version)]
struct Args {
    /// Report data as JSON.
    input: PathBuf,

    /// Output PDF path. Defaults to the input path with a .pdf extension.
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("pdf"));

    match laudo_pdf::convert_json_to_pdf(&args.input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
