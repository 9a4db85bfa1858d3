use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::{Parser, error::ErrorKind};
use languageko::run;

/// languageko runs programs written in a small scripting language with
/// Filipino keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the program source file.
    file: PathBuf,

    /// Only read this many bytes of the source file; the rest is ignored.
    #[arg(long, value_name = "BYTES")]
    max_source_bytes: Option<usize>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        },
    };

    let Ok(mut bytes) = fs::read(&args.file) else {
        println!("Error: Could not open file {}", args.file.display());
        return ExitCode::FAILURE;
    };
    if let Some(limit) = args.max_source_bytes {
        bytes.truncate(limit);
    }
    let source = String::from_utf8_lossy(&bytes);

    if let Err(e) = run(&source, io::stdin().lock(), io::stdout().lock()) {
        println!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
