use clap::Parser;
use raymond_analysis::{run, Cli, Config};
use std::error::Error;
use std::process;

fn main() {
    // RUST_LOG=info (or debug) controls verbosity
    env_logger::init();

    let config = Config::from(Cli::parse());

    match run(&config) {
        Ok(report) => {
            println!(
                "Analysed {} of {} rows, converted data written to {}",
                report.rows_kept,
                report.rows_read,
                report.converted_csv.display()
            );
            if let Some(path) = report.filtered_csv {
                println!("Filtered rows written to {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
