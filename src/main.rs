mod cli;
mod codec;
mod csv_out;
mod errors;
mod model;
mod prompt;
mod shell;
mod store;
mod table;

use crate::errors::AppError;
use env_logger::Env;
use log::{error, info};
use std::io;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "warn",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> Result<(), AppError> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    if let Some(out_path) = args.export_csv.as_ref() {
        let Some(in_path) = args.file.as_ref() else {
            error!("--export-csv needs --file");
            return Err(AppError::IO("no input file for CSV export".into()));
        };
        info!("Exporting {} -> {}", in_path.display(), out_path.display());
        let records = codec::load_catalog(in_path)?;
        csv_out::write_csv(&records, out_path)?;
        return Ok(());
    }

    let mut prompter = prompt::Prompter::new(io::stdin().lock(), io::stdout());
    let store = match shell::load_interactive(&mut prompter, args.file.clone()) {
        Ok(store) => store,
        Err(e) => {
            println!("Failed to load data. Exiting program.");
            return Err(e);
        }
    };
    info!("Loaded {} records", store.len());

    let mut sh = shell::Shell::new(store, prompter);
    sh.run()?;
    info!("Session ended with {} records", sh.store().len());
    Ok(())
}
