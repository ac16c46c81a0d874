use argparse::{ArgumentParser, Store, StoreOption};
use std::path::PathBuf;

pub struct CliArgs {
    pub file: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            file: None,
            export_csv: None,
            log_level: "warn".into(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Radio equipment catalog manager");
        ap.refer(&mut args.file)
            .add_option(&["-f", "--file"], StoreOption, "Catalog file to load at startup");
        ap.refer(&mut args.export_csv)
            .add_option(&["--export-csv"], StoreOption, "Write the loaded catalog as CSV and exit (needs --file)");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
