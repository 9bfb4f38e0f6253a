mod error;
mod lister;
mod resolver;
mod scanner;
mod sorter;
mod stats;
mod table_renderer;
mod types;

use clap::Parser;
use clap::builder::OsStringValueParser;
use clap::error::ErrorKind;
use env_logger::Env;
use error::ListError;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "List the files and subfolders of a folder", long_about = None)]
struct Args {
    /// Path of the folder to list
    // Raw OS string: an empty path means "." and a leading '-' is still a path
    #[arg(allow_hyphen_values = true, value_parser = OsStringValueParser::new())]
    folder: OsString,
}

// Every outcome exits 0; failures are told apart by what lands on stdout.
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    println!("{}", run(std::env::args_os()));
}

/// Everything the program prints on stdout for one command line.
fn run<I, T>(argv: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return e.to_string().trim_end().to_string();
        }
        Err(e) => {
            log::debug!("rejected arguments: {e}");
            return report(&ListError::Usage);
        }
    };

    match lister::list_dir(&PathBuf::from(args.folder)) {
        Ok(listing) => table_renderer::render_listing(&listing),
        Err(e) => report(&e),
    }
}

fn report(err: &ListError) -> String {
    log::debug!("{err:?}");
    err.to_string()
}
