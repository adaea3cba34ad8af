use crate::error::TocError;
use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

/// Runtime configuration, threaded explicitly through the run instead of
/// living in a module-level global.
pub struct Config {
    /// Single markdown file to process; takes precedence over `folder`.
    pub file: Option<PathBuf>,
    /// Folder to process recursively.
    pub folder: PathBuf,
    /// Aggregate output file.
    pub readme_path: PathBuf,
}

pub fn parse_args() -> Result<Config> {
    // Bare invocation is an error; defaults only apply once any flag is given
    if std::env::args().len() < 2 {
        return Err(TocError::MissingArguments.into());
    }

    let matches = Command::new("mdtoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a consolidated table-of-contents README from markdown files")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Processes a single markdown file")
                .num_args(1),
        )
        .arg(
            Arg::new("folder")
                .short('F')
                .long("folder")
                .value_name("DIR")
                .help("Recursively processes a folder of markdown files")
                .num_args(1),
        )
        .arg(
            Arg::new("readmefile")
                .short('r')
                .long("readmefile")
                .value_name("FILE")
                .help("Sets the aggregate output file path")
                .num_args(1),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").map(PathBuf::from);

    let folder = matches
        .get_one::<String>("folder")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./md/"));

    let readme_path = matches
        .get_one::<String>("readmefile")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./md/readme.md"));

    Ok(Config {
        file,
        folder,
        readme_path,
    })
}
