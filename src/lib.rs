//! # mdtoc Library
//!
//! This crate walks a folder of markdown files (or takes a single file) and
//! generates a consolidated README: one heading per visited folder, plus one
//! indented bullet list per file linking to that file's own headings through
//! `#slug` in-page anchors.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mdtoc::{Config, run_mdtoc};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config {
//!         file: None,
//!         folder: PathBuf::from("./md/"),
//!         readme_path: PathBuf::from("./md/readme.md"),
//!     };
//!
//!     run_mdtoc(config).await
//! }
//! ```

pub mod cli;
pub mod error;
pub mod filewalker;
pub mod outline;
pub mod render;
pub mod utils;
pub mod writer;

pub use cli::Config;
pub use error::TocError;
pub use filewalker::{Node, collect_nodes};
pub use outline::{HeadingToken, extract_outline};
pub use render::{normalize_heading, render_outline};
pub use writer::TocWriter;

use anyhow::{Context, Result};
use log::info;
use tokio::fs::File;
use tokio::io::BufWriter;

/// First line of every aggregate output file.
pub const TOC_HEADER: &str = "# Table of contents";

/// Generates the aggregate README described by `config`.
///
/// The output file is truncated and given its header before the input path
/// is validated, so a path-type failure leaves the header-only file behind.
pub async fn run_mdtoc(config: Config) -> Result<()> {
    let file = File::create(&config.readme_path).await.with_context(|| {
        format!(
            "Failed to create output file: {}",
            config.readme_path.display()
        )
    })?;
    let mut writer = TocWriter::new(BufWriter::new(file));
    // header goes to disk before input validation; a path-type failure
    // must still leave the initialized file behind
    writer.write_header().await?;
    writer.flush().await?;

    if let Some(file_path) = &config.file {
        let metadata = std::fs::symlink_metadata(file_path)
            .with_context(|| format!("Failed to stat {}", file_path.display()))?;
        if !metadata.is_file() {
            return Err(TocError::NotAFile(file_path.clone()).into());
        }

        writer.write_file_outline(file_path).await?;
        writer.flush().await?;
        info!("Wrote: {}", config.readme_path.display());
        return Ok(());
    }

    let metadata = std::fs::symlink_metadata(&config.folder)
        .with_context(|| format!("Failed to stat {}", config.folder.display()))?;
    if !metadata.is_dir() {
        return Err(TocError::NotADirectory(config.folder.clone()).into());
    }

    for node in collect_nodes(&config.folder)? {
        match node {
            Node::Folder(dir) => writer.write_folder_heading(&dir).await?,
            Node::File(path) => writer.write_file_outline(&path).await?,
        }
    }

    writer.flush().await?;
    info!("Wrote: {}", config.readme_path.display());
    Ok(())
}
