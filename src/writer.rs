use crate::TOC_HEADER;
use crate::outline::extract_outline;
use crate::render::render_outline;
use crate::utils::encode_uri;
use anyhow::{Context, Result};
use log::debug;
use memmap2::MmapOptions;
use std::fs::File as StdFile;
use std::path::Path;
use std::str;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Appends folder headings and per-file heading outlines to the aggregate
/// README. The underlying file is truncated once at creation; everything
/// afterwards is append-only, in traversal order.
pub struct TocWriter<W: AsyncWriteExt + Unpin> {
    writer: BufWriter<W>,
}

impl TocWriter<tokio::fs::File> {
    pub fn new(writer: BufWriter<File>) -> Self {
        Self { writer }
    }

    /// Writes the literal header line the aggregate document starts with.
    pub async fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_all(format!("{TOC_HEADER}\n").as_bytes())
            .await
            .context("Failed to write the table-of-contents header")
    }

    /// Appends the `## [name](dir/)` heading for one visited folder.
    pub async fn write_folder_heading(&mut self, dir: &Path) -> Result<()> {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        let mut target = dir.display().to_string();
        if !target.ends_with('/') {
            target.push('/');
        }

        debug!("Folder heading: {}", dir.display());

        self.writer
            .write_all(format!("\n## [{}]({})\n\n", name, encode_uri(&target)).as_bytes())
            .await
            .with_context(|| format!("Failed to write folder heading for {}", dir.display()))
    }

    /// Extracts, renders and appends the heading outline of one markdown
    /// file. Paths whose extension is not exactly `md` are skipped silently.
    pub async fn write_file_outline(&mut self, path: &Path) -> Result<()> {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            debug!("Skipping non-markdown file: {}", path.display());
            return Ok(());
        }

        debug!("Writing outline for {}", path.display());

        // Open and map file; zero-length files cannot be mmap'd
        let file = StdFile::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        let metadata = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        let content = if metadata.len() == 0 {
            String::new()
        } else {
            let mmap = unsafe {
                MmapOptions::new()
                    .map(&file)
                    .with_context(|| format!("Failed to mmap file: {}", path.display()))?
            };

            match str::from_utf8(&mmap) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    debug!(
                        "Invalid UTF-8 in {}, falling back to read_to_string",
                        path.display()
                    );
                    std::fs::read_to_string(path)
                        .with_context(|| format!("Fallback read failed for {}", path.display()))?
                }
            }
        };

        let tokens = extract_outline(&content);
        let rendered = render_outline(&tokens, &path.display().to_string());

        self.writer
            .write_all(rendered.as_bytes())
            .await
            .with_context(|| format!("Failed to write outline for {}", path.display()))
    }

    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await.context("Failed to flush output")
    }
}
