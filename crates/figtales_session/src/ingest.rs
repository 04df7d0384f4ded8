//! Turning user-supplied files into [`DesignFile`]s.

use derive_getters::Getters;
use figtales_config::UploadConfig;
use figtales_core::DesignFile;
use figtales_error::{IngestError, IngestErrorKind};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Result of one ingest: the files that passed and why the rest did not.
#[derive(Debug, Clone, Default, Getters)]
pub struct IngestReport {
    /// Files ready to add to a session
    accepted: Vec<DesignFile>,
    /// One entry per refused file
    rejected: Vec<IngestError>,
}

impl IngestReport {
    /// Take the accepted files, leaving the report with only rejections.
    pub fn take_accepted(&mut self) -> Vec<DesignFile> {
        std::mem::take(&mut self.accepted)
    }

    /// The success message shown after files are added.
    pub fn summary(&self) -> String {
        files_added_message(self.accepted.len())
    }
}

/// Message confirming that `count` files joined the session.
pub fn files_added_message(count: usize) -> String {
    format!("{count} file(s) added. Ready to generate stories from your designs.")
}

/// Read design files from disk.
///
/// A batch larger than `max_files` is refused as a whole. Otherwise each
/// file is checked for type and size on its own, and the readable ones are
/// returned in the order given.
#[instrument(skip(config), fields(count = paths.len()))]
pub async fn ingest_paths(paths: &[PathBuf], config: &UploadConfig) -> IngestReport {
    if paths.len() > config.max_files {
        warn!(limit = config.max_files, "Too many files in one upload");
        let rejected = paths
            .iter()
            .map(|path| {
                IngestError::new(IngestErrorKind::TooManyFiles {
                    name: display_name(path),
                    limit: config.max_files,
                })
            })
            .collect();
        return IngestReport {
            accepted: Vec::new(),
            rejected,
        };
    }

    let results = join_all(paths.iter().map(|path| ingest_path(path, config))).await;
    let mut report = IngestReport::default();
    for result in results {
        match result {
            Ok(file) => report.accepted.push(file),
            Err(e) => {
                debug!(error = %e, "Refused file");
                report.rejected.push(e);
            }
        }
    }
    report
}

async fn ingest_path(path: &Path, config: &UploadConfig) -> Result<DesignFile, IngestError> {
    let name = display_name(path);
    let mime_type = accepted_mime(&name, path, None, config)?;

    let unreadable = |e: std::io::Error| {
        IngestError::new(IngestErrorKind::Unreadable {
            name: name.clone(),
            reason: e.to_string(),
        })
    };

    let metadata = tokio::fs::metadata(path).await.map_err(unreadable)?;
    if metadata.len() > config.max_file_bytes {
        return Err(IngestError::new(IngestErrorKind::TooLarge {
            name,
            size: metadata.len(),
            limit: config.max_file_bytes,
        }));
    }

    let bytes = tokio::fs::read(path).await.map_err(unreadable)?;
    Ok(DesignFile::new(name, mime_type, bytes).with_source_path(path))
}

/// Build a design file from bytes already in memory.
///
/// `mime_type` overrides detection from the file name when given.
///
/// # Errors
///
/// `UnsupportedType` when the file is not an accepted image, and `TooLarge`
/// when it exceeds `max_file_bytes`.
pub fn ingest_bytes(
    name: &str,
    bytes: Vec<u8>,
    mime_type: Option<&str>,
    config: &UploadConfig,
) -> Result<DesignFile, IngestError> {
    let mime_type = accepted_mime(name, Path::new(name), mime_type, config)?;
    let size = bytes.len() as u64;
    if size > config.max_file_bytes {
        return Err(IngestError::new(IngestErrorKind::TooLarge {
            name: name.to_string(),
            size,
            limit: config.max_file_bytes,
        }));
    }
    Ok(DesignFile::new(name, mime_type, bytes))
}

fn accepted_mime(
    name: &str,
    path: &Path,
    declared: Option<&str>,
    config: &UploadConfig,
) -> Result<String, IngestError> {
    let mime_type = declared
        .map(str::to_string)
        .unwrap_or_else(|| mime_guess::from_path(path).first_or_octet_stream().to_string());

    // Pasted content often has no extension; fall back to the declared type.
    let extension_ok = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => config.accepts_extension(ext),
        None => {
            declared.is_some()
                && mime_guess::get_mime_extensions_str(&mime_type)
                    .is_some_and(|exts| exts.iter().any(|ext| config.accepts_extension(ext)))
        }
    };

    if !mime_type.starts_with("image/") || !extension_ok {
        return Err(IngestError::new(IngestErrorKind::UnsupportedType {
            name: name.to_string(),
            mime_type,
        }));
    }
    Ok(mime_type)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
