//! Tests for file ingest limits and type checks.

use figtales_config::UploadConfig;
use figtales_error::IngestErrorKind;
use figtales_session::{ingest_bytes, ingest_paths};
use std::path::PathBuf;

fn write(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[tokio::test]
async fn test_ingest_accepts_images_and_refuses_others() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = vec![
        write(&dir, "login.png", &[0x89, 0x50, 0x4E, 0x47])?,
        write(&dir, "notes.txt", b"not a design")?,
        write(&dir, "icon.svg", b"<svg/>")?,
    ];

    let report = ingest_paths(&paths, &UploadConfig::default()).await;

    let names: Vec<_> = report.accepted().iter().map(|f| f.name().clone()).collect();
    assert_eq!(names, vec!["login.png", "icon.svg"]);
    assert_eq!(report.accepted()[0].mime_type(), "image/png");
    assert_eq!(report.accepted()[1].mime_type(), "image/svg+xml");
    assert_eq!(report.accepted()[0].source_path().as_deref(), Some(paths[0].as_path()));
    assert_eq!(report.rejected().len(), 1);
    assert!(matches!(
        report.rejected()[0].kind,
        IngestErrorKind::UnsupportedType { ref name, .. } if name == "notes.txt"
    ));
    assert_eq!(
        report.summary(),
        "2 file(s) added. Ready to generate stories from your designs."
    );
    Ok(())
}

#[tokio::test]
async fn test_ingest_refuses_whole_batch_over_limit() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = UploadConfig {
        max_files: 2,
        ..UploadConfig::default()
    };
    let paths = vec![
        write(&dir, "a.png", b"a")?,
        write(&dir, "b.png", b"b")?,
        write(&dir, "c.png", b"c")?,
    ];

    let report = ingest_paths(&paths, &config).await;

    assert!(report.accepted().is_empty());
    assert_eq!(report.rejected().len(), 3);
    assert!(report
        .rejected()
        .iter()
        .all(|e| matches!(e.kind, IngestErrorKind::TooManyFiles { limit: 2, .. })));
    Ok(())
}

#[tokio::test]
async fn test_ingest_refuses_oversized_and_missing_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = UploadConfig {
        max_file_bytes: 4,
        ..UploadConfig::default()
    };
    let paths = vec![
        write(&dir, "big.png", &[0u8; 16])?,
        dir.path().join("missing.png"),
    ];

    let report = ingest_paths(&paths, &config).await;

    assert!(report.accepted().is_empty());
    assert!(matches!(
        report.rejected()[0].kind,
        IngestErrorKind::TooLarge { size: 16, limit: 4, .. }
    ));
    assert!(matches!(
        report.rejected()[1].kind,
        IngestErrorKind::Unreadable { ref name, .. } if name == "missing.png"
    ));
    Ok(())
}

#[test]
fn test_ingest_bytes_uses_declared_type() -> anyhow::Result<()> {
    let config = UploadConfig::default();

    let file = ingest_bytes("screen.jpg", vec![0xFF, 0xD8], Some("image/jpeg"), &config)?;
    assert_eq!(file.mime_type(), "image/jpeg");
    assert_eq!(file.size(), 2);

    let err = ingest_bytes("screen.png", vec![1], Some("application/pdf"), &config).unwrap_err();
    assert!(matches!(err.kind, IngestErrorKind::UnsupportedType { .. }));
    Ok(())
}

#[test]
fn test_ingest_bytes_accepts_extensionless_paste() -> anyhow::Result<()> {
    let config = UploadConfig::default();

    let file = ingest_bytes(
        "clipboard",
        vec![0x89, 0x50, 0x4E, 0x47],
        Some("image/png"),
        &config,
    )?;
    assert_eq!(file.name(), "clipboard");
    assert_eq!(file.mime_type(), "image/png");

    let err = ingest_bytes("clipboard", vec![1], None, &config).unwrap_err();
    assert!(matches!(err.kind, IngestErrorKind::UnsupportedType { .. }));

    let err = ingest_bytes("clipboard", vec![1], Some("image/tiff"), &config).unwrap_err();
    assert!(matches!(err.kind, IngestErrorKind::UnsupportedType { .. }));
    Ok(())
}
