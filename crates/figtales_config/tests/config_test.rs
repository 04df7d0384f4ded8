//! Tests for configuration layering.

use figtales_config::FigtalesConfig;

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = FigtalesConfig::bundled()?;

    assert_eq!(config.completion.api_key_env, "GOOGLE_AI_API_KEY");
    assert_eq!(config.completion.top_k, 32);
    assert_eq!(config.completion.max_output_tokens, 8192);
    assert!((config.completion.temperature - 0.4).abs() < f32::EPSILON);
    assert_eq!(config.upload.max_files, 5);
    assert_eq!(config.upload.max_file_bytes, 10_485_760);
    assert!(config.upload.accepts_extension("PNG"));
    assert!(!config.upload.accepts_extension("gif"));
    assert!(config.session.state_dir.is_none());

    let settings = config.defaults.story_settings();
    assert_eq!(*settings.story_count(), 5);
    assert_eq!(*settings.criteria_count(), 3);
    assert_eq!(settings.user_type(), "user");
    Ok(())
}

#[test]
fn test_override_merges_over_defaults() -> anyhow::Result<()> {
    let config = FigtalesConfig::from_toml_str(
        r#"
[defaults]
story_count = 8
audience_type = "Teachers"

[session]
share_origin = "https://figtales.example"
"#,
    )?;

    let settings = config.defaults.story_settings();
    assert_eq!(*settings.story_count(), 8);
    assert_eq!(*settings.criteria_count(), 3);
    assert_eq!(settings.audience_type().as_deref(), Some("Teachers"));
    assert_eq!(config.session.share_origin, "https://figtales.example");
    assert_eq!(config.completion.model, "gemini-1.5-flash");
    Ok(())
}

#[test]
fn test_out_of_range_defaults_fall_back() -> anyhow::Result<()> {
    let config = FigtalesConfig::from_toml_str("[defaults]\ncriteria_count = 12\n")?;
    assert_eq!(*config.defaults.story_settings().criteria_count(), 3);
    Ok(())
}

#[test]
fn test_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "[session]\nstate_dir = \"/tmp/figtales-state\"\nshare_origin = \"http://x\"\n",
    )?;

    let config = FigtalesConfig::from_file(&path)?;
    assert_eq!(
        config.session.resolve_state_dir(),
        std::path::PathBuf::from("/tmp/figtales-state")
    );
    Ok(())
}

#[test]
fn test_unsupported_provider_is_rejected() {
    let result = FigtalesConfig::from_toml_str("[completion]\nprovider = \"openai\"\n");
    assert!(result.is_err());
}
