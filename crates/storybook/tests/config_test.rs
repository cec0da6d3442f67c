use storybook::{RetryPolicy, StorybookConfig, StorybookErrorKind};

#[test]
fn test_explicit_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
            [image]
            model = "runwayml/stable-diffusion-v1-5"
            base_url = "http://localhost:8080/models"

            [retry]
            max_retries = 1
        "#,
    )?;

    let config = StorybookConfig::load_with_override(Some(&path))?;

    assert_eq!(config.image.model, "runwayml/stable-diffusion-v1-5");
    assert_eq!(config.image.base_url, "http://localhost:8080/models");
    assert_eq!(config.text.model, "distilgpt2");
    assert_eq!(config.retry.max_retries, Some(1));
    assert_eq!(config.output.document_name, "storybook.md");

    Ok(())
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let err = StorybookConfig::load_with_override(Some("/nonexistent/storybook.toml".as_ref()))
        .unwrap_err();
    assert!(matches!(err.kind(), StorybookErrorKind::Config(_)));
}

#[test]
fn test_from_file_round_trips_serialized_config() -> anyhow::Result<()> {
    let mut config = StorybookConfig::bundled()?;
    config.output.directory = "books".into();
    config.retry = RetryPolicy::none();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storybook.toml");
    std::fs::write(&path, toml::to_string(&config)?)?;

    assert_eq!(StorybookConfig::from_file(&path)?, config);

    Ok(())
}

#[test]
fn test_incomplete_file_is_parse_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[text]\nmodel = \"gpt2\"\n")?;

    let err = StorybookConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind(), StorybookErrorKind::Config(_)));

    Ok(())
}
