use bemkit_logger::{LevelFilter, LogSettings, Logger, RotationPolicy};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_writes_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings = LogSettings {
        dir: Some(log_dir.clone()),
        json: true,
        rotation: RotationPolicy::Never,
        ..LogSettings::default()
    };

    let logger = Logger::builder()
        .name("bemkit-file")
        .console(false)
        .level(LevelFilter::INFO)
        .settings(&settings)
        .init()?;

    assert_eq!(logger.directory(), Some(log_dir.as_path()));
    tracing::info!(block = "modal", "resolved");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(log_file)?;
    let line = content.lines().find(|line| line.contains("resolved")).expect("event line");
    assert!(line.starts_with('{'), "{line}");
    assert!(line.contains("\"block\":\"modal\""), "{line}");

    Ok(())
}
