//! Loading configuration files from disk.

use std::io::Write;

use slash_command_server::config::{load_config, ConfigError, ValidationError};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_valid_file() {
    let file = write_config(
        r#"
        [listener]
        bind_address = "127.0.0.1:9000"

        [timeouts]
        request_secs = 5

        [logging]
        static_prefix = "/assets"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    assert_eq!(config.timeouts.request_secs, 5);
    assert_eq!(config.logging.static_prefix, "/assets");
    assert_eq!(config.logging.icon_path, "/favicon.ico");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = write_config("[listener\nbind_address = ");
    assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
}

#[test]
fn semantic_problems_are_all_reported() {
    let file = write_config(
        r#"
        [listener]
        bind_address = "not-an-address"

        [limits]
        max_body_size = 0
        "#,
    );

    match load_config(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(&ValidationError::ZeroBodyLimit));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn validation_error_message_lists_problems() {
    let file = write_config("[timeouts]\nrequest_secs = 0\n");
    let message = load_config(file.path()).unwrap_err().to_string();
    assert!(message.starts_with("Validation failed: "));
    assert!(message.contains("request_secs"));
}
