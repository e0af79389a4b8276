//! Error Extension Tests

use std::io;

use reel_domain::error::{Error, Result};
use reel_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_maps_to_configuration() {
    let parse_error = "x".parse::<u32>().unwrap_err();
    let result: Result<u32> = Err(parse_error).config_context("invalid fps");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_lazy_context_is_internal() {
    let io_error = io::Error::other("boom");
    let result: Result<()> = Err(io_error).with_context(|| format!("step {}", 3));
    match result {
        Err(Error::Internal { message }) => assert_eq!(message, "step 3: boom"),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_network_and_db_context() {
    let net: Result<()> = Err(io::Error::other("reset")).network_context("fetch");
    assert!(matches!(net, Err(Error::Network { .. })));

    let db: Result<()> = Err(io::Error::other("locked")).db_context("insert");
    assert!(matches!(db, Err(Error::Database { .. })));
}
