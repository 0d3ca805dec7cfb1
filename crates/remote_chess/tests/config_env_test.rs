//! Environment layer of configuration precedence.
//!
//! Kept in its own test binary with a single test: the variable is process
//! global and would otherwise race the other `load` tests.

use remote_chess::{ClientConfig, SERVER_URL_ENV};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_environment_sits_between_file_and_command_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"server_url = \"http://from-file:5000\"\npoll_interval_ms = 500\n")
        .unwrap();

    // SAFETY: this binary runs no other test, so nothing reads the
    // environment concurrently.
    unsafe { std::env::set_var(SERVER_URL_ENV, "http://from-env:5000") };

    let env_over_file = ClientConfig::load(Some(file.path()), None).unwrap();
    let cli_over_env =
        ClientConfig::load(Some(file.path()), Some("http://from-cli:5000".to_string())).unwrap();
    let env_over_defaults = ClientConfig::load(None, None).unwrap();

    // SAFETY: as above.
    unsafe { std::env::remove_var(SERVER_URL_ENV) };

    assert_eq!(env_over_file.server_url(), "http://from-env:5000");
    assert_eq!(*env_over_file.poll_interval_ms(), 500);
    assert_eq!(cli_over_env.server_url(), "http://from-cli:5000");
    assert_eq!(env_over_defaults.server_url(), "http://from-env:5000");

    let file_only = ClientConfig::load(Some(file.path()), None).unwrap();
    assert_eq!(file_only.server_url(), "http://from-file:5000");
}
