/// Configuration loading tests
/// Covers file, environment and API key sources of ServerConfig::load_from
use onslaught_server::config::API_KEY_ENV;
use onslaught_server::{ServerConfig, ServerError};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// Environment variables read by the loader in these tests.
const MANAGED_VARS: &[&str] = &[
    API_KEY_ENV,
    "ONSLAUGHT_SERVER__PORT",
    "ONSLAUGHT_SERVER__HOST",
    "ONSLAUGHT_BUNGIE__API_ROOT",
    "ONSLAUGHT_ACTIVITIES__MODE",
    "ONSLAUGHT_ACTIVITIES__NORMAL_HASHES",
    "ONSLAUGHT_ACTIVITIES__LEGEND_HASHES",
];

/// Process environment is shared between test threads.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the environment lock and clears the managed variables on drop.
struct ScopedEnv {
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    fn new(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_managed_vars();
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self { _lock: lock }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        clear_managed_vars();
    }
}

fn clear_managed_vars() {
    for key in MANAGED_VARS {
        std::env::remove_var(key);
    }
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Test API key, scalar overrides and hash lists come from the environment
#[test]
fn test_environment_sources() {
    let _env = ScopedEnv::new(&[
        (API_KEY_ENV, "0123456789"),
        ("ONSLAUGHT_ACTIVITIES__NORMAL_HASHES", "1,2"),
        ("ONSLAUGHT_SERVER__PORT", "9001"),
    ]);
    let file = toml_file("");

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.bungie.api_key, "0123456789");
    assert_eq!(config.activities.normal_hashes, vec![1, 2]);
    assert_eq!(config.server.port, 9001);
    assert_eq!(config.activities.legend_hashes, vec![3439345485]);
    assert!(config.validate().is_ok());
}

/// Test a single-element list still parses as a list
#[test]
fn test_single_hash_list() {
    let _env = ScopedEnv::new(&[("ONSLAUGHT_ACTIVITIES__LEGEND_HASHES", "42")]);
    let file = toml_file("");

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.activities.legend_hashes, vec![42]);
}

/// Test file values load and unset keys keep their defaults
#[test]
fn test_file_values() {
    let _env = ScopedEnv::new(&[]);
    let file = toml_file(
        r#"
[server]
port = 3000

[bungie]
api_key = "from-file"
timeout_secs = 5

[activities]
mode = 5
legend_hashes = [7, 8]
"#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.bungie.api_key, "from-file");
    assert_eq!(config.bungie.timeout_secs, 5);
    assert_eq!(config.bungie.connect_timeout_secs, 10);
    assert_eq!(config.activities.mode, 5);
    assert_eq!(config.activities.count, 250);
    assert_eq!(config.activities.normal_hashes, vec![2064836415]);
    assert_eq!(config.activities.legend_hashes, vec![7, 8]);
}

/// Test environment takes precedence over the file
#[test]
fn test_environment_overrides_file() {
    let _env = ScopedEnv::new(&[
        (API_KEY_ENV, "from-env"),
        ("ONSLAUGHT_SERVER__PORT", "4000"),
    ]);
    let file = toml_file(
        r#"
[server]
port = 3000

[bungie]
api_key = "from-file"
"#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.bungie.api_key, "from-env");
    assert_eq!(config.server.port, 4000);
}

/// Test a missing API key loads but fails validation
#[test]
fn test_missing_api_key() {
    let _env = ScopedEnv::new(&[]);
    let file = toml_file("");

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert!(config.bungie.api_key.is_empty());
    assert!(matches!(config.validate(), Err(ServerError::Config(_))));
}

/// Test an explicit path that does not exist is a configuration error
#[test]
fn test_missing_explicit_file() {
    let _env = ScopedEnv::new(&[]);

    let result = ServerConfig::load_from(Some(Path::new("/nonexistent/onslaught.toml")));

    match result {
        Err(ServerError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("expected config error, got {:?}", other),
    }
}

/// Test a malformed value is a configuration error
#[test]
fn test_invalid_port() {
    let _env = ScopedEnv::new(&[("ONSLAUGHT_SERVER__PORT", "not-a-port")]);
    let file = toml_file("");

    let result = ServerConfig::load_from(Some(file.path()));

    assert!(matches!(result, Err(ServerError::Config(_))));
}
