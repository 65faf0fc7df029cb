//! Environment layering for `AppConfig::load_from`.
//!
//! Kept in its own test binary with a single test so the process environment
//! is not mutated concurrently with other config tests.

use std::env;
use std::io::Write;
use std::path::Path;

use pinrelay::config::AppConfig;

const ENV_VARS: [&str; 4] = [
    "API_JWT",
    "PINRELAY_PINATA__JWT",
    "PINRELAY_SERVER__PORT",
    "PINRELAY_CORS__ALLOWED_ORIGIN",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn environment_layers_apply_in_order() {
    clear_env();
    let no_file = Path::new("/nonexistent/pinrelay-test.toml");

    // Nothing provides a token.
    assert!(AppConfig::load_from(no_file).is_err());

    // Legacy variable fills the token; nested PINRELAY_ keys override defaults.
    env::set_var("API_JWT", "Bearer legacy");
    env::set_var("PINRELAY_SERVER__PORT", "9123");
    env::set_var("PINRELAY_CORS__ALLOWED_ORIGIN", "https://x.example");

    let config = AppConfig::load_from(no_file).expect("legacy token should be accepted");
    assert_eq!(config.pinata.jwt, "Bearer legacy");
    assert_eq!(config.server.port, 9123);
    assert_eq!(config.cors.allowed_origin, "https://x.example");

    // Prefixed token wins over the legacy variable.
    env::set_var("PINRELAY_PINATA__JWT", "Bearer new");
    let config = AppConfig::load_from(no_file).unwrap();
    assert_eq!(config.pinata.jwt, "Bearer new");

    // Environment wins over the file; the file wins over the legacy variable.
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9090

[pinata]
jwt = "Bearer from-file"
"#
    )
    .unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.server.port, 9123);
    assert_eq!(config.pinata.jwt, "Bearer new");

    env::remove_var("PINRELAY_PINATA__JWT");
    env::remove_var("PINRELAY_SERVER__PORT");
    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.pinata.jwt, "Bearer from-file");

    clear_env();
}
