//! Tests for the binary: usage text, exit codes, and stdout/stderr separation.

use std::ffi::OsStr;
use std::process::{Command, Output};

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const USAGE: &str = "Usage: locate-ip ...IP addresses
Examples:
    locate-ip 192.168.1.92 127.0.0.1
    traceroute example.com | awk '{print $2}' | xargs locate-ip
";

/// Runs the built binary with a clean LOCATE_IP_* environment
fn run_locate_ip<S: AsRef<OsStr>>(args: &[S], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_locate-ip"));
    cmd.args(args)
        .env_remove("LOCATE_IP_ENDPOINT")
        .env_remove("LOCATE_IP_LOG_LEVEL")
        .env_remove("LOCATE_IP_LOG_FORMAT")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to run locate-ip")
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let output = run_locate_ip::<&str>(&[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
}

#[test]
fn test_only_non_address_tokens_exit_zero_without_output() {
    // Nothing matches, so the unreachable endpoint is never contacted
    let output = run_locate_ip(
        &["*", "*", "gateway"],
        &[("LOCATE_IP_ENDPOINT", "http://127.0.0.1:1")],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_lone_double_dash_is_a_dropped_token() {
    let output = run_locate_ip(&["--"], &[("LOCATE_IP_ENDPOINT", "http://127.0.0.1:1")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_utf8_token_is_dropped_and_others_looked_up() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let args = [
            OsString::from_vec(b"\xff".to_vec()),
            OsString::from("*"),
            OsString::from("1.2.3.4"),
        ];
        run_locate_ip(&args, &[("LOCATE_IP_ENDPOINT", endpoint.as_str())])
    })
    .await
    .expect("blocking task panicked");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Hop 0 1.2.3.4 is a private IP address\n"
    );
}

#[test]
fn test_invalid_log_level_is_fatal() {
    let output = run_locate_ip(&["1.2.3.4"], &[("LOCATE_IP_LOG_LEVEL", "loud")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("LOCATE_IP_LOG_LEVEL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookups_print_hops_and_exit_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        run_locate_ip(
            &["10.0.0.1", "*", "192.168.1.1"],
            &[
                ("LOCATE_IP_ENDPOINT", endpoint.as_str()),
                ("LOCATE_IP_LOG_LEVEL", "debug"),
            ],
        )
    })
    .await
    .expect("blocking task panicked");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Hop 0 10.0.0.1 is a private IP address\nHop 1 192.168.1.1 is a private IP address\n"
    );
    // Logs stay on stderr
    assert!(!output.stderr.is_empty());
}
