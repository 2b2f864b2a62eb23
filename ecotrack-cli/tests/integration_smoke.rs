//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn ecotrack() -> Command {
    Command::cargo_bin("ecotrack").unwrap()
}

#[test]
fn test_top_level_help_lists_roles() {
    ecotrack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("citizen"))
        .stdout(predicate::str::contains("driver"))
        .stdout(predicate::str::contains("admin"));
}

// === Server and maintenance ===

#[test]
fn test_serve_help() {
    ecotrack()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--static-dir"))
        .stdout(predicate::str::contains("Connection attempts"));
}

#[test]
fn test_init_db_help() {
    ecotrack()
        .args(["init-db", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema script"));
}

#[test]
fn test_debug_db_help() {
    ecotrack()
        .args(["debug-db", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trial request"));
}

// === Role clients ===

#[test]
fn test_citizen_pickup_help() {
    ecotrack()
        .args(["citizen", "pickup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description of the items"));
}

#[test]
fn test_citizen_pickup_requires_details() {
    ecotrack()
        .args(["citizen", "pickup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--details"));
}

#[test]
fn test_driver_route_help() {
    ecotrack()
        .args(["driver", "route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("every 5 seconds"));
}

#[test]
fn test_staff_log_help() {
    ecotrack()
        .args(["staff", "log", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight in kilograms"));
}

#[test]
fn test_staff_log_rejects_non_numeric_weight() {
    ecotrack()
        .args(["staff", "log", "--type", "Glass", "--weight", "heavy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_staff_log_short_flags_parse() {
    // Parsing succeeds, so the run gets as far as the unreachable API.
    ecotrack()
        .args(["staff", "log", "-t", "Glass", "-w", "2.5"])
        .args(["--endpoint", "http://127.0.0.1:1/api"])
        .env_remove("ECOTRACK_API_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to EcoTrack API"));
}

#[test]
fn test_staff_log_rejects_zero_weight() {
    ecotrack()
        .args(["staff", "log", "-t", "Glass", "-w", "0"])
        .args(["--endpoint", "http://127.0.0.1:1/api"])
        .env_remove("ECOTRACK_API_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid weight"))
        .stderr(predicate::str::contains("Failed to connect").not());
}

#[test]
fn test_admin_dashboard_help() {
    ecotrack()
        .args(["admin", "dashboard", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_client_reports_unreachable_api() {
    ecotrack()
        .args(["citizen", "points", "--endpoint", "http://127.0.0.1:1/api"])
        .env_remove("ECOTRACK_API_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to EcoTrack API"));
}
