pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

use taskorder::Task;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// The household-chores catalogue used throughout the tests.
pub fn chores() -> Vec<Task> {
    builders::CatalogueBuilder::new()
        .task("get out of bed", &[])
        .task("earn money", &["get out of bed"])
        .task("go to hardware store", &["earn money"])
        .task("buy supplies", &["go to hardware store"])
        .task("go to gas station", &["earn money"])
        .task("buy gas", &["go to gas station"])
        .task("mow lawn", &["buy gas"])
        .task("build fence", &["buy supplies", "mow lawn"])
        .build()
}

/// Turn string literals into an owned request.
pub fn request(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
