use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use taskorder::cli::CliArgs;
use taskorder::config::{default_catalogue_path, load_and_validate};
use taskorder::errors::TaskorderError;
use taskorder::types::CyclePolicy;
use taskorder::{order_for_args, write_order};
use taskorder_test_utils::builders::CatalogueBuilder;
use taskorder_test_utils::request;

type TestResult = Result<(), Box<dyn Error>>;

fn demo(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn args_have_sensible_defaults() -> TestResult {
    let args = CliArgs::try_parse_from(["taskorder", "earn money"])?;

    assert_eq!(args.catalogue, default_catalogue_path());
    assert_eq!(args.catalogue, PathBuf::from("Taskorder.toml"));
    assert_eq!(args.tasks, request(&["earn money"]));
    assert!(args.cycle_policy.is_none());
    assert!(!args.all && !args.check && !args.json);
    Ok(())
}

#[test]
fn positional_tasks_resolve_against_catalogue() -> TestResult {
    let path = demo("chores.toml");
    let args = CliArgs::try_parse_from([
        "taskorder",
        "--catalogue",
        path.as_str(),
        "go to hardware store",
        "earn money",
    ])?;
    let cfg = load_and_validate(&args.catalogue)?;

    let order = order_for_args(&cfg, &args)?;
    assert_eq!(
        order,
        request(&["get out of bed", "earn money", "go to hardware store"])
    );
    Ok(())
}

#[test]
fn all_flag_requests_every_task_after_explicit_ones() -> TestResult {
    let cfg = CatalogueBuilder::new()
        .task("z", &[])
        .task("y", &["z"])
        .task("x", &[])
        .build_file();
    let args = CliArgs::try_parse_from(["taskorder", "--all", "x"])?;

    let order = order_for_args(&cfg, &args)?;
    assert_eq!(order, request(&["x", "z", "y"]));
    Ok(())
}

#[test]
fn cli_cycle_policy_overrides_file() -> TestResult {
    let cfg = CatalogueBuilder::new()
        .task("a", &["b"])
        .task("b", &["a"])
        .cycle_policy(CyclePolicy::Fail)
        .build_file();

    let strict = CliArgs::try_parse_from(["taskorder", "a"])?;
    assert!(matches!(
        order_for_args(&cfg, &strict)
            .unwrap_err()
            .downcast_ref::<TaskorderError>(),
        Some(TaskorderError::CycleDetected { .. })
    ));

    let lenient = CliArgs::try_parse_from(["taskorder", "--cycle-policy", "break", "a"])?;
    assert_eq!(order_for_args(&cfg, &lenient)?, request(&["b", "a"]));
    Ok(())
}

#[test]
fn check_flag_rejects_cycles_even_when_unrequested() -> TestResult {
    let cfg = CatalogueBuilder::new()
        .task("ok", &[])
        .task("a", &["b"])
        .task("b", &["a"])
        .cycle_policy(CyclePolicy::Break)
        .build_file();

    let plain = CliArgs::try_parse_from(["taskorder", "ok"])?;
    assert_eq!(order_for_args(&cfg, &plain)?, request(&["ok"]));

    let checked = CliArgs::try_parse_from(["taskorder", "--check", "ok"])?;
    assert!(order_for_args(&cfg, &checked).is_err());
    Ok(())
}

#[test]
fn unknown_cycle_policy_is_rejected_by_clap() {
    assert!(CliArgs::try_parse_from(["taskorder", "--cycle-policy", "repair"]).is_err());
}

#[test]
fn order_is_written_as_lines_or_json() -> TestResult {
    let order = request(&["get out of bed", "earn money"]);

    let mut plain = Vec::new();
    write_order(&mut plain, &order, false)?;
    assert_eq!(String::from_utf8(plain)?, "get out of bed\nearn money\n");

    let mut json = Vec::new();
    write_order(&mut json, &order, true)?;
    assert_eq!(
        String::from_utf8(json)?,
        "[\"get out of bed\",\"earn money\"]\n"
    );

    let mut empty = Vec::new();
    write_order(&mut empty, &[], false)?;
    assert!(empty.is_empty());
    Ok(())
}
