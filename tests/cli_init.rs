mod common;

use common::*;

#[test]
fn init_demo_loads_register_once() {
    let env = TestEnv::new();

    let first = env.run(&["--json", "init", "--demo"]);
    assert!(first.is_success(), "{}", first.combined_output());
    let report = &first.event("init")["report"];
    assert_eq!(report["pinsInstalled"], true);
    assert_eq!(report["siteRegistered"], true);
    assert_eq!(report["demoLoaded"], true);
    assert!(report["templatesInstalled"].as_u64().unwrap() > 0);

    let second = env.run(&["--json", "init", "--demo"]);
    assert!(second.is_success(), "{}", second.combined_output());
    let report = &second.event("init")["report"];
    assert_eq!(report["templatesInstalled"], 0);
    assert_eq!(report["demoLoaded"], false);
}

#[test]
fn init_writes_site_under_data_dir() {
    let env = TestEnv::new();
    let result = env.run(&["init", "--name", "Tower B"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Site default ready"), "{}", result.stdout);
    assert!(env.data_path("sites/default").is_dir());
}

#[test]
fn commands_refuse_an_unprovisioned_site() {
    let env = TestEnv::new();
    let result = env.run(&["plant", "list"]);
    assert!(!result.is_success());
    assert!(
        result.stderr.contains("site 'default' is not set up"),
        "{}",
        result.stderr
    );
}

#[test]
fn site_list_works_before_init() {
    let env = TestEnv::new();
    let result = env.run(&["site", "list"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("No sites yet"), "{}", result.stdout);
}

#[test]
fn sites_keep_separate_registers() {
    let env = TestEnv::with_demo("admin", "0000");

    let added = env.run(&["site", "add", "north-yard", "--name", "North Yard"]);
    assert!(added.is_success(), "{}", added.combined_output());

    let init = env.run(&["--site", "north-yard", "init"]);
    assert!(init.is_success(), "{}", init.combined_output());
    let login = env.run(&["--site", "north-yard", "login", "admin", "--pin", "0000"]);
    assert!(login.is_success(), "{}", login.combined_output());

    let plants = env.run(&["--json", "--site", "north-yard", "plant", "list"]);
    assert!(plants.is_success(), "{}", plants.combined_output());
    assert_eq!(plants.event("plants")["plants"].as_array().unwrap().len(), 0);

    let sites = env.run(&["--json", "site", "list"]);
    let listed: Vec<_> = sites.event("sites")["sites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, vec!["default", "north-yard"]);
}

#[test]
fn reset_requires_yes_without_a_terminal() {
    let env = TestEnv::with_demo("admin", "0000");

    let refused = env.run(&["reset"]);
    assert!(!refused.is_success());
    assert!(refused.stderr.contains("without --yes"), "{}", refused.stderr);

    let reset = env.run(&["reset", "--yes"]);
    assert!(reset.is_success(), "{}", reset.combined_output());
}
