mod common;

use common::*;

#[test]
fn plant_add_allocates_next_id() {
    let env = TestEnv::with_demo("site_manager", "1111");

    let result = env.run(&[
        "--json",
        "plant",
        "add",
        "--name",
        "Dumper DM-03",
        "--location",
        "North Haul Road",
        "--type",
        "Dumper",
        "--form-type",
        "ga2-dmp",
    ]);
    assert!(result.is_success(), "{}", result.combined_output());
    let plant = result.event("plant_added");
    assert_eq!(plant["id"], "PLT-007");
    assert_eq!(plant["formType"], "GA2-DMP");
    assert_eq!(plant["type"], "Dumper");

    let list = env.run(&["plant", "list"]);
    assert!(list.is_success(), "{}", list.combined_output());
    assert!(list.stdout.contains("Dumper DM-03"), "{}", list.stdout);
}

#[test]
fn out_of_service_round_trip() {
    let env = TestEnv::with_demo("site_manager", "1111");

    let oos = env.run(&["--json", "plant", "oos", "PLT-004", "--reason", "Hydraulic leak"]);
    assert!(oos.is_success(), "{}", oos.combined_output());
    let plant = oos.event("plant_out_of_service");
    assert_eq!(plant["outOfService"]["reason"], "Hydraulic leak");
    assert_eq!(plant["outOfService"]["setBy"], "Site Manager");

    let dashboard = env.run(&["--json", "dashboard"]);
    assert_eq!(dashboard.event("dashboard")["outOfService"], 1);

    let back = env.run(&["--json", "plant", "return", "PLT-004"]);
    assert!(back.is_success(), "{}", back.combined_output());
    assert!(back.event("plant_returned")["outOfService"].is_null());
}

#[test]
fn unknown_plant_is_reported() {
    let env = TestEnv::with_demo("site_manager", "1111");
    let result = env.run(&["plant", "show", "PLT-404"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("plant not found: PLT-404"), "{}", result.stderr);
}

#[test]
fn ga1_set_updates_due_date() {
    let env = TestEnv::with_demo("site_manager", "1111");

    let set = env.run(&[
        "--json",
        "ga1",
        "set",
        "PLT-003",
        "--next-due",
        "2026-11-01",
        "--inspector",
        "R. Osei",
    ]);
    assert!(set.is_success(), "{}", set.combined_output());

    let report = env.run(&["--json", "compliance"]).event("compliance");
    let crane_issues: Vec<_> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["kind"] == "static_inspection_due" && i["subjectId"] == "PLT-003")
        .collect();
    assert!(crane_issues.is_empty(), "{:?}", crane_issues);
}

#[test]
fn lifting_add_defaults_to_quarter_colour() {
    let env = TestEnv::with_demo("site_manager", "1111");

    let result = env.run(&[
        "--json",
        "lifting",
        "add",
        "--category",
        "Shackle",
        "--description",
        "D Shackle 2T",
        "--swl",
        "2000",
    ]);
    assert!(result.is_success(), "{}", result.combined_output());
    let item = result.event("lifting_added");
    assert_eq!(item["id"], "LFT-007");
    assert_eq!(item["colourCode"], "yellow");
    assert_eq!(item["swlUnit"], "kg");
}

#[test]
fn retired_gear_is_not_flagged() {
    let env = TestEnv::with_demo("site_manager", "1111");

    let retired = env.run(&["lifting", "update", "LFT-003", "--status", "retired"]);
    assert!(retired.is_success(), "{}", retired.combined_output());

    let colour = env.run(&["--json", "colour"]).event("colour");
    assert_eq!(colour["mismatched"], serde_json::json!([]));
}

#[test]
fn forms_for_plant_lists_applicable_checklists() {
    let env = TestEnv::with_demo("operator", "3333");
    let result = env.run(&["--json", "forms", "--plant", "PLT-003"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let ids: Vec<_> = result.event("forms")["forms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["GA2-CRANE", "GA3", "GA4", "GL1"]);
}
