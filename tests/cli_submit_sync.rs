mod common;

use common::*;

#[test]
fn failed_items_raise_defects() {
    let env = TestEnv::with_demo("operator", "3333");

    let result = env.run(&[
        "--json",
        "submit",
        "--plant",
        "PLT-003",
        "--form",
        "GA2-CRANE",
        "--fail",
        "Hoist brake=slipping under load",
    ]);
    assert!(result.is_success(), "{}", result.combined_output());

    let submitted = result.event("submitted");
    let outcome = &submitted["outcome"];
    assert_eq!(outcome["submission"]["plantId"], "PLT-003");
    assert_eq!(outcome["submission"]["submittedBy"], "Operator");
    assert_eq!(outcome["defects"].as_array().unwrap().len(), 1);
    assert_eq!(outcome["notification"]["type"], "warning");
    assert_eq!(submitted["queued"], 1);

    assert!(env.run(&["login", "site_manager", "--pin", "1111"]).is_success());
    let defects = env.run(&["--json", "defect", "list", "--open"]);
    let listed = defects.event("defects")["defects"].clone();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert!(listed[0]["description"]
        .as_str()
        .unwrap()
        .contains("Hoist brake"));
}

#[test]
fn form_must_apply_to_plant() {
    let env = TestEnv::with_demo("operator", "3333");

    let result = env.run(&["submit", "--plant", "PLT-001", "--form", "GA2-CRANE"]);
    assert!(!result.is_success());
    assert!(
        result.stderr.contains("does not apply to plant PLT-001"),
        "{}",
        result.stderr
    );
}

#[test]
fn answers_file_is_accepted() {
    let env = TestEnv::with_demo("operator", "3333");
    let answers = env.write_work_file(
        "answers.json",
        r#"[
            {"item": "Fuel level", "result": "pass"},
            {"item": "Exhaust", "result": "fail", "note": "smoking"},
            {"item": "Guards", "result": "na"}
        ]"#,
    );

    let result = env.run(&[
        "--json",
        "submit",
        "--plant",
        "PLT-001",
        "--form",
        "GA2-GEN",
        "--answers",
        answers.to_str().unwrap(),
    ]);
    assert!(result.is_success(), "{}", result.combined_output());
    let outcome = &result.event("submitted")["outcome"];
    assert_eq!(outcome["submission"]["answers"].as_array().unwrap().len(), 3);
    assert_eq!(outcome["defects"].as_array().unwrap().len(), 1);
}

#[test]
fn sync_drains_queue_into_outbox() {
    let env = TestEnv::with_demo("operator", "3333");

    for form in ["GA2-COMP", "GA3"] {
        let result = env.run(&["submit", "--plant", "PLT-002", "--form", form]);
        assert!(result.is_success(), "{}", result.combined_output());
    }

    let sync = env.run(&["--json", "sync"]);
    assert!(sync.is_success(), "{}", sync.combined_output());
    let report = sync.event("sync");
    assert_eq!(report["synced"], 2);
    assert_eq!(report["failed"], 0);
    assert_eq!(report["remaining"], 0);

    let outbox = std::fs::read_dir(env.data_path("outbox/default"))
        .unwrap()
        .count();
    assert_eq!(outbox, 2);

    let again = env.run(&["--json", "sync"]);
    assert_eq!(again.event("sync")["synced"], 0);
}

#[test]
fn submissions_list_newest_first() {
    let mut env = TestEnv::with_demo("site_manager", "1111");

    assert!(env
        .run(&["submit", "--plant", "PLT-004", "--form", "GA2-TELEH"])
        .is_success());
    env.set_now("2026-05-06T15:30:00Z");
    assert!(env
        .run(&["submit", "--plant", "PLT-005", "--form", "GA2-EXC"])
        .is_success());

    let result = env.run(&["--json", "submissions"]);
    assert!(result.is_success(), "{}", result.combined_output());
    let plants: Vec<_> = result.event("submissions")["submissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["plantId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(plants, vec!["PLT-005", "PLT-004"]);
}
