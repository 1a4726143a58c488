//! Focused unit tests covering plan configuration, request building and
//! report assembly.

use super::helpers::{workspace, write_custom_catalog, write_utf8};
use super::*;
use crate::plan::{PlanConfig, config_from_layers_for_test, execute_plan, load_plan_request};
use barhop_core::PlanRequest;
use rstest::rstest;

fn config(args: PlanArgs) -> PlanConfig {
    PlanConfig::try_from(args).expect("config should build")
}

fn venue_args(venues: &[&str]) -> PlanArgs {
    PlanArgs {
        venues: venues.iter().map(|name| (*name).to_owned()).collect(),
        ..PlanArgs::default()
    }
}

#[rstest]
#[case::nothing(None)]
#[case::blank_message(Some("   "))]
fn converting_plan_without_venues_errors(#[case] message: Option<&str>) {
    let args = PlanArgs {
        message: message.map(str::to_owned),
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing venues should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_VENUE);
            assert_eq!(env, ENV_PLAN_VENUES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn narration_defaults_to_summary_and_can_be_disabled() {
    assert_eq!(
        config(venue_args(&["Atomic"])).narration,
        Some(NarrationStyle::Summary)
    );

    let silent = PlanArgs {
        narration: Some(NarrationStyle::Itinerary),
        no_narration: true,
        ..venue_args(&["Atomic"])
    };
    assert_eq!(config(silent).narration, None);
}

#[rstest]
fn messages_are_trimmed() {
    let args = PlanArgs {
        message: Some("  atomic at 10pm \n".to_owned()),
        ..PlanArgs::default()
    };
    assert_eq!(config(args).message.as_deref(), Some("atomic at 10pm"));
}

#[rstest]
#[case::missing_request(ARG_REQUEST)]
#[case::missing_catalog(ARG_CATALOG)]
fn validate_sources_reports_missing_files(#[case] expected_field: &'static str) {
    let (_tmp, root) = workspace();
    let missing = root.join("absent.json");
    let mut plan = config(venue_args(&["Atomic"]));
    if expected_field == ARG_REQUEST {
        plan.request_path = Some(missing.clone());
    } else {
        plan.catalog = Some(missing.clone());
    }

    let err = plan.validate_sources().expect_err("missing file should error");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, expected_field);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let (_tmp, root) = workspace();
    let plan = PlanConfig {
        catalog: Some(root.clone()),
        ..config(venue_args(&["Atomic"]))
    };

    let err = plan.validate_sources().expect_err("directory should error");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, root);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_plan_request_decodes_json() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_utf8(
        &request_path,
        br#"{"venues": ["Atomic", "Logie's"], "weekday": "Sat", "group_size": 6}"#,
    );

    let decoded = load_plan_request(&request_path).expect("request should decode");
    assert_eq!(
        decoded,
        PlanRequest::new(["Atomic", "Logie's"], Weekday::Sat).with_group_size(6)
    );
}

#[rstest]
fn load_plan_request_rejects_invalid_json() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"{ not valid json");

    let err = load_plan_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParsePlanRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_plan_request_io_error_returns_open_error() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");

    let err = load_plan_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenInput { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn planning_the_builtin_catalog_orders_the_busiest_venue_first() {
    let args = PlanArgs {
        start_hour: Some(21.0),
        ..venue_args(&["Cricket's", "Chimy's"])
    };

    let report = execute_plan(&config(args), Weekday::Fri).expect("plan should run");
    assert!(report.success);
    assert_eq!(report.reason, None);
    assert_eq!(report.total_wait_time, 36);
    assert_eq!(report.weekday, Weekday::Fri);
    assert_eq!(report.parsed_time, "21:00");
    let first = report.itinerary.first().expect("first stop");
    assert_eq!(first.venue_name, "Chimy's");
    assert_eq!(first.arrival_time, "21:00");
    assert_eq!(first.departure_time, "22:21");
    assert_eq!(first.expected_wait, 21);
    assert_eq!(report.itinerary.len(), 2);
    assert_eq!(
        report.message.as_deref(),
        Some(
            "Here's your optimized route: Chimy's → Cricket's. Total expected wait: ~36 minutes. Have fun!"
        )
    );
    let diagnostics = report.diagnostics.expect("planner ran");
    assert_eq!(diagnostics.orderings_evaluated, 2);
}

#[rstest]
fn messages_are_parsed_against_the_catalog() {
    let args = PlanArgs {
        message: Some("chimys and crickets at 9pm, me and 3 friends".to_owned()),
        ..PlanArgs::default()
    };

    let report = execute_plan(&config(args), Weekday::Fri).expect("plan should run");
    assert!(report.success);
    assert_eq!(report.parsed_venues, ["Chimy's", "Cricket's"]);
    assert_eq!(report.group_size, 4);
    assert_eq!(report.parsed_time, "21:00");
}

#[rstest]
fn flags_override_the_message() {
    let args = PlanArgs {
        message: Some("chimys at 9pm".to_owned()),
        venues: vec!["Atomic".to_owned()],
        start_hour: Some(22.5),
        group_size: Some(6),
        event_day: true,
        weekday: Some(Weekday::Sat),
        ..PlanArgs::default()
    };

    let report = execute_plan(&config(args), Weekday::Tue).expect("plan should run");
    assert_eq!(report.parsed_venues, ["Atomic"]);
    assert_eq!(report.parsed_time, "22:30");
    assert_eq!(report.group_size, 6);
    assert!(report.is_event_day);
    assert_eq!(report.weekday, Weekday::Sat);
}

#[rstest]
fn flags_override_the_request_file() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_utf8(
        &request_path,
        br#"{"venues": ["Logie's"], "weekday": "Thu", "start_hour": 20.0}"#,
    );
    let args = PlanArgs {
        request_path: Some(request_path),
        event_day: true,
        group_size: Some(50),
        ..PlanArgs::default()
    };

    let report = execute_plan(&config(args), Weekday::Mon).expect("plan should run");
    assert_eq!(report.parsed_venues, ["Logie's"]);
    assert_eq!(report.weekday, Weekday::Thu);
    assert_eq!(report.parsed_time, "20:00");
    assert_eq!(report.group_size, 20);
    assert!(report.is_event_day);
}

#[rstest]
fn unrecognised_messages_list_the_catalog() {
    let args = PlanArgs {
        message: Some("somewhere fun please".to_owned()),
        ..PlanArgs::default()
    };

    let report = execute_plan(&config(args), Weekday::Fri).expect("report should build");
    assert!(!report.success);
    assert_eq!(report.reason.as_deref(), Some("no recognized venues"));
    assert!(report.itinerary.is_empty());
    assert_eq!(report.diagnostics, None);
    let message = report.message.expect("narrated");
    assert!(message.starts_with("I couldn't find any venue names in your request."));
    assert!(message.contains("Chimy's, Cricket's"));
}

#[rstest]
fn closed_venues_produce_a_failed_report() {
    let args = PlanArgs {
        start_hour: Some(24.25),
        weekday: Some(Weekday::Tue),
        ..venue_args(&["Miguel's", "Atomic"])
    };

    let report = execute_plan(&config(args), Weekday::Fri).expect("report should build");
    assert!(!report.success);
    assert_eq!(
        report.reason.as_deref(),
        Some("These venues are closed at that time: Miguel's")
    );
    assert_eq!(
        report.message.as_deref(),
        Some(
            "Couldn't plan that route: These venues are closed at that time: Miguel's. Try an earlier time or different venues."
        )
    );
}

#[rstest]
fn custom_catalogs_replace_the_roster() {
    let (_tmp, root) = workspace();
    let catalog_path = root.join("venues.json");
    write_custom_catalog(&catalog_path);
    let args = PlanArgs {
        message: Some("nightjar and lark at 7pm".to_owned()),
        catalog: Some(catalog_path),
        no_narration: true,
        ..PlanArgs::default()
    };

    let report = execute_plan(&config(args), Weekday::Wed).expect("plan should run");
    assert!(report.success);
    assert_eq!(report.message, None);
    let mut visited: Vec<&str> = report
        .itinerary
        .iter()
        .map(|stop| stop.venue_name.as_str())
        .collect();
    visited.sort_unstable();
    assert_eq!(visited, ["Lark", "Nightjar"]);
}

#[rstest]
fn invalid_catalog_files_are_reported() {
    let (_tmp, root) = workspace();
    let catalog_path = root.join("venues.json");
    write_utf8(&catalog_path, b"[{\"name\": \"Half\"}");
    let args = PlanArgs {
        catalog: Some(catalog_path.clone()),
        ..venue_args(&["Half"])
    };

    let err = execute_plan(&config(args), Weekday::Fri).expect_err("bad catalog should error");
    match err {
        CliError::LoadCatalog { path, .. } => assert_eq!(path, catalog_path),
        other => panic!("expected LoadCatalog, found {other:?}"),
    }
}

#[rstest]
fn reports_can_be_written_to_a_file() {
    let (_tmp, root) = workspace();
    let output = root.join("reports/friday.json");
    let args = PlanArgs {
        output: Some(output.clone()),
        weekday: Some(Weekday::Fri),
        ..venue_args(&["Atomic"])
    };
    let mut stdout = Vec::new();

    run_plan_with(args, Weekday::Fri, &mut stdout).expect("plan should run");
    assert!(stdout.is_empty());
    let written = barhop_fs::read_utf8_file(&output).expect("report written");
    let report: PlanReport = serde_json::from_str(&written).expect("report JSON");
    assert_eq!(report.parsed_venues, ["Atomic"]);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "group_size": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "group_size": 3,
            "weekday": "Mon",
            "narration": "itinerary",
        }),
        None,
    );
    composer.push_environment(json!({
        "group_size": 5,
        "event_day": true,
    }));
    composer.push_cli(json!({
        "venues": ["Atomic"],
        "group_size": 8,
    }));

    let merged = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(merged.venues, ["Atomic"]);
    assert_eq!(merged.group_size, Some(8));
    assert_eq!(merged.weekday, Some(Weekday::Mon));
    assert!(merged.event_day);
    assert_eq!(merged.narration, Some(NarrationStyle::Itinerary));
}
