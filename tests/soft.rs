//! Integration tests for soft assertions.
//!
//! - `test_collected_failures_are_reported_in_order`: failures from the
//!   catalog collected and reported with their locations
//! - `test_bridge_failures_are_collected`: equality errors built through a
//!   provider are aggregated too, with their locations
//! - `test_equality_fallback_is_located_at_the_caller`: equality errors
//!   built without a provider point at the failing assertion
//! - `test_multiple_assertions_for_one_object`: the per-object report

use shouldbe::{
    creator::StructuredErrorProvider,
    error::{AssertionFailedError, MultipleAssertionsError},
    message::collections::should_contain_only,
    prelude::*,
};

fn check_names(softly: &mut ErrorCollector, failures: &Failures, info: &AssertionInfo, names: &[&str]) {
    if names.is_empty() {
        softly.succeeded();
    } else {
        softly.collect(failures.failure(info, &should_be_empty(names)));
    }
}

#[test]
fn test_collected_failures_are_reported_in_order() {
    let configuration = Configuration::default();
    let failures = Failures::new(&configuration);
    let mut softly = ErrorCollector::with_configuration(&configuration);

    let plain = AssertionInfo::new(Description::EMPTY, &configuration);
    let described = AssertionInfo::new("names".into(), &configuration);
    check_names(&mut softly, &failures, &plain, &[""]);
    check_names(&mut softly, &failures, &described, &[]);
    assert!(softly.was_success());
    check_names(&mut softly, &failures, &described, &["Han"]);
    assert!(!softly.was_success());

    let report = softly.assert_all().unwrap_err().to_string();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[..4], ["", "Multiple Failures (2 failures)", "-- failure 1 --", "Expecting empty but was: [\"\"]"]);
    assert!(lines[4].starts_with("at ") && lines[4].contains("soft.rs:"));
    assert_eq!(lines[5..9], ["-- failure 2 --", "", "[names] ", "Expecting empty but was: [\"Han\"]"]);
    assert!(lines[9].starts_with("at "));
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_bridge_failures_are_collected() {
    let configuration = Configuration::builder()
        .error_provider(StructuredErrorProvider)
        .build()
        .unwrap();
    let failures = Failures::new(&configuration);
    let info = AssertionInfo::new(Description::EMPTY, &configuration);
    let mut softly = ErrorCollector::with_configuration(&configuration).with_heading("Jedi checks");

    let equality_line = line!() + 1;
    let equality = failures.failure_with_error_factory(&info, &should_be_equal("Luke", "Yoda"));
    assert!(equality.is::<AssertionFailedError>());
    softly.collect(equality);
    softly.collect(failures.failure(
        &info,
        &should_contain_only(
            vec!["Luke"],
            vec!["Yoda"],
            vec!["Yoda"],
            vec!["Luke"],
            ComparisonStrategy::Standard,
        ),
    ));

    let report = softly.assert_all().unwrap_err();
    let aggregate = report.downcast_ref::<MultipleFailuresError>().unwrap();
    assert_eq!(aggregate.heading(), "Jedi checks");
    assert_eq!(
        aggregate.failures()[0].message(),
        Some("\nexpected: \"Yoda\"\n but was: \"Luke\"")
    );
    let equality_location = aggregate.failures()[0].location().unwrap();
    assert!(equality_location.starts_with(&format!("{}:{equality_line}:", file!())));
    assert!(aggregate.failures()[1].location().is_some());
    assert!(aggregate.to_string().contains(&format!(
        "\n-- failure 1 --\nexpected: \"Yoda\"\n but was: \"Luke\"\nat {}:{equality_line}:",
        file!()
    )));
}

#[test]
fn test_equality_fallback_is_located_at_the_caller() {
    let configuration = Configuration::default();
    let failures = Failures::new(&configuration);
    let info = AssertionInfo::new(Description::EMPTY, &configuration);

    let line = line!() + 1;
    let error = failures.failure_with_error_factory(&info, &should_be_equal("abc", "bcd"));
    let plain = error.downcast_ref::<AssertionError>().unwrap();
    let location = plain.location().unwrap();
    assert_eq!(location.file(), file!());
    assert_eq!(location.line(), line);
}

#[test]
fn test_multiple_assertions_for_one_object() {
    let configuration = Configuration::default();
    let failures = Failures::new(&configuration);
    let info = AssertionInfo::new("isEmpty string".into(), &configuration);
    let errors = vec![
        failures.failure(&info, &should_be_empty("abc")),
        failures.failure_message("boom"),
    ];

    let error: MultipleAssertionsError = configuration.error_creator().multiple_assertions_error(
        Description::EMPTY,
        Some("abc".to_string()),
        errors,
    );
    let report = error.to_string();
    assert!(report.starts_with(
        "2 assertion errors for: abc\n\n-- error 1 --\n[isEmpty string] \nExpecting empty but was: \"abc\"\nfirst "
    ));
    assert!(report.contains("\n\n-- error 2 --\nboom\nfirst "));
    assert_eq!(report.matches(" stack trace elements:\n\tat ").count(), 2);
}
