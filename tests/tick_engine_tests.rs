use diagram_rs::DiagramError;
use diagram_rs::core::{MAX_TICKS, build_ticks};

#[test]
fn identical_inputs_yield_identical_ticks() {
    let first = build_ticks(-3.0, 7.0, 0.25).expect("ticks");
    let second = build_ticks(-3.0, 7.0, 0.25).expect("ticks");
    assert_eq!(first.values, second.values);
    assert_eq!(first.labels, second.labels);
}

#[test]
fn tenth_interval_has_no_float_artifacts() {
    let ticks = build_ticks(0.0, 1.0, 0.1).expect("decimal ticks");
    assert_eq!(
        ticks.values,
        vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
    );
    assert_eq!(
        ticks.labels,
        vec!["0", "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9", "1"]
    );
}

#[test]
fn half_interval_strips_trailing_zeros_and_negative_zero() {
    let ticks = build_ticks(-1.0, 1.0, 0.5).expect("decimal ticks");
    assert_eq!(ticks.labels, vec!["-1", "-0.5", "0", "0.5", "1"]);
}

#[test]
fn thirds_format_as_reduced_fractions() {
    let ticks = build_ticks(0.0, 2.0, 1.0 / 3.0).expect("rational ticks");
    assert_eq!(
        ticks.labels,
        vec!["0", "1/3", "2/3", "1", "4/3", "5/3", "2"]
    );
    assert!((ticks.values[1] - 1.0 / 3.0).abs() < 1e-12);
    assert!((ticks.values[5] - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn half_pi_interval_labels_pi_multiples() {
    let ticks = build_ticks(-6.5, 6.5, std::f64::consts::PI / 2.0).expect("pi ticks");
    assert_eq!(
        ticks.labels,
        vec![
            "-2\u{3c0}",
            "-3\u{3c0}/2",
            "-\u{3c0}",
            "-\u{3c0}/2",
            "0",
            "\u{3c0}/2",
            "\u{3c0}",
            "3\u{3c0}/2",
            "2\u{3c0}"
        ]
    );
}

#[test]
fn two_pi_interval_keeps_integer_coefficients() {
    let ticks = build_ticks(0.0, 13.0, 2.0 * std::f64::consts::PI).expect("pi ticks");
    assert_eq!(ticks.labels, vec!["0", "2\u{3c0}", "4\u{3c0}"]);
}

#[test]
fn unsupported_interval_is_rejected() {
    let error = build_ticks(0.0, 10.0, 0.123_456_789_123).expect_err("must reject");
    assert!(matches!(
        error,
        DiagramError::UnsupportedTickInterval { .. }
    ));
}

#[test]
fn inverted_range_degrades_to_empty() {
    let ticks = build_ticks(5.0, -5.0, 1.0).expect("graceful empty");
    assert!(ticks.is_empty());
}

#[test]
fn non_positive_interval_degrades_to_empty() {
    assert!(build_ticks(0.0, 10.0, 0.0).expect("empty").is_empty());
    assert!(build_ticks(0.0, 10.0, -1.0).expect("empty").is_empty());
}

#[test]
fn tick_count_is_capped_for_huge_ranges() {
    let ticks = build_ticks(0.0, 1.0e9, 0.1).expect("capped ticks");
    assert_eq!(ticks.len(), MAX_TICKS);
}

#[test]
fn first_tick_snaps_up_to_the_interval_grid() {
    let ticks = build_ticks(0.3, 2.0, 0.5).expect("decimal ticks");
    assert_eq!(ticks.values, vec![0.5, 1.0, 1.5, 2.0]);
    assert_eq!(ticks.labels, vec!["0.5", "1", "1.5", "2"]);
}
