//! End-to-end scenarios through the public API.

use binary_race::{BinaryBench, Mode, TOO_LARGE_SENTINEL};

/// Magnitude 0 in both modes converts to "0" in one step.
#[test]
fn zero_both_modes() {
    let report = BinaryBench::quick().run(0, Mode::Both);

    assert_eq!(report.n, 0);
    for run in [report.iterative.unwrap(), report.recursive.unwrap()] {
        assert_eq!(run.binary, "0");
        assert_eq!(run.steps, 1);
        assert!(run.time_ns >= report.metadata.floor_ns);
        assert!(run.warning.is_none());
    }
}

/// Magnitude 10 converts to "1010" in four steps for both variants.
#[test]
fn ten_both_modes() {
    let bench = BinaryBench::quick();
    let report = bench.run(10, Mode::Both);

    let iterative = report.iterative.unwrap();
    let recursive = report.recursive.unwrap();
    assert_eq!(iterative.binary, "1010");
    assert_eq!(iterative.binary, recursive.binary);
    assert_eq!(iterative.steps, 4);
    assert_eq!(recursive.steps, 4);
    assert!(iterative.time_ns >= 10);
    assert!(recursive.time_ns >= 10);

    let point = bench.benchmark(10);
    assert_eq!(point.consistent(), Some(true));
}

/// Above the recursion limit the recursive single run is a sentinel.
#[test]
fn two_million_recursive() {
    let report = BinaryBench::quick().run(2_000_000, Mode::Recursive);

    assert!(report.iterative.is_none());
    let recursive = report.recursive.unwrap();
    assert_eq!(recursive.binary, TOO_LARGE_SENTINEL);
    assert_eq!(recursive.steps, 0);
    assert_eq!(recursive.time_ns, report.metadata.floor_ns);
    assert!(recursive.warning.is_some());

    // The chart still tops out at the ladder maximum.
    assert_eq!(report.chart.sizes.last(), Some(&1_000_000));
}

/// Chart for 37 is the ladder up to 100 plus 37.
#[test]
fn chart_for_thirty_seven() {
    let report = BinaryBench::quick().run(37, Mode::Chart);

    assert!(report.iterative.is_none());
    assert!(report.recursive.is_none());
    assert_eq!(report.chart.sizes, vec![1, 2, 5, 10, 20, 37, 50, 100]);

    for (size, point) in report.chart.sizes.iter().zip(&report.chart.points) {
        assert_eq!(*size, point.n);
        assert_eq!(point.steps_iterative, point.steps_recursive);
        assert!(point.time_iterative_ns >= 10);
        assert!(point.time_recursive_ns >= 10);
    }
}

/// Out-of-range magnitudes are clamped, never rejected.
#[test]
fn magnitude_clamped() {
    let bench = BinaryBench::quick();

    let report = bench.run(-50, Mode::Iterative);
    assert_eq!(report.n, 0);
    assert_eq!(report.iterative.unwrap().binary, "0");

    let report = bench.run(5_000_000_000, Mode::Iterative);
    assert_eq!(report.n, 1_000_000_000);
    assert_eq!(
        report.iterative.unwrap().binary,
        "111011100110101100101000000000"
    );
}

/// Points above the recursion limit carry floor timings and no steps.
#[test]
fn full_chart_top_point() {
    let bench = BinaryBench::quick().floor_ns(15);
    let (chart, skipped) = bench.chart(1_000_000_000);

    assert_eq!(skipped, 0);
    assert_eq!(chart.len(), 19);
    let top = chart.points.last().unwrap();
    assert_eq!(top.n, 1_000_000);
    assert_eq!(top.steps_recursive, 20);
    assert!(chart.points.iter().all(|p| p.time_recursive_ns >= 15));

    let beyond = bench.benchmark(1_000_001);
    assert_eq!(beyond.point.steps_recursive, 0);
    assert_eq!(beyond.point.time_recursive_ns, 15);
}

/// Query strings go through the same path as typed input.
#[test]
fn run_query() {
    let bench = BinaryBench::quick();

    let report = bench.run_query(" 10 ", "both").unwrap();
    assert_eq!(report.iterative.unwrap().binary, "1010");

    let report = bench.run_query("10", "sideways").unwrap();
    assert!(report.iterative.is_none());
    assert!(!report.chart.is_empty());

    let err = bench.run_query("ten", "both").unwrap_err();
    assert_eq!(err.kind(), "InvalidMagnitude");
}

/// Report serialization matches the front-end contract.
#[test]
fn result_serialization() {
    let report = BinaryBench::quick().run(10, Mode::Recursive);

    let json: serde_json::Value =
        serde_json::to_value(&report).expect("Should serialize");
    assert_eq!(json["n"], 10);
    assert_eq!(json["recursive"]["binary"], "1010");
    assert!(json.get("iterative").is_none());
    assert_eq!(json["chart"]["sizes"][0], 1);
    assert!(json["chart"]["points"][0]["timeIterative"].is_u64());
    assert!(json["chart"]["points"][0]["stepsRecursive"].is_u64());
}
