//! JSON encoding of run reports.
//!
//! The shape is what the HTTP boundary returns from `/api/run`: camelCase
//! chart keys, absent single runs omitted.

use crate::error::Result;
use crate::result::RunReport;

/// Encode `report` on a single line, as served over HTTP.
pub fn to_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Encode `report` indented, for `binary-race report --json`.
pub fn to_json_pretty(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Chart, MeasurementPoint, Metadata, VariantRun};

    fn make_report() -> RunReport {
        let mut chart = Chart::default();
        chart.push(MeasurementPoint {
            n: 10,
            time_iterative_ns: 14,
            time_recursive_ns: 38,
            steps_iterative: 4,
            steps_recursive: 4,
        });
        RunReport {
            n: 10,
            iterative: Some(VariantRun {
                binary: "1010".to_string(),
                steps: 4,
                time_ns: 14,
                warning: None,
            }),
            recursive: None,
            chart,
            metadata: Metadata {
                floor_ns: 10,
                timer_resolution_ns: 20,
                skipped_points: 0,
                runtime_secs: 0.25,
            },
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.starts_with("{\"n\":10,"));
        assert!(json.contains("\"iterative\":{\"binary\":\"1010\",\"steps\":4,\"time\":14}"));
        assert!(json.contains("\"sizes\":[10]"));
        assert!(json.contains("\"timeRecursive\":38"));
        assert!(!json.contains("\"recursive\":"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        assert!(json.contains("floorNs"));
    }

    #[test]
    fn test_encode_error_converts() {
        let err: crate::Error = serde_json::from_str::<RunReport>("{").unwrap_err().into();
        assert_eq!(err.kind(), "Json");
    }

    #[test]
    fn test_round_trip() {
        let report = make_report();
        let json = to_json(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
