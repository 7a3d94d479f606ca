//! Report types and related structures.

use serde::{Deserialize, Serialize};

use crate::converter::BinaryResult;

/// Timings and step counts of both variants at one magnitude.
///
/// Both durations are at least the floor, so chart ratios never divide by
/// zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPoint {
    /// Magnitude converted.
    pub n: i64,
    /// Iterative average per call, nanoseconds.
    #[serde(rename = "timeIterative")]
    pub time_iterative_ns: u64,
    /// Recursive average per call, nanoseconds. The floor above the
    /// recursion limit.
    #[serde(rename = "timeRecursive")]
    pub time_recursive_ns: u64,
    /// Iterative bit extractions.
    pub steps_iterative: u32,
    /// Recursive bit extractions; 0 above the recursion limit.
    pub steps_recursive: u32,
}

/// Full per-magnitude outcome: the chart point plus the correctness data
/// it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benchmark {
    /// Point for the chart.
    pub point: MeasurementPoint,
    /// Iterative conversion.
    pub iterative: BinaryResult,
    /// Recursive conversion, absent above the recursion limit.
    pub recursive: Option<BinaryResult>,
}

impl Benchmark {
    /// Whether both conversions were run and agree.
    ///
    /// `None` when the recursive variant was not run.
    pub fn consistent(&self) -> Option<bool> {
        self.recursive
            .as_ref()
            .map(|rec| rec.binary == self.iterative.binary)
    }
}

/// Single-run result for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRun {
    /// Binary digits, or the too-large sentinel.
    pub binary: String,
    /// Bit extractions; 0 when the variant was not run.
    pub steps: u32,
    /// Average per call, nanoseconds.
    #[serde(rename = "time")]
    pub time_ns: u64,
    /// Why the variant was not run, if it was not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Chart series. `sizes[i] == points[i].n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Magnitudes measured, ascending.
    pub sizes: Vec<i64>,
    /// One point per magnitude.
    pub points: Vec<MeasurementPoint>,
}

impl Chart {
    /// Append a point, keeping `sizes` aligned.
    pub fn push(&mut self, point: MeasurementPoint) {
        self.sizes.push(point.n);
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the chart has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Metadata for debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Reporting floor in nanoseconds.
    pub floor_ns: u64,
    /// Estimated clock resolution in nanoseconds.
    pub timer_resolution_ns: u64,
    /// Chart points dropped because the time budget ran out.
    pub skipped_points: usize,
    /// Wall-clock time spent building the report.
    pub runtime_secs: f64,
}

/// Complete response to one run request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Magnitude after clamping.
    pub n: i64,
    /// Present when the mode includes the iterative variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterative: Option<VariantRun>,
    /// Present when the mode includes the recursive variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<VariantRun>,
    /// Chart across the generated magnitudes.
    pub chart: Chart,
    /// Run metadata.
    pub metadata: Metadata,
}
