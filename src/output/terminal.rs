//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{MeasurementPoint, RunReport, VariantRun};

/// Format a RunReport for human-readable terminal output.
pub fn format_report(report: &RunReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("binary-race\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  n = {}\n\n", report.n));

    if let Some(run) = &report.iterative {
        output.push_str(&format_run("Iterative", run));
    }
    if let Some(run) = &report.recursive {
        output.push_str(&format_run("Recursive", run));
    }

    output.push_str(&format!(
        "  {:>9}  {:>12}  {:>12}  {:>6}  {:>7}\n",
        "n", "iter (ns)", "rec (ns)", "steps", "rec/it"
    ));
    for point in &report.chart.points {
        output.push_str(&format_point(point));
    }
    output.push('\n');

    if report.metadata.skipped_points > 0 {
        output.push_str(&format!(
            "  {}\n\n",
            format!(
                "\u{26A0} Time budget exhausted, {} point(s) not measured",
                report.metadata.skipped_points
            )
            .yellow()
            .bold()
        ));
    }

    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!(
        "Floor {} ns, timer resolution ~{} ns, {:.2}s total.\n",
        report.metadata.floor_ns, report.metadata.timer_resolution_ns, report.metadata.runtime_secs
    ));

    output
}

fn format_run(label: &str, run: &VariantRun) -> String {
    let mut line = format!(
        "  {:<10} {}  ({} steps, {} ns)\n",
        format!("{label}:").bold(),
        run.binary,
        run.steps,
        run.time_ns
    );
    if let Some(warning) = &run.warning {
        line.push_str(&format!("             {}\n", warning.yellow()));
    }
    line.push('\n');
    line
}

fn format_point(point: &MeasurementPoint) -> String {
    let ratio = point.time_recursive_ns as f64 / point.time_iterative_ns as f64;
    let ratio = if point.steps_recursive == 0 {
        "-".dimmed().to_string()
    } else if ratio > 1.0 {
        format!("{ratio:.2}x").red().to_string()
    } else {
        format!("{ratio:.2}x").green().to_string()
    };
    format!(
        "  {:>9}  {:>12}  {:>12}  {:>6}  {:>7}\n",
        point.n, point.time_iterative_ns, point.time_recursive_ns, point.steps_iterative, ratio
    )
}
