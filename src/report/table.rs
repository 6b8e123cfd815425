/*!
 * Table Rendering
 * Fixed-width text layout of a report
 */

use super::Report;
use std::fmt::Write;

const MISSING: &str = "-";

pub(super) fn render(report: &Report, with_timeline: bool) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "{:<5} {:<12} {:<5} {:<5} {:<12} {:<8} {}",
        "PID", "Name", "CPU", "IO", "Turnaround", "Waiting", "Status"
    );

    for row in &report.rows {
        let waiting = row
            .waiting
            .map(|w| w.to_string())
            .unwrap_or_else(|| MISSING.to_string());
        let status = match row.killed_at_tick {
            Some(tick) => format!("killed@{}", tick),
            None => "done".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<5} {:<12} {:<5} {:<5} {:<12} {:<8} {}",
            row.pid, row.name, row.cpu_burst, row.io_duration, row.turnaround, waiting, status
        );
    }

    let summary = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Completed: {}  Killed: {}  Makespan: {}  CPU utilization: {:.1}%",
        summary.completed,
        summary.killed,
        summary.makespan,
        summary.cpu_utilization * 100.0
    );
    if let (Some(turnaround), Some(waiting)) = (summary.average_turnaround, summary.average_waiting)
    {
        let _ = writeln!(
            out,
            "Average turnaround: {:.2}  Average waiting: {:.2}",
            turnaround, waiting
        );
    }

    if with_timeline {
        let cells: Vec<String> = report
            .timeline
            .iter()
            .map(|slot| match slot {
                Some(pid) => pid.to_string(),
                None => MISSING.to_string(),
            })
            .collect();
        let _ = writeln!(out, "CPU: |{}|", cells.join("|"));
    }

    out
}
