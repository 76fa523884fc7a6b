//! Plain-text rendering of run reports.
//!
//! Layout per report:
//! 1. a dashed title banner
//! 2. the Gantt chart: one centred cell per interval, then the interval
//!    start times and the final stop
//! 3. the schedule table, its last row holding the averages and throughput

use std::io::{self, Write};

use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

use crate::models::{Report, Timeline};

const GANTT_CELL_WIDTH: usize = 8;
const TABLE_HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Renders a single report.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::render::render_report;
/// use cpu_schedsim::scheduler::{FirstComeFirstServe, SchedulingAlgorithm};
///
/// let report = FirstComeFirstServe.schedule(&[Process::new(1, 0, 5)]).unwrap();
/// let mut out = Vec::new();
/// render_report(&mut out, &report).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Gantt schedule"));
/// assert!(text.contains("THROUGHPUT"));
/// ```
pub fn render_report<W: Write>(w: &mut W, report: &Report) -> io::Result<()> {
    write_title(w, &report.title)?;
    write_gantt(w, &report.timeline)?;
    write_schedule(w, report)
}

/// Renders reports one after another, separated by a blank line.
pub fn render_all<W: Write>(w: &mut W, reports: &[Report]) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        render_report(w, report)?;
    }
    Ok(())
}

fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for interval in timeline {
        let pid = interval.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    let times: Vec<String> = timeline.iter().map(|i| i.start.to_string()).collect();
    write!(w, "{}", times.join("\t"))?;
    if let Some(last) = timeline.intervals().last() {
        write!(w, "\t{}", last.stop)?;
    }
    write!(w, "\n\n")
}

fn write_schedule<W: Write>(w: &mut W, report: &Report) -> io::Result<()> {
    writeln!(w, "Schedule table")?;
    writeln!(w, "{}", schedule_table(report))
}

fn schedule_table(report: &Report) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(TABLE_HEADER.iter().map(|h| h.to_uppercase()));

    for r in &report.rows {
        table.add_row(vec![
            r.id.to_string(),
            r.priority.to_string(),
            r.burst_duration.to_string(),
            r.arrival_time.to_string(),
            r.wait_time.to_string(),
            r.turnaround_time.to_string(),
            r.completion_time.to_string(),
        ]);
    }

    let agg = &report.aggregates;
    table.add_row(vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("AVERAGE\n{:.2}", agg.average_wait),
        format!("AVERAGE\n{:.2}", agg.average_turnaround),
        format!("THROUGHPUT\n{:.2}/t", agg.throughput),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{FirstComeFirstServe, RoundRobin, SchedulingAlgorithm};
    use pretty_assertions::assert_eq;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        render_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn fcfs_report() -> Report {
        FirstComeFirstServe
            .schedule(&[
                Process::new(1, 0, 5),
                Process::new(2, 2, 3),
                Process::new(3, 4, 2),
            ])
            .unwrap()
    }

    #[test]
    fn test_title_banner() {
        let mut out = Vec::new();
        write_title(&mut out, "Priority").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "----------------\n     Priority\n----------------\n"
        );
    }

    #[test]
    fn test_gantt_chart() {
        let mut out = Vec::new();
        write_gantt(&mut out, &fcfs_report().timeline).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Gantt schedule\n|   1   |   2   |   3   |\n0\t5\t8\t10\n\n"
        );
    }

    #[test]
    fn test_schedule_table() {
        let text = render(&fcfs_report());
        let table = text.split_once("Schedule table\n").unwrap().1;
        let lines: Vec<&str> = table.lines().collect();

        for expected in [
            "| ID | PRIORITY | BURST | ARRIVAL | WAIT    | TURNAROUND | EXIT       |",
            "| 1  | 0        | 5     | 0       | 0       | 5          | 5          |",
            "| 2  | 0        | 3     | 2       | 3       | 6          | 8          |",
            "| 3  | 0        | 2     | 4       | 4       | 6          | 10         |",
            "|    |          |       |         | AVERAGE | AVERAGE    | THROUGHPUT |",
            "|    |          |       |         | 2.33    | 5.67       | 0.30/t     |",
        ] {
            assert!(lines.contains(&expected), "missing {expected:?} in\n{table}");
        }
        assert!(lines.iter().all(|l| l.len() == lines[0].len()), "{table}");
        assert!(lines[0].starts_with('+') && lines[lines.len() - 1].starts_with('+'));
    }

    #[test]
    fn test_footer_is_last_row() {
        let table = schedule_table(&fcfs_report()).to_string();
        let last_row = table
            .lines()
            .filter(|l| l.starts_with('|'))
            .last()
            .unwrap();
        assert!(last_row.contains("0.30/t"), "{table}");
    }

    #[test]
    fn test_render_all_separates_reports() {
        let batch = [Process::new(1, 0, 3)];
        let reports = vec![
            FirstComeFirstServe.schedule(&batch).unwrap(),
            RoundRobin::default().schedule(&batch).unwrap(),
        ];
        let mut out = Vec::new();
        render_all(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Schedule table").count(), 2);
        assert!(text.contains("+\n\n"));
        assert!(text.contains("Round-robin"));
    }
}
