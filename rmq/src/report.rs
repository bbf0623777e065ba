use crate::trials::{CorrectnessReport, PerformanceReport};
use file_io::create_file_buf_write;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

#[derive(Debug, Serialize)]
pub struct Report {
    pub seed: u64,
    pub size: usize,
    pub max_value: i64,
    pub correctness: CorrectnessReport,
    pub performance: Option<PerformanceReport>,
}

impl Report {
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let mut file = create_file_buf_write(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        file.flush()?;
        Ok(())
    }
}

const BANNER_RULE: &str = "=================================================";

pub fn print_banner<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    writeln!(writer, "{BANNER_RULE}")?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "{BANNER_RULE}")
}

pub fn print_array<W: Write>(writer: &mut W, values: &[i64]) -> io::Result<()> {
    let values: Vec<_> = values.iter().map(i64::to_string).collect();
    writeln!(writer, "array: [{}]", values.join(", "))
}

pub fn print_correctness<W: WriteColor>(
    writer: &mut W,
    report: &CorrectnessReport,
) -> io::Result<()> {
    writeln!(writer, "\n=== correctness ===")?;
    writeln!(writer, "ran {} random queries", report.trials)?;
    for mismatch in &report.mismatches {
        writeln!(
            writer,
            "mismatch [{},{}]: tree={}, brute force={}",
            mismatch.l, mismatch.r, mismatch.tree, mismatch.brute_force
        )?;
    }
    let color = if report.all_passed() {
        Color::Green
    } else {
        Color::Red
    };
    writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(
        writer,
        "passed {}/{}, failed {}",
        report.passed,
        report.trials,
        report.failed()
    )?;
    writer.reset()?;
    writeln!(writer)
}

pub fn print_performance<W: Write>(
    writer: &mut W,
    report: &PerformanceReport,
) -> io::Result<()> {
    writeln!(writer, "\n=== performance ===")?;
    writeln!(writer, "array size n = {}", report.size)?;
    writeln!(writer, "queries m = {}\n", report.queries)?;
    writeln!(writer, "segment tree: {:.6} s", report.tree_secs)?;
    writeln!(writer, "brute force:  {:.6} s", report.brute_force_secs)?;
    match report.speedup() {
        Some(speedup) => writeln!(writer, "speedup:      {:.2}x", speedup),
        None => writeln!(writer, "speedup:      n/a"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trials::Mismatch;
    use tempfile::tempdir;
    use termcolor::NoColor;

    #[test]
    fn closing_banner_frames_the_finished_line() {
        let mut output = vec![];
        print_banner(&mut output, "program finished").unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, vec![BANNER_RULE, "program finished", BANNER_RULE]);
    }

    #[test]
    fn prints_the_array_inline() {
        let mut output = vec![];
        print_array(&mut output, &[3, 1, 4]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "array: [3, 1, 4]\n");
    }

    #[test]
    fn prints_mismatches_and_counts() {
        let report = CorrectnessReport {
            trials: 3,
            passed: 2,
            mismatches: vec![Mismatch {
                l: 0,
                r: 1,
                tree: 4,
                brute_force: 5,
            }],
        };
        let mut output = NoColor::new(vec![]);
        print_correctness(&mut output, &report).unwrap();
        let output = String::from_utf8(output.into_inner()).unwrap();
        assert!(output.contains("mismatch [0,1]: tree=4, brute force=5"));
        assert!(output.contains("passed 2/3, failed 1"));
    }

    fn performance_output(tree_secs: f64, brute_force_secs: f64) -> String {
        let report = PerformanceReport {
            size: 100,
            queries: 10,
            tree_secs,
            brute_force_secs,
        };
        let mut output = vec![];
        print_performance(&mut output, &report).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prints_speedup() {
        let output = performance_output(0.5, 2.0);
        assert!(output.contains("speedup:      4.00x"));
    }

    #[test]
    fn zero_tree_time_has_no_speedup() {
        let output = performance_output(0.0, 0.0);
        assert!(output.contains("speedup:      n/a"));
        assert!(!output.contains("NaN") && !output.contains("inf"));
    }

    #[test]
    fn exports_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("report.json");
        let report = Report {
            seed: 7,
            size: 3,
            max_value: 10,
            correctness: CorrectnessReport {
                trials: 1,
                passed: 1,
                mismatches: vec![],
            },
            performance: None,
        };
        report.export_json(&path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["seed"], 7);
        assert_eq!(json["correctness"]["passed"], 1);
        assert!(json["performance"].is_null());
    }
}
