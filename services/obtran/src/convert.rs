//! Line-oriented coordinate conversion.
//!
//! Each input line holds `x y`; anything after the second number is
//! ignored. Angular values are read and written in degrees, linear values in
//! the projection's units.

use anyhow::{anyhow, bail, Context, Result};
use proj_common::{Point, ProjResult};
use projection::batch::{forward_all, inverse_all, BatchSummary};
use projection::Projection;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{info, warn};

use crate::config::OutputFormat;

/// Direction of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Outcome for one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// 1-based line number in the input
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Point>,
    /// `None` when the point has no result
    pub output: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Read all input text from `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parse one line into a coordinate pair.
///
/// Returns `None` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Option<Result<(f64, f64)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(parse_pair(line))
}

fn parse_pair(line: &str) -> Result<(f64, f64)> {
    let mut fields = line.split_whitespace();
    let x = parse_field(fields.next(), "x")?;
    let y = parse_field(fields.next(), "y")?;
    Ok((x, y))
}

fn parse_field(field: Option<&str>, axis: &str) -> Result<f64> {
    let field = field.ok_or_else(|| anyhow!("missing {axis} value"))?;
    field
        .parse::<f64>()
        .map_err(|e| anyhow!("invalid {axis} value '{field}': {e}"))
}

/// A projection together with the direction and unit handling of a run.
pub struct Converter {
    projection: Box<dyn Projection>,
    direction: Direction,
    strict: bool,
}

impl Converter {
    pub fn new(projection: Box<dyn Projection>, direction: Direction, strict: bool) -> Self {
        Self {
            projection,
            direction,
            strict,
        }
    }

    /// Whether input values are angles.
    fn angular_input(&self) -> bool {
        match self.direction {
            Direction::Forward => true,
            Direction::Inverse => self.projection.is_geographic(),
        }
    }

    /// Whether output values are angles.
    fn angular_output(&self) -> bool {
        match self.direction {
            Direction::Forward => self.projection.is_geographic(),
            Direction::Inverse => true,
        }
    }

    /// Convert every coordinate line of `text`.
    ///
    /// Lines that fail are reported as records without output, unless the
    /// converter is strict, in which case the first failure aborts the run.
    pub fn run(&self, text: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut points = Vec::new();
        let mut slots = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            match parse_line(line) {
                None => {}
                Some(Ok((x, y))) => {
                    let point = if self.angular_input() {
                        Point::from_degrees(x, y)
                    } else {
                        Point::new(x, y)
                    };
                    slots.push(records.len());
                    points.push(point);
                    records.push(Record {
                        line: line_no,
                        input: Some(Point::new(x, y)),
                        output: None,
                        error: None,
                    });
                }
                Some(Err(e)) => {
                    if self.strict {
                        bail!("line {line_no}: {e}");
                    }
                    warn!(line = line_no, error = %e, "Skipping unreadable line");
                    records.push(Record {
                        line: line_no,
                        input: None,
                        output: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let results: Vec<ProjResult<Option<Point>>> = match self.direction {
            Direction::Forward => {
                let results = forward_all(self.projection.as_ref(), &points);
                log_summary(BatchSummary::of_forward(&results));
                results.into_iter().map(|r| r.map(Some)).collect()
            }
            Direction::Inverse => {
                let results = inverse_all(self.projection.as_ref(), &points);
                log_summary(BatchSummary::of_inverse(&results));
                results
            }
        };

        for (slot, result) in slots.into_iter().zip(results) {
            let record = &mut records[slot];
            match result {
                Ok(output) => {
                    record.output = output.map(|p| {
                        if self.angular_output() {
                            let (lon, lat) = p.to_degrees();
                            Point::new(lon, lat)
                        } else {
                            p
                        }
                    });
                }
                Err(e) => {
                    if self.strict {
                        bail!("line {}: {e}", record.line);
                    }
                    warn!(line = record.line, error = %e, "Point could not be converted");
                    record.error = Some(e.to_string());
                }
            }
        }

        Ok(records)
    }

    /// Render `record` in `format`.
    pub fn format(&self, record: &Record, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(record)?),
            OutputFormat::Text => Ok(match record.output {
                Some(p) if self.angular_output() => format!("{:.8} {:.8}", p.x, p.y),
                Some(p) => format!("{:.3} {:.3}", p.x, p.y),
                None => "* *".to_string(),
            }),
        }
    }
}

fn log_summary(summary: BatchSummary) {
    info!(
        ok = summary.ok,
        undefined = summary.undefined,
        failed = summary.failed,
        "Conversion finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::ProjectionRegistry;
    use std::io::Write;
    use test_utils::{assert_approx_eq, fixtures};

    fn converter(definition: &str, direction: Direction, strict: bool) -> Converter {
        let projection = ProjectionRegistry::with_defaults()
            .create_from_str(definition)
            .unwrap();
        Converter::new(projection, direction, strict)
    }

    #[test]
    fn test_parse_line() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("# comment").is_none());
        assert_eq!(parse_line(" 1.5 -2 ").unwrap().unwrap(), (1.5, -2.0));
        assert_eq!(parse_line("10 20 extra").unwrap().unwrap(), (10.0, 20.0));
        assert!(parse_line("10").unwrap().is_err());
        assert!(parse_line("ten 20").unwrap().is_err());
    }

    #[test]
    fn test_forward_skips_comments_and_blanks() {
        let conv = converter(fixtures::definitions::MOLL_POLE_45, Direction::Forward, false);
        let records = conv.run(fixtures::input::FORWARD_DEGREES).unwrap();

        let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 4, 5]);
        assert!(records.iter().all(|r| r.output.is_some() && r.error.is_none()));
    }

    #[test]
    fn test_forward_then_inverse_restores_degrees() {
        let definition = fixtures::definitions::MOLL_POLE_45;
        let forward = converter(definition, Direction::Forward, true);
        let records = forward.run(fixtures::input::FORWARD_DEGREES).unwrap();

        let projected: String = records
            .iter()
            .map(|r| format!("{} {}\n", r.output.unwrap().x, r.output.unwrap().y))
            .collect();
        let inverse = converter(definition, Direction::Inverse, true);
        let back = inverse.run(&projected).unwrap();

        for (original, restored) in records.iter().zip(&back) {
            let a = original.input.unwrap();
            let b = restored.output.unwrap();
            assert_approx_eq!(b.x, a.x, 1e-6);
            assert_approx_eq!(b.y, a.y, 1e-6);
        }
    }

    #[test]
    fn test_geographic_inner_writes_degrees() {
        let conv = converter(
            fixtures::definitions::ROTATED_POLE_LONGLAT,
            Direction::Forward,
            true,
        );
        let records = conv.run("10 50\n").unwrap();
        let p = records[0].output.unwrap();

        let expected = conv
            .projection
            .forward(Point::from_degrees(10.0, 50.0))
            .unwrap();
        let (lon, lat) = expected.to_degrees();
        assert_approx_eq!(p.x, lon, 1e-12);
        assert_approx_eq!(p.y, lat, 1e-12);

        let text = conv.format(&records[0], OutputFormat::Text).unwrap();
        assert_eq!(text.split(' ').count(), 2);
    }

    #[test]
    fn test_garbage_reported_unless_strict() {
        let lenient = converter(fixtures::definitions::MOLL_POLE_45, Direction::Forward, false);
        let records = lenient.run(fixtures::input::WITH_GARBAGE).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].error.is_some());
        assert_eq!(
            lenient.format(&records[1], OutputFormat::Text).unwrap(),
            "* *"
        );

        let strict = converter(fixtures::definitions::MOLL_POLE_45, Direction::Forward, true);
        let err = strict.run(fixtures::input::WITH_GARBAGE).unwrap_err();
        assert!(err.to_string().starts_with("line 2"), "{err}");
    }

    #[test]
    fn test_transform_failure_is_per_line() {
        let lenient = converter("+proj=merc +R=1", Direction::Forward, false);
        let records = lenient.run("0 90\n10 10\n").unwrap();
        assert!(records[0].output.is_none());
        assert!(records[0].error.is_some());
        assert!(records[1].output.is_some());

        let strict = converter("+proj=merc +R=1", Direction::Forward, true);
        assert!(strict.run("0 90\n10 10\n").is_err());
    }

    #[test]
    fn test_inverse_outside_projection_is_star() {
        let conv = converter(
            "+proj=ob_tran +o_proj=moll +o_lat_p=45 +R=1",
            Direction::Inverse,
            true,
        );
        let records = conv.run("0 5\n").unwrap();
        assert_eq!(records[0].output, None);
        assert_eq!(records[0].error, None);
        assert_eq!(conv.format(&records[0], OutputFormat::Text).unwrap(), "* *");
    }

    #[test]
    fn test_json_format() {
        let conv = converter("+proj=eqc +R=1", Direction::Forward, true);
        let records = conv.run("0 0\n").unwrap();
        let json = conv.format(&records[0], OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["line"], 1);
        assert_eq!(value["output"]["x"], 0.0);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_text_format_metres() {
        let conv = converter("+proj=eqc +R=1", Direction::Forward, true);
        let records = conv.run("90 0\n").unwrap();
        assert_eq!(
            conv.format(&records[0], OutputFormat::Text).unwrap(),
            "1.571 0.000"
        );
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", fixtures::input::FORWARD_DEGREES).unwrap();

        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, fixtures::input::FORWARD_DEGREES);
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("absent.txt"))).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
