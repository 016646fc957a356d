//! Reader for `name,label,x,y,z` position files.
//!
//! Reads the files written by [`crate::sampler::OrbitSampler`] as well as the
//! ones produced by reference packages: no header, blank lines ignored, label
//! either an integer day index or a UTC timestamp.
use std::{fs::File, io::Read, path::Path};

use itertools::Itertools;
use nalgebra::Vector3;

use crate::{
    orbsample_errors::OrbSampleError,
    sampler::{PositionSample, SampleLabel},
    time::parse_timestamp,
};

pub fn read_positions(path: impl AsRef<Path>) -> Result<Vec<PositionSample>, OrbSampleError> {
    let file = File::open(path)?;
    parse_positions(file)
}

pub fn parse_positions<R: Read>(input: R) -> Result<Vec<PositionSample>, OrbSampleError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != 5 {
            return Err(OrbSampleError::MalformedPositionRow {
                line,
                reason: format!("expected 5 fields, found {}", record.len()),
            });
        }

        let coordinate = |idx: usize| -> Result<f64, OrbSampleError> {
            record[idx]
                .trim()
                .parse::<f64>()
                .map_err(|e| OrbSampleError::MalformedPositionRow {
                    line,
                    reason: format!("field {} ({:?}): {e}", idx + 1, &record[idx]),
                })
        };

        samples.push(PositionSample {
            name: record[0].to_string(),
            label: parse_label(&record[1], line)?,
            position: Vector3::new(coordinate(2)?, coordinate(3)?, coordinate(4)?),
        });
    }

    Ok(samples)
}

fn parse_label(field: &str, line: u64) -> Result<SampleLabel, OrbSampleError> {
    let field = field.trim();
    if let Ok(day) = field.parse::<u32>() {
        return Ok(SampleLabel::Day(day));
    }
    parse_timestamp(field)
        .map(SampleLabel::Timestamp)
        .map_err(|e| OrbSampleError::MalformedPositionRow {
            line,
            reason: format!("label {field:?}: {e}"),
        })
}

/// True when labels strictly increase from one row to the next.
pub fn is_strictly_ascending(samples: &[PositionSample]) -> bool {
    samples
        .iter()
        .tuple_windows()
        .all(|(a, b)| match (a.label, b.label) {
            (SampleLabel::Day(x), SampleLabel::Day(y)) => x < y,
            (SampleLabel::Timestamp(x), SampleLabel::Timestamp(y)) => x < y,
            _ => false,
        })
}
