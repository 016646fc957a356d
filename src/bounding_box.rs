//! # Space/time bounding boxes of position series
//!
//! A [`BoundingBox`] is the axis-aligned hull of a set of [`PositionSample`]s
//! in km. When every sample is labelled with a timestamp the box also carries
//! the covered time span and becomes four dimensional; series labelled by day
//! index only get the three spatial dimensions.
//!
//! Bounds are inclusive on every side.
use std::fmt;

use hifitime::{Duration, Epoch};
use itertools::{Itertools, MinMaxResult};
use nalgebra::Vector3;

use crate::{
    sampler::{PositionSample, SampleLabel},
    time::format_timestamp,
};

/// Inclusive time interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub start: Epoch,
    pub end: Epoch,
}

impl TimeSpan {
    pub fn contains(&self, epoch: Epoch) -> bool {
        self.start <= epoch && epoch <= self.end
    }

    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn midpoint(&self) -> Epoch {
        self.start + Duration::from_seconds((self.end - self.start).to_seconds() / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest x, y, z.
    pub min: Vector3<f64>,
    /// Largest x, y, z.
    pub max: Vector3<f64>,
    /// Covered epochs, `None` unless every sample had a timestamp label.
    pub time: Option<TimeSpan>,
}

impl BoundingBox {
    /// Smallest box holding every sample, or `None` for an empty slice.
    pub fn from_samples(samples: &[PositionSample]) -> Option<Self> {
        let (first, rest) = samples.split_first()?;

        let (min, max) = rest
            .iter()
            .fold((first.position, first.position), |(min, max), s| {
                (min.inf(&s.position), max.sup(&s.position))
            });

        let epochs = samples
            .iter()
            .map(|s| match s.label {
                SampleLabel::Timestamp(epoch) => Some(epoch),
                SampleLabel::Day(_) => None,
            })
            .collect::<Option<Vec<Epoch>>>();

        let time = epochs.and_then(|epochs| match epochs.into_iter().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(epoch) => Some(TimeSpan {
                start: epoch,
                end: epoch,
            }),
            MinMaxResult::MinMax(start, end) => Some(TimeSpan { start, end }),
        });

        Some(BoundingBox { min, max, time })
    }

    /// True when `sample` lies inside the box.
    ///
    /// A box with a time span only contains timestamp-labelled samples whose
    /// epoch falls in the span; a purely spatial box ignores labels.
    pub fn contains(&self, sample: &PositionSample) -> bool {
        let inside = (0..3).all(|i| self.min[i] <= sample.position[i] && sample.position[i] <= self.max[i]);

        inside
            && match (self.time, sample.label) {
                (None, _) => true,
                (Some(span), SampleLabel::Timestamp(epoch)) => span.contains(epoch),
                (Some(_), SampleLabel::Day(_)) => false,
            }
    }

    /// True when the two boxes share at least one point.
    ///
    /// Time is only compared when both boxes carry a span.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let spatial = (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i]);

        spatial
            && match (self.time, other.time) {
                (Some(a), Some(b)) => a.overlaps(&b),
                _ => true,
            }
    }

    /// Center point of the box, with the middle of the time span if any.
    pub fn center(&self) -> (Vector3<f64>, Option<Epoch>) {
        ((self.min + self.max) / 2.0, self.time.map(|span| span.midpoint()))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) x ({}, {}, {})",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )?;
        if let Some(span) = self.time {
            write!(
                f,
                " from {} to {}",
                format_timestamp(&span.start),
                format_timestamp(&span.end)
            )?;
        }
        Ok(())
    }
}
