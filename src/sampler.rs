//! # Orbit sampling and CSV export
//!
//! [`OrbitSampler`] turns an orbit into a fixed-length series of
//! [`PositionSample`]s and writes them as `name,label,x,y,z` rows, one file
//! per orbit, for comparison against reference astrodynamics packages.
//!
//! ## Sampling rules
//!
//! * Day `0` is the untouched initial state of the orbit: no propagation is
//!   applied, so its position is bit-identical to the state built from the
//!   classical elements.
//! * Day `k ≥ 1` is obtained by propagating **the original orbit** by `k` days.
//!   Samples never depend on each other, which keeps each row reproducible on
//!   its own and free of accumulated drift.
//! * Rows are written in ascending day order, without a header.
//!
//! ## Variants
//!
//! The historical verification scripts differed in three ways, all captured by
//! [`SamplerConfig`]:
//!
//! * `include_epoch_sample` – whether the day-0 row is written,
//! * `label_mode` – day index or absolute timestamp in the second column,
//! * `emit_diagnostic` – log the classical → Cartesian conversion of each orbit.
//!
//! ## Output files
//!
//! The file for an orbit is `<name with spaces replaced by '_'>.csv` inside the
//! caller-supplied directory ([`output_path`]). It is truncated when opened and
//! removed again if sampling fails midway, so a file on disk is always complete.
use std::{
    fmt,
    fs::{self, File},
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use hifitime::{Duration, Epoch};
use nalgebra::Vector3;
use tracing::{debug, info, warn};

use crate::{
    catalog::{OrbitCatalog, OrbitDefinition},
    constants::DEFAULT_SAMPLE_COUNT,
    keplerian_element::classical_to_state,
    orbsample_errors::OrbSampleError,
    time::{days, format_timestamp},
    two_body::{OrbitState, TwoBodyOrbit},
};

/// What the second CSV column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Integer day offset from the orbit epoch.
    #[default]
    DayIndex,
    /// Absolute UTC timestamp of the sample (RFC 3339).
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of daily propagation steps after the epoch.
    pub sample_count: u32,
    /// Write the day-0 row, read from the initial state without propagation.
    pub include_epoch_sample: bool,
    /// Content of the second column of every row.
    pub label_mode: LabelMode,
    /// Log the classical elements → state vector conversion of each orbit.
    pub emit_diagnostic: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            sample_count: DEFAULT_SAMPLE_COUNT,
            include_epoch_sample: true,
            label_mode: LabelMode::DayIndex,
            emit_diagnostic: false,
        }
    }
}

/// Second column of a position row.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum SampleLabel {
    Day(u32),
    Timestamp(Epoch),
}

impl fmt::Display for SampleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleLabel::Day(day) => write!(f, "{day}"),
            SampleLabel::Timestamp(epoch) => write!(f, "{}", format_timestamp(epoch)),
        }
    }
}

/// One sampled position of a named orbit, in km.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSample {
    pub name: String,
    pub label: SampleLabel,
    pub position: Vector3<f64>,
}

impl PositionSample {
    /// The CSV fields `name,label,x,y,z`.
    ///
    /// Coordinates use Rust's shortest round-trip decimal formatting, which
    /// never switches to exponent notation.
    pub fn to_record(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.label.to_string(),
            self.position.x.to_string(),
            self.position.y.to_string(),
            self.position.z.to_string(),
        ]
    }
}

/// File stem used for the output of orbit `name`.
///
/// Only spaces are replaced (by underscores); no other normalization is done.
pub fn file_stem(name: &str) -> String {
    name.replace(' ', "_")
}

/// Path of the CSV file for `name` inside `out_dir`.
pub fn output_path(out_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    out_dir.as_ref().join(format!("{}.csv", file_stem(name)))
}

#[derive(Debug, Clone, Default)]
pub struct OrbitSampler {
    config: SamplerConfig,
}

impl OrbitSampler {
    pub fn new(config: SamplerConfig) -> Self {
        OrbitSampler { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Day offsets sampled by this configuration, ascending.
    pub fn days(&self) -> RangeInclusive<u32> {
        let first = if self.config.include_epoch_sample { 0 } else { 1 };
        first..=self.config.sample_count
    }

    /// Sample a single day offset.
    ///
    /// Arguments
    /// ---------
    /// * `name`: orbit name written in the first column.
    /// * `orbit`: the orbit at its defining epoch.
    /// * `day`: offset in days; `0` reads the initial state directly.
    ///
    /// Return
    /// ------
    /// * The sample, or the propagation error of the backend.
    pub fn sample_at<O: OrbitState>(
        &self,
        name: &str,
        orbit: &O,
        day: u32,
    ) -> Result<PositionSample, OrbSampleError> {
        let (epoch, position) = if day == 0 {
            (orbit.epoch(), orbit.position())
        } else {
            let state = orbit.propagate(days(day))?;
            (state.epoch(), state.position())
        };

        let label = match self.config.label_mode {
            LabelMode::DayIndex => SampleLabel::Day(day),
            LabelMode::Timestamp => SampleLabel::Timestamp(epoch),
        };

        Ok(PositionSample {
            name: name.to_string(),
            label,
            position,
        })
    }

    /// Sample every configured day offset, in ascending order.
    pub fn sample<O: OrbitState>(
        &self,
        name: &str,
        orbit: &O,
    ) -> Result<Vec<PositionSample>, OrbSampleError> {
        self.days()
            .map(|day| self.sample_at(name, orbit, day))
            .collect()
    }

    /// Sample one full period of `orbit` in `steps` equal intervals.
    ///
    /// The returned series has `steps + 1` timestamp-labelled samples; the
    /// first one is the initial state and the last one closes the orbit.
    pub fn sample_full_orbit(
        &self,
        name: &str,
        orbit: &TwoBodyOrbit,
        steps: u32,
    ) -> Result<Vec<PositionSample>, OrbSampleError> {
        let step_seconds = orbit.period().to_seconds() / f64::from(steps.max(1));
        (0..=steps)
            .map(|i| {
                let (epoch, position) = if i == 0 {
                    (orbit.epoch(), orbit.position())
                } else {
                    let state = orbit.propagate(Duration::from_seconds(step_seconds * f64::from(i)))?;
                    (state.epoch(), state.position())
                };
                Ok(PositionSample {
                    name: name.to_string(),
                    label: SampleLabel::Timestamp(epoch),
                    position,
                })
            })
            .collect()
    }

    /// Sample `orbit` and write its CSV file into `out_dir`.
    ///
    /// The file is created (or truncated), filled row by row and flushed
    /// before returning. On any error the partial file is removed and the
    /// error is returned.
    ///
    /// Return
    /// ------
    /// * The path of the written file.
    pub fn export_orbit<O: OrbitState>(
        &self,
        name: &str,
        orbit: &O,
        out_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, OrbSampleError> {
        let path = output_path(out_dir, name);

        match self.write_samples(&path, name, orbit) {
            Ok(rows) => {
                info!(orbit = name, rows, path = %path.display(), "exported orbit");
                Ok(path)
            }
            Err(err) => {
                if path.exists() {
                    warn!(orbit = name, path = %path.display(), "removing partial output");
                    if let Err(rm_err) = fs::remove_file(&path) {
                        warn!(path = %path.display(), error = %rm_err, "could not remove partial output");
                    }
                }
                Err(err)
            }
        }
    }

    fn write_samples<O: OrbitState>(
        &self,
        path: &Path,
        name: &str,
        orbit: &O,
    ) -> Result<usize, OrbSampleError> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        let mut rows = 0;
        for day in self.days() {
            let sample = self.sample_at(name, orbit, day)?;
            writer.write_record(sample.to_record())?;
            rows += 1;
        }
        writer.flush()?;
        debug!(orbit = name, rows, "flushed samples");

        Ok(rows)
    }

    /// Build the orbit of a definition and export it.
    pub fn export_definition(
        &self,
        definition: &OrbitDefinition,
        out_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, OrbSampleError> {
        let orbit = definition.to_orbit()?;

        if self.config.emit_diagnostic {
            let (r, v) = classical_to_state(&definition.elements, definition.attractor.mu());
            info!(
                orbit = %definition.name,
                attractor = %definition.attractor,
                epoch = %format_timestamp(&orbit.epoch()),
                r_km = ?[r.x, r.y, r.z],
                v_km_s = ?[v.x, v.y, v.z],
                "classical elements to state vector"
            );
        }

        self.export_orbit(&definition.name, &orbit, out_dir)
    }

    /// Export every orbit of a catalog, one after another.
    ///
    /// Stops at the first failing orbit; files already written for earlier
    /// orbits are kept.
    pub fn export_catalog(
        &self,
        catalog: &OrbitCatalog,
        out_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, OrbSampleError> {
        let out_dir = out_dir.as_ref();
        catalog
            .iter()
            .map(|definition| self.export_definition(definition, out_dir))
            .collect()
    }
}
