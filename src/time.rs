use hifitime::{Duration, Epoch, TimeScale};
use std::str::FromStr;

use crate::{constants::SECONDS_PER_DAY, orbsample_errors::OrbSampleError};

/// Default reference epoch of an orbit definition: 2000-01-01T00:00:00 UTC.
pub fn default_epoch() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(2000, 1, 1)
}

/// Duration of `days` whole days.
pub fn days(days: u32) -> Duration {
    Duration::from_seconds(f64::from(days) * SECONDS_PER_DAY)
}

/// Parse a UTC timestamp.
///
/// Accepted layouts
/// ----------------
/// * RFC 3339 with a `Z` suffix: `2018-01-02T00:00:00Z`
/// * Python's default isoformat, optional fraction and no zone:
///   `2018-01-02T00:00:00.000`
/// * anything hifitime understands natively, e.g. `2018-01-02T00:00:00 UTC`
///
/// Return
/// ------
/// * the parsed [`Epoch`] or `InvalidEpoch`
pub fn parse_timestamp(input: &str) -> Result<Epoch, OrbSampleError> {
    let input = input.trim();
    if let Some(epoch) = parse_iso_utc(input) {
        return epoch;
    }
    Epoch::from_str(input).map_err(|e| OrbSampleError::InvalidEpoch(format!("{input}: {e}")))
}

fn parse_iso_utc(input: &str) -> Option<Result<Epoch, OrbSampleError>> {
    let stripped = input.strip_suffix('Z').unwrap_or(input);
    let (date, time) = stripped.split_once('T')?;
    if time.contains(|c: char| c.is_whitespace() || c == '+') {
        return None;
    }

    let invalid = || OrbSampleError::InvalidEpoch(input.to_string());

    let mut date_parts = date.splitn(3, '-');
    let mut time_parts = time.splitn(3, ':');
    let fields = (
        date_parts.next()?.parse::<i32>(),
        date_parts.next()?.parse::<u8>(),
        date_parts.next()?.parse::<u8>(),
        time_parts.next()?.parse::<u8>(),
        time_parts.next()?.parse::<u8>(),
    );
    let seconds = time_parts.next()?;

    let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute)) = fields else {
        return Some(Err(invalid()));
    };

    let (whole, frac) = seconds.split_once('.').unwrap_or((seconds, ""));
    let Ok(second) = whole.parse::<u8>() else {
        return Some(Err(invalid()));
    };
    let nanos = if frac.is_empty() {
        0
    } else {
        if frac.len() > 9 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Some(Err(invalid()));
        }
        // right-pad to nanoseconds
        match format!("{frac:0<9}").parse::<u32>() {
            Ok(n) => n,
            Err(_) => return Some(Err(invalid())),
        }
    };

    Some(
        Epoch::maybe_from_gregorian(year, month, day, hour, minute, second, nanos, TimeScale::UTC)
            .map_err(|e| OrbSampleError::InvalidEpoch(format!("{input}: {e}"))),
    )
}

/// Format an epoch as an RFC 3339 UTC timestamp, e.g. `2018-01-02T00:00:00Z`.
///
/// Sub-second parts are written with millisecond precision only when present.
pub fn format_timestamp(epoch: &Epoch) -> String {
    let (y, m, d, hh, mm, ss, ns) = epoch.to_gregorian_utc();
    if ns == 0 {
        format!("{y:04}-{m:02}-{d:02}T{hh:02}:{mm:02}:{ss:02}Z")
    } else {
        format!(
            "{y:04}-{m:02}-{d:02}T{hh:02}:{mm:02}:{ss:02}.{:03}Z",
            ns / 1_000_000
        )
    }
}
