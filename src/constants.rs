//! # Constants and type definitions for orbsample
//!
//! Physical constants, gravitational parameters of the default attractors and
//! the unit aliases shared by the orbital-mechanics layer and the sampler.
//!
//! ## Units
//!
//! - Lengths: **km**
//! - Angles: **radians**
//! - Time: **seconds** for propagation offsets, **days** for sampling steps
//! - Gravitational parameters: **km³/s²**

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Default number of daily samples in a verification export.
pub const DEFAULT_SAMPLE_COUNT: u32 = 365;

// -------------------------------------------------------------------------------------------------
// Gravitational parameters (km³/s²)
// -------------------------------------------------------------------------------------------------

/// IAU 2009 heliocentric gravitational constant
pub const SUN_GM: f64 = 132_712_442_099.000_02;

pub const MERCURY_GM: f64 = 22_032.09;

pub const VENUS_GM: f64 = 324_858.592;

pub const EARTH_GM: f64 = 398_600.441_800_000_03;

pub const MOON_GM: f64 = 4_902.799_81;

pub const MARS_GM: f64 = 42_828.3744;

pub const JUPITER_GM: f64 = 126_712_762.53;

pub const SATURN_GM: f64 = 37_931_207.7;

pub const URANUS_GM: f64 = 5_793_939.300_000_001;

pub const NEPTUNE_GM: f64 = 6_836_527.100_580_397;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Gravitational parameter in km³/s²
pub type GravParam = f64;
