//! Intensity-weighted random levels.
//!
//! # Invariants
//! - Thresholds are checked in fixed order (4, 3, 2, 1) and are not
//!   normalized, so high intensities saturate the upper bands.
//! - Intensity `0` always yields level 0.

use crate::model::contribution::{ContributionRecord, Level};
use chrono::NaiveDate;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_INTENSITY: f64 = 0.0;
pub const MAX_INTENSITY: f64 = 5.0;
/// Intensity preselected by front ends.
pub const DEFAULT_INTENSITY: f64 = 3.0;

const LEVEL_THRESHOLDS: [(f64, u8); 4] = [(0.10, 4), (0.20, 3), (0.40, 2), (0.70, 1)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RandomizeError {
    /// Intensity is not finite or is outside `0.0..=5.0`.
    InvalidIntensity(f64),
}

impl Display for RandomizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIntensity(value) => write!(
                f,
                "intensity {value} is invalid; expected {MIN_INTENSITY}..={MAX_INTENSITY}"
            ),
        }
    }
}

impl Error for RandomizeError {}

/// Validated randomizer intensity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Intensity(f64);

impl Intensity {
    pub fn new(value: f64) -> Result<Self, RandomizeError> {
        if !value.is_finite() || !(MIN_INTENSITY..=MAX_INTENSITY).contains(&value) {
            return Err(RandomizeError::InvalidIntensity(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Caption shown next to the intensity control.
    pub fn status_text(self) -> &'static str {
        if self.0 < 1.0 {
            "I touch grass"
        } else if self.0 >= 4.0 {
            "GIVE ME A JOB!!!"
        } else {
            "I'm a nerd"
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

/// Maps one uniform sample `r` in `[0, 1)` to a level.
pub fn level_for_sample(sample: f64, intensity: Intensity) -> Level {
    LEVEL_THRESHOLDS
        .iter()
        .find(|(threshold, _)| sample < threshold * intensity.0)
        .and_then(|(_, level)| Level::new(*level).ok())
        .unwrap_or(Level::NONE)
}

/// Draws one random level per date.
pub fn randomize<R>(
    dates: &[NaiveDate],
    intensity: Intensity,
    rng: &mut R,
) -> Vec<ContributionRecord>
where
    R: Rng + ?Sized,
{
    dates
        .iter()
        .map(|date| {
            let level = level_for_sample(rng.gen::<f64>(), intensity);
            ContributionRecord::new(*date, level)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{level_for_sample, Intensity, RandomizeError};

    #[test]
    fn threshold_ladder_is_checked_in_order() {
        let one = Intensity::new(1.0).unwrap();
        assert_eq!(level_for_sample(0.05, one).value(), 4);
        assert_eq!(level_for_sample(0.15, one).value(), 3);
        assert_eq!(level_for_sample(0.30, one).value(), 2);
        assert_eq!(level_for_sample(0.60, one).value(), 1);
        assert_eq!(level_for_sample(0.80, one).value(), 0);
    }

    #[test]
    fn high_intensity_saturates_upper_bands() {
        let five = Intensity::new(5.0).unwrap();
        assert_eq!(level_for_sample(0.49, five).value(), 4);
        assert_eq!(level_for_sample(0.5, five).value(), 3);
        assert_eq!(level_for_sample(0.99, five).value(), 3);
    }

    #[test]
    fn rejects_out_of_range_intensity() {
        assert_eq!(
            Intensity::new(5.5),
            Err(RandomizeError::InvalidIntensity(5.5))
        );
        assert!(Intensity::new(f64::NAN).is_err());
        assert!(Intensity::new(-0.25).is_err());
    }

    #[test]
    fn status_text_tracks_intensity() {
        assert_eq!(Intensity::new(0.5).unwrap().status_text(), "I touch grass");
        assert_eq!(Intensity::new(3.0).unwrap().status_text(), "I'm a nerd");
        assert_eq!(Intensity::new(4.0).unwrap().status_text(), "GIVE ME A JOB!!!");
    }
}
