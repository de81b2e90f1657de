//! Experience, level and the distance to the next level.
//!
//! The level curve is fixed:
//!
//! ```text
//! level          = floor((sqrt(2500 + 200 * experience) - 50) / 100)
//! untilNextLevel = 50 * (level + 1) * (level + 2) - experience
//! ```
//!
//! The square root is taken over integers so the floor is exact for every
//! experience value in range.

use serde::Serialize;

use crate::error::DomainError;

/// Upper bound (inclusive) for player experience
pub const MAX_EXPERIENCE: u32 = 10_000_000;

/// Experience together with the two fields derived from it.
///
/// A `Progress` can only be built from an experience value, so level and
/// until-next-level always agree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    experience: u32,
    level: u32,
    until_next_level: u32,
}

impl Progress {
    /// Validate `experience` against `0..=MAX_EXPERIENCE` and derive level data.
    pub fn from_experience(experience: i64) -> Result<Self, DomainError> {
        let experience = u32::try_from(experience)
            .ok()
            .filter(|exp| *exp <= MAX_EXPERIENCE)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Experience must be between 0 and {MAX_EXPERIENCE}, got {experience}"
                ))
            })?;

        let level = level_for(experience);
        Ok(Self {
            experience,
            level,
            until_next_level: until_next_level(level, experience),
        })
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn until_next_level(&self) -> u32 {
        self.until_next_level
    }
}

/// Level reached with `experience` points.
pub fn level_for(experience: u32) -> u32 {
    let radicand = 2_500 + 200 * u64::from(experience);
    // radicand >= 2500, so the root is never below 50
    ((integer_sqrt(radicand) - 50) / 100) as u32
}

/// Points still missing to reach `level + 1`.
///
/// Always strictly positive when `level == level_for(experience)`.
pub fn until_next_level(level: u32, experience: u32) -> u32 {
    let threshold = 50 * (u64::from(level) + 1) * (u64::from(level) + 2);
    threshold.saturating_sub(u64::from(experience)) as u32
}

fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_experience_is_level_zero() {
        let progress = Progress::from_experience(0).unwrap();
        assert_eq!(progress.level(), 0);
        assert_eq!(progress.until_next_level(), 100);
    }

    #[test]
    fn five_thousand_experience_is_level_nine() {
        // sqrt(1_002_500) = 1001.24..., (1001.24 - 50) / 100 = 9.51
        let progress = Progress::from_experience(5_000).unwrap();
        assert_eq!(progress.level(), 9);
        assert_eq!(progress.until_next_level(), 500);
    }

    #[test]
    fn level_thresholds_are_exact() {
        // Level L starts at 50 * L * (L + 1)
        assert_eq!(level_for(99), 0);
        assert_eq!(level_for(100), 1);
        assert_eq!(level_for(299), 1);
        assert_eq!(level_for(300), 2);
        assert_eq!(level_for(4_950), 9);
        assert_eq!(level_for(5_500), 10);
    }

    #[test]
    fn maximum_experience_is_accepted() {
        let progress = Progress::from_experience(i64::from(MAX_EXPERIENCE)).unwrap();
        assert_eq!(progress.level(), 446);
        assert_eq!(progress.until_next_level(), 50 * 447 * 448 - MAX_EXPERIENCE);
    }

    #[test]
    fn out_of_range_experience_is_rejected() {
        assert!(Progress::from_experience(-1).is_err());
        assert!(Progress::from_experience(i64::from(MAX_EXPERIENCE) + 1).is_err());
    }

    #[test]
    fn level_is_monotonic_and_until_next_level_positive() {
        let mut previous = 0;
        for experience in (0..=MAX_EXPERIENCE).step_by(997).chain([MAX_EXPERIENCE]) {
            let level = level_for(experience);
            assert!(level >= previous, "level dropped at {experience}");
            assert!(until_next_level(level, experience) > 0);
            previous = level;
        }
    }

    #[test]
    fn serializes_flat_camel_case() {
        let json = serde_json::to_value(Progress::from_experience(300).unwrap()).unwrap();
        assert_eq!(json["experience"], 300);
        assert_eq!(json["level"], 2);
        assert_eq!(json["untilNextLevel"], 300);
    }
}
