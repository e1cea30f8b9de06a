//! Level progression curve.
//!
//! Reaching level `n` takes `50 * n * (n + 1)` experience in total, so each level costs
//! 100 more experience than the one before it.

/// Level and distance to the next level for a given experience total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: i32,
    pub until_next_level: i32,
}

/// Computes the level reached with `experience` points.
///
/// `floor((sqrt(2500 + 200 * experience) - 50) / 100)`. Negative experience is treated
/// as zero.
pub fn level_for(experience: i32) -> i32 {
    let experience = i64::from(experience.max(0));
    let root = ((2500 + 200 * experience) as f64).sqrt();

    ((root - 50.0) / 100.0).floor() as i32
}

/// Total experience at which `level` starts.
pub fn experience_for_level(level: i32) -> i64 {
    let level = i64::from(level);
    50 * level * (level + 1)
}

/// Computes both derived fields for `experience`.
pub fn progress(experience: i32) -> Progress {
    let level = level_for(experience);
    let until_next_level = experience_for_level(level + 1) - i64::from(experience.max(0));

    Progress {
        level,
        until_next_level: until_next_level as i32,
    }
}
