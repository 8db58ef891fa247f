//! Day boundaries and obstacles derived from configuration.
//!
//! Every time string is resolved against a single reference date. A value
//! that cannot be parsed aborts extraction: the planner never produces a
//! schedule from a partially understood configuration.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ConfigError;

/// Day start used when `user.wake_time` is not set.
pub const DEFAULT_WAKE_TIME: &str = "08:00";
/// Day end used when `schedule.evening_reflect` is not set.
pub const DEFAULT_DAY_END: &str = "21:00";

const GYM_MINUTES: i64 = 60;
const REFLECTION_MINUTES: i64 = 30;

pub const GYM_LABEL: &str = "Gym";
pub const REFLECTION_LABEL: &str = "Evening Reflection";

/// An immovable commitment the allocator routes around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedBlock {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl FixedBlock {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Half-open overlap test against `[start, end)`.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// An advisory span where deep work is placed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Everything the allocator needs to know about the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConstraints {
    pub day_start: NaiveDateTime,
    pub day_end: NaiveDateTime,
    pub fixed_blocks: Vec<FixedBlock>,
    pub work_windows: Vec<WorkWindow>,
}

impl DayConstraints {
    /// True if `[start, end)` hits no fixed block.
    pub fn is_free(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        !self.fixed_blocks.iter().any(|b| b.overlaps(start, end))
    }
}

/// Build day constraints for `date` from a configuration snapshot.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] naming the offending key when a time
/// or range is malformed, when the day ends before it starts, or when two
/// fixed blocks overlap.
pub fn extract_constraints(config: &Config, date: NaiveDate) -> Result<DayConstraints, ConfigError> {
    let day_start = parse_clock("user.wake_time", &config.user.wake_time, date)?;

    let reflect = config.schedule.evening_reflect.as_deref();
    let day_end = parse_clock(
        "schedule.evening_reflect",
        reflect.unwrap_or(DEFAULT_DAY_END),
        date,
    )?;

    if day_end <= day_start {
        return Err(ConfigError::invalid(
            "schedule.evening_reflect",
            format!(
                "day end {} must be after wake time {}",
                day_end.time(),
                day_start.time()
            ),
        ));
    }

    let mut fixed_blocks = Vec::new();

    if let Some(gym) = config.user.gym_time.as_deref() {
        let start = parse_clock("user.gym_time", gym, date)?;
        fixed_blocks.push(FixedBlock::new(
            start,
            start + Duration::minutes(GYM_MINUTES),
            GYM_LABEL,
        ));
    }

    if reflect.is_some() {
        fixed_blocks.push(FixedBlock::new(
            day_end,
            day_end + Duration::minutes(REFLECTION_MINUTES),
            REFLECTION_LABEL,
        ));
    }

    if let [a, b] = fixed_blocks.as_slice() {
        if a.overlaps(b.start, b.end) {
            return Err(ConfigError::invalid(
                "user.gym_time",
                format!("{} block overlaps {} block", a.label, b.label),
            ));
        }
    }

    let work_windows = config
        .user
        .preferred_work_blocks
        .iter()
        .map(|raw| {
            let (start, end) = parse_clock_range("user.preferred_work_blocks", raw, date)?;
            Ok(WorkWindow { start, end })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(DayConstraints {
        day_start,
        day_end,
        fixed_blocks,
        work_windows,
    })
}

/// Parse "HH:MM" on `date`.
fn parse_clock(key: &str, raw: &str, date: NaiveDate) -> Result<NaiveDateTime, ConfigError> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    if parts.len() != 2 {
        return Err(ConfigError::invalid(key, format!("expected HH:MM, got '{raw}'")));
    }

    let number = |part: &str| -> Option<u32> {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    let time = number(parts[0])
        .zip(number(parts[1]))
        .and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .ok_or_else(|| ConfigError::invalid(key, format!("'{raw}' is not a valid time of day")))?;

    Ok(date.and_time(time))
}

/// Parse "HH:MM-HH:MM" on `date`; the end must be after the start.
fn parse_clock_range(
    key: &str,
    raw: &str,
    date: NaiveDate,
) -> Result<(NaiveDateTime, NaiveDateTime), ConfigError> {
    let (start, end) = raw
        .split_once('-')
        .ok_or_else(|| ConfigError::invalid(key, format!("expected HH:MM-HH:MM, got '{raw}'")))?;

    let start = parse_clock(key, start, date)?;
    let end = parse_clock(key, end, date)?;
    if end <= start {
        return Err(ConfigError::invalid(
            key,
            format!("range '{raw}' ends before it starts"),
        ));
    }
    Ok((start, end))
}
