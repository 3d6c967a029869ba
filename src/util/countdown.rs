//! Remaining-time arithmetic for the launch countdown.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until launch, broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    /// True once the launch instant has been reached or passed.
    #[must_use]
    pub fn is_elapsed(self) -> bool {
        self == Self::default()
    }
}

/// Split the distance from `now_ms` to `launch_ms` into days/hours/minutes/
/// seconds. At or past the launch instant the countdown clamps to all zeros,
/// never going negative.
#[must_use]
pub fn countdown_parts(now_ms: i64, launch_ms: i64) -> CountdownParts {
    let distance = launch_ms - now_ms;
    if distance <= 0 {
        return CountdownParts::default();
    }
    CountdownParts {
        days: distance / MS_PER_DAY,
        hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}
