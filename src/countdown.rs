//! Event countdown arithmetic
//!
//! Pure time math only. The 1-second refresh and the DOM writes live in the
//! entry point; nothing here knows about schedulers or rendering.

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Time remaining until the event, broken into display fields.
///
/// Derived state: construct it through [`CountdownState::remaining`], never
/// field-by-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    /// Compute the breakdown of `target_ms - now_ms`.
    ///
    /// Total over all timestamp pairs: once the target has passed the state
    /// holds at zero, it never goes negative.
    pub fn remaining(target_ms: u64, now_ms: u64) -> Self {
        if now_ms >= target_ms {
            return Self::default();
        }
        let delta = target_ms - now_ms;
        Self {
            days: delta / MS_PER_DAY,
            hours: (delta / MS_PER_HOUR) % 24,
            minutes: (delta / MS_PER_MINUTE) % 60,
            seconds: (delta / MS_PER_SECOND) % 60,
        }
    }

    /// True once the target timestamp has passed (all fields zero).
    pub fn is_expired(&self) -> bool {
        *self == Self::default()
    }
}

/// Zero-pad a field to width 2 for display ("07", "59", "123").
pub fn format_field(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_expired_is_all_zero() {
        let state = CountdownState::remaining(1_000, 1_000);
        assert_eq!(state, CountdownState::default());
        assert!(state.is_expired());

        // Well past the target
        let state = CountdownState::remaining(1_000, 5_000_000);
        assert_eq!(state, CountdownState::default());
    }

    #[test]
    fn test_known_breakdown() {
        // 2 days, 3 hours, 4 minutes, 5 seconds out
        let delta = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND;
        let target = 10 * MS_PER_DAY;
        let state = CountdownState::remaining(target, target - delta);
        assert_eq!(state.days, 2);
        assert_eq!(state.hours, 3);
        assert_eq!(state.minutes, 4);
        assert_eq!(state.seconds, 5);
        assert!(!state.is_expired());
    }

    #[test]
    fn test_sub_second_delta_rounds_down() {
        let state = CountdownState::remaining(1_999, 1_000);
        assert_eq!(state.seconds, 0);
        assert!(state.is_expired());
    }

    #[test]
    fn test_field_ranges() {
        // One ms short of a full day: 23h 59m 59s
        let state = CountdownState::remaining(MS_PER_DAY - 1, 0);
        assert_eq!(state.days, 0);
        assert_eq!(state.hours, 23);
        assert_eq!(state.minutes, 59);
        assert_eq!(state.seconds, 59);
    }

    #[test]
    fn test_format_field_pads() {
        assert_eq!(format_field(0), "00");
        assert_eq!(format_field(7), "07");
        assert_eq!(format_field(59), "59");
        assert_eq!(format_field(123), "123");
    }

    proptest! {
        /// Reconstructing milliseconds from the four fields loses at most
        /// the sub-second remainder.
        #[test]
        fn prop_reconstruction_within_one_second(delta in 1u64..=400 * MS_PER_DAY) {
            let target = 500 * MS_PER_DAY;
            let state = CountdownState::remaining(target, target - delta);
            let rebuilt = state.days * MS_PER_DAY
                + state.hours * MS_PER_HOUR
                + state.minutes * MS_PER_MINUTE
                + state.seconds * MS_PER_SECOND;
            prop_assert!(rebuilt <= delta);
            prop_assert!(delta - rebuilt < MS_PER_SECOND);
        }

        /// Hours/minutes/seconds always stay inside their display range.
        #[test]
        fn prop_fields_in_range(target in 0u64..u64::MAX / 2, now in 0u64..u64::MAX / 2) {
            let state = CountdownState::remaining(target, now);
            prop_assert!(state.hours < 24);
            prop_assert!(state.minutes < 60);
            prop_assert!(state.seconds < 60);
        }
    }
}
