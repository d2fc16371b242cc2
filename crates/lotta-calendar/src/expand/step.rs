//! Calendar-aware stepping arithmetic for recurrence expansion.
//!
//! Daily and weekly steps are fixed-length durations. Monthly and yearly
//! steps use calendar arithmetic, so stepping from Jan 31 clamps to the end
//! of shorter months instead of spilling into the next one.

use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};

use crate::recur::Frequency;

/// Advances `from` by `steps` units of `frequency`.
///
/// Returns `None` if the result falls outside chrono's representable range.
pub(crate) fn advance(
    frequency: Frequency,
    from: DateTime<Utc>,
    steps: u32,
) -> Option<DateTime<Utc>> {
    match frequency {
        Frequency::Daily => from.checked_add_signed(TimeDelta::days(i64::from(steps))),
        Frequency::Weekly => from.checked_add_signed(TimeDelta::weeks(i64::from(steps))),
        Frequency::Monthly => from.checked_add_months(Months::new(steps)),
        Frequency::Yearly => from.checked_add_months(Months::new(steps.checked_mul(12)?)),
    }
}

/// Number of whole `frequency` units separating `from` and `to`.
///
/// Returns 0 when `to` is not after `from`. Monthly and yearly frequencies
/// count fully elapsed calendar units, so advancing `from` by the returned
/// count never lands past `to`.
pub(crate) fn whole_steps_between(
    frequency: Frequency,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> u32 {
    if to <= from {
        return 0;
    }
    match frequency {
        Frequency::Daily => clamp_to_u32(to.signed_duration_since(from).num_days()),
        Frequency::Weekly => clamp_to_u32(to.signed_duration_since(from).num_weeks()),
        Frequency::Monthly => whole_months_between(from, to),
        Frequency::Yearly => whole_months_between(from, to) / 12,
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn whole_months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let calendar_months =
        i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month());
    let mut months = clamp_to_u32(calendar_months);

    // The calendar difference overshoots when the day (or time of day) of
    // `to` precedes that of `from`; walk back to fully elapsed months.
    while months > 0
        && from
            .checked_add_months(Months::new(months))
            .is_none_or(|stepped| stepped > to)
    {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn daily_steps_ignore_partial_days() {
        let from = utc(2024, 1, 1, 10, 0);
        let to = utc(2024, 1, 8, 9, 0);
        assert_eq!(whole_steps_between(Frequency::Daily, from, to), 6);
    }

    #[test]
    fn weekly_steps() {
        let from = utc(2024, 1, 1, 10, 0);
        let to = utc(2024, 1, 29, 10, 0);
        assert_eq!(whole_steps_between(Frequency::Weekly, from, to), 4);
    }

    #[test]
    fn monthly_steps_do_not_overshoot_short_months() {
        // Jan 31 -> Mar 1 is one whole month, not two.
        let from = utc(2024, 1, 31, 10, 0);
        let to = utc(2024, 3, 1, 0, 0);
        assert_eq!(whole_steps_between(Frequency::Monthly, from, to), 1);
    }

    #[test]
    fn monthly_steps_respect_time_of_day() {
        let from = utc(2024, 1, 15, 10, 0);
        let to = utc(2024, 2, 15, 9, 0);
        assert_eq!(whole_steps_between(Frequency::Monthly, from, to), 0);
    }

    #[test]
    fn yearly_steps_handle_leap_day_start() {
        let from = utc(2024, 2, 29, 12, 0);
        let to = utc(2025, 3, 1, 0, 0);
        assert_eq!(whole_steps_between(Frequency::Yearly, from, to), 1);
    }

    #[test]
    fn steps_are_zero_when_window_starts_before_event() {
        let from = utc(2024, 5, 1, 8, 0);
        let to = utc(2024, 4, 1, 8, 0);
        assert_eq!(whole_steps_between(Frequency::Daily, from, to), 0);
    }

    #[test]
    fn advance_clamps_month_end() {
        let from = utc(2024, 1, 31, 10, 0);
        assert_eq!(advance(Frequency::Monthly, from, 1), Some(utc(2024, 2, 29, 10, 0)));
    }

    #[test]
    fn advance_yearly_clamps_leap_day() {
        let from = utc(2024, 2, 29, 10, 0);
        assert_eq!(advance(Frequency::Yearly, from, 1), Some(utc(2025, 2, 28, 10, 0)));
    }

    #[test]
    fn advance_daily_and_weekly_are_fixed_length() {
        let from = utc(2024, 1, 1, 10, 0);
        assert_eq!(advance(Frequency::Daily, from, 3), Some(utc(2024, 1, 4, 10, 0)));
        assert_eq!(advance(Frequency::Weekly, from, 2), Some(utc(2024, 1, 15, 10, 0)));
    }
}
