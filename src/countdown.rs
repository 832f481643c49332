use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveTime, Offset, TimeZone};
use gloo_timers::callback::Interval;
use log::info;
use stylist::yew::styled_component;
use yew::prelude::*;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

pub const TICK_MILLIS: u32 = 1_000;

/// Time left until the promotion ends, split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingDuration {
    /// `None` once the deadline has been reached.
    pub fn from_millis(delta: i64) -> Option<Self> {
        if delta <= 0 {
            return None;
        }
        Some(Self {
            days: (delta / MILLIS_PER_DAY) as u64,
            hours: (delta / MILLIS_PER_HOUR % 24) as u64,
            minutes: (delta / MILLIS_PER_MINUTE % 60) as u64,
            seconds: (delta / MILLIS_PER_SECOND % 60) as u64,
        })
    }
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        m => (date.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// Last millisecond (23:59:59.999) of the month `now` falls in, in `now`'s zone.
///
/// A repeated wall time resolves to its earlier instant. A skipped one is read
/// with the offset in force before the gap, which lands just past it.
pub fn end_of_month<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let next_month = first_of_next_month(now.date_naive()).and_time(NaiveTime::MIN);
    let last_instant = next_month - Duration::milliseconds(1);
    let tz = now.timezone();
    match tz.from_local_datetime(&last_instant) {
        LocalResult::Single(target) => target,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            let before_gap = tz
                .offset_from_local_datetime(&(last_instant - Duration::hours(2)))
                .earliest()
                .unwrap_or_else(|| tz.offset_from_utc_datetime(&last_instant))
                .fix();
            let utc = last_instant - Duration::seconds(before_gap.local_minus_utc().into());
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Countdown towards a target fixed at construction.
///
/// Past the target, ticks leave the last value in place instead of going
/// negative or rolling over to the next month.
#[derive(Clone, Debug)]
pub struct Countdown {
    target_millis: i64,
    remaining: RemainingDuration,
}

impl Countdown {
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let target = end_of_month(now);
        let mut countdown = Self {
            target_millis: target.timestamp_millis(),
            remaining: RemainingDuration::default(),
        };
        countdown.tick(now);
        countdown
    }

    pub fn target_millis(&self) -> i64 {
        self.target_millis
    }

    pub fn remaining(&self) -> RemainingDuration {
        self.remaining
    }

    /// Returns whether the displayed value changed.
    pub fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        match RemainingDuration::from_millis(self.target_millis - now.timestamp_millis()) {
            Some(remaining) if remaining != self.remaining => {
                self.remaining = remaining;
                true
            }
            _ => false,
        }
    }
}

#[derive(Properties, PartialEq)]
struct TimeBoxProps {
    value: u64,
    label: &'static str,
}

#[styled_component(TimeBox)]
fn time_box(props: &TimeBoxProps) -> Html {
    html! {
        <div class={css!(r#"
            background: #fff;
            border-radius: 12px;
            padding: 12px;
            min-width: 70px;
            text-align: center;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);

            .value {
                font-size: 1.75rem;
                font-weight: 900;
                color: #ea580c;
            }
            .label {
                font-size: 0.75rem;
                color: #6b7280;
                text-transform: uppercase;
                letter-spacing: 0.05em;
            }
        "#)}>
            <div class="value">{format!("{:02}", props.value)}</div>
            <div class="label">{props.label}</div>
        </div>
    }
}

#[styled_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let remaining = use_state(RemainingDuration::default);

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |_| {
                let mut countdown = Countdown::new(&Local::now());
                info!("Countdown running until {}", countdown.target_millis());
                remaining.set(countdown.remaining());

                let interval = Interval::new(TICK_MILLIS, move || {
                    if countdown.tick(&Local::now()) {
                        remaining.set(countdown.remaining());
                    }
                });

                // Dropping the handle clears the browser interval.
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class={css!("display: flex; gap: 12px; justify-content: flex-start; @media (max-width: 768px) { justify-content: center; }")}>
            <TimeBox value={remaining.days} label="дней" />
            <TimeBox value={remaining.hours} label="часов" />
            <TimeBox value={remaining.minutes} label="минут" />
            <TimeBox value={remaining.seconds} label="секунд" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDateTime, Timelike, Utc};

    /// Zone with a single offset change at `switch` (UTC).
    #[derive(Clone, Copy, Debug)]
    struct OneShift {
        switch: NaiveDateTime,
        before: FixedOffset,
        after: FixedOffset,
    }

    #[derive(Clone, Copy, Debug)]
    struct ShiftOffset {
        zone: OneShift,
        fixed: FixedOffset,
    }

    impl Offset for ShiftOffset {
        fn fix(&self) -> FixedOffset {
            self.fixed
        }
    }

    impl OneShift {
        fn offset(&self, fixed: FixedOffset) -> ShiftOffset {
            ShiftOffset { zone: *self, fixed }
        }

        fn at_utc(&self, utc: &NaiveDateTime) -> ShiftOffset {
            if *utc < self.switch {
                self.offset(self.before)
            } else {
                self.offset(self.after)
            }
        }
    }

    impl TimeZone for OneShift {
        type Offset = ShiftOffset;

        fn from_offset(offset: &ShiftOffset) -> Self {
            offset.zone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ShiftOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ShiftOffset> {
            let shifted = |o: FixedOffset| *local - Duration::seconds(o.local_minus_utc().into());
            let before_valid = shifted(self.before) < self.switch;
            let after_valid = shifted(self.after) >= self.switch;
            match (before_valid, after_valid) {
                (true, true) => {
                    let (a, b) = (self.offset(self.before), self.offset(self.after));
                    if shifted(self.before) <= shifted(self.after) {
                        LocalResult::Ambiguous(a, b)
                    } else {
                        LocalResult::Ambiguous(b, a)
                    }
                }
                (true, false) => LocalResult::Single(self.offset(self.before)),
                (false, true) => LocalResult::Single(self.offset(self.after)),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> ShiftOffset {
            self.at_utc(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ShiftOffset {
            self.at_utc(utc)
        }
    }

    fn hours_east(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    fn total_seconds(r: RemainingDuration) -> u64 {
        r.days * 86_400 + r.hours * 3_600 + r.minutes * 60 + r.seconds
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn target_is_last_millisecond_of_month() {
        let target = end_of_month(&utc(2024, 4, 10, 8, 30, 0));
        assert_eq!(target.date_naive(), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
        assert_eq!((target.hour(), target.minute(), target.second()), (23, 59, 59));
        assert_eq!(target.timestamp_subsec_millis(), 999);
    }

    #[test]
    fn target_handles_month_lengths() {
        let cases = [
            (utc(2024, 2, 1, 0, 0, 0), (2024, 2, 29)),
            (utc(2023, 2, 28, 23, 0, 0), (2023, 2, 28)),
            (utc(2024, 12, 31, 12, 0, 0), (2024, 12, 31)),
            (utc(2024, 1, 15, 0, 0, 0), (2024, 1, 31)),
        ];
        for (now, (y, m, d)) in cases {
            assert_eq!(
                end_of_month(&now).date_naive(),
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                "now = {now}"
            );
        }
    }

    #[test]
    fn target_is_local_to_the_given_zone() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = moscow.with_ymd_and_hms(2024, 6, 30, 23, 0, 0).unwrap();
        let target = end_of_month(&now);
        assert_eq!(target.offset(), now.offset());
        assert_eq!(target.timestamp_millis() - now.timestamp_millis(), 59 * 60_000 + 59_999);
    }

    #[test]
    fn breakdown_matches_whole_seconds_left() {
        let starts = [
            utc(2024, 3, 1, 0, 0, 0),
            utc(2024, 3, 17, 13, 45, 12),
            utc(2024, 3, 31, 23, 59, 58),
        ];
        for now in starts {
            let countdown = Countdown::new(&now);
            let remaining = countdown.remaining();
            let delta = countdown.target_millis() - now.timestamp_millis();
            assert_eq!(total_seconds(remaining), (delta / 1000) as u64);
            assert!(remaining.hours < 24);
            assert!(remaining.minutes < 60);
            assert!(remaining.seconds < 60);
        }
    }

    #[test]
    fn known_breakdown() {
        let delta = 2 * MILLIS_PER_DAY + 3 * MILLIS_PER_HOUR + 4 * MILLIS_PER_MINUTE + 5_999;
        assert_eq!(
            RemainingDuration::from_millis(delta),
            Some(RemainingDuration { days: 2, hours: 3, minutes: 4, seconds: 5 })
        );
    }

    #[test]
    fn no_breakdown_at_or_past_deadline() {
        assert_eq!(RemainingDuration::from_millis(0), None);
        assert_eq!(RemainingDuration::from_millis(-1), None);
    }

    #[test]
    fn tick_advances_each_second() {
        let start = utc(2024, 5, 31, 23, 59, 0);
        let mut countdown = Countdown::new(&start);
        assert_eq!(countdown.remaining().seconds, 59);

        assert!(countdown.tick(&utc(2024, 5, 31, 23, 59, 1)));
        assert_eq!(countdown.remaining().seconds, 58);
        assert!(!countdown.tick(&utc(2024, 5, 31, 23, 59, 1)));
    }

    #[test]
    fn freezes_after_deadline() {
        let mut countdown = Countdown::new(&utc(2024, 5, 31, 23, 59, 58));
        countdown.tick(&utc(2024, 5, 31, 23, 59, 59));
        let last = countdown.remaining();
        assert_eq!(total_seconds(last), 0);

        for now in [utc(2024, 6, 1, 0, 0, 0), utc(2024, 6, 1, 0, 0, 5), utc(2024, 7, 15, 0, 0, 0)] {
            assert!(!countdown.tick(&now));
            assert_eq!(countdown.remaining(), last);
        }
    }

    #[test]
    fn repeated_wall_time_takes_earlier_instant() {
        // Clocks go back from +3 to +2 at 00:30 local, so 23:59:59.999 happens twice.
        let zone = OneShift {
            switch: utc(2024, 6, 30, 21, 30, 0).naive_utc(),
            before: hours_east(3),
            after: hours_east(2),
        };
        let now = utc(2024, 6, 15, 0, 0, 0).with_timezone(&zone);
        let expected = utc(2024, 6, 30, 20, 59, 59).timestamp_millis() + 999;
        assert_eq!(end_of_month(&now).timestamp_millis(), expected);
    }

    #[test]
    fn skipped_wall_time_uses_offset_before_gap() {
        // Clocks jump from +2 to +3 at 23:30 local, so 23:59:59.999 never happens.
        let zone = OneShift {
            switch: utc(2024, 6, 30, 21, 30, 0).naive_utc(),
            before: hours_east(2),
            after: hours_east(3),
        };
        let now = utc(2024, 6, 15, 0, 0, 0).with_timezone(&zone);
        let target = end_of_month(&now);
        let expected = utc(2024, 6, 30, 21, 59, 59).timestamp_millis() + 999;
        assert_eq!(target.timestamp_millis(), expected);
        assert_eq!(target.offset().fix(), hours_east(3));
    }

    #[test]
    fn target_never_moves() {
        let mut countdown = Countdown::new(&utc(2024, 8, 20, 0, 0, 0));
        let target = countdown.target_millis();
        countdown.tick(&utc(2024, 9, 5, 0, 0, 0));
        assert_eq!(countdown.target_millis(), target);
    }
}
