//! Reference clocks and relative time windows.

use chrono::{DateTime, FixedOffset, Local, TimeDelta, TimeZone};

/// Source of the current instant for time-windowed queries.
pub trait Clock {
    /// Returns the current instant in the clock's local offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Returns the local midnight that starts the day containing `instant`.
    ///
    /// By default the day is measured in `instant`'s own offset.
    fn start_of_day(&self, instant: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        instant
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.and_local_timezone(*instant.offset()).single())
    }
}

/// The host's wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    /// Resolves midnight through the host zone, whose offset at midnight
    /// differs from the current one on a daylight-saving change day.
    fn start_of_day(&self, instant: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        instant
            .with_timezone(&Local)
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
            .map(|midnight| midnight.fixed_offset())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always reports `now`, keeping its offset as the
    /// local offset.
    pub fn new<Tz: TimeZone>(now: DateTime<Tz>) -> Self {
        Self {
            now: now.fixed_offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn start_of_day(&self, instant: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        (**self).start_of_day(instant)
    }
}

/// A time window anchored at the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// The span of time ending now.
    Trailing(TimeDelta),
    /// From local midnight until now.
    Today,
}

impl Window {
    /// A trailing window of whole days.
    pub fn days(days: i64) -> Self {
        Window::Trailing(TimeDelta::try_days(days).unwrap_or(TimeDelta::MAX))
    }

    /// Returns the earliest instant inside the window, with days measured
    /// in `now`'s offset.
    ///
    /// `None` means the bound falls outside the representable calendar, in
    /// which case the window has no lower edge.
    pub fn lower_bound(&self, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        self.lower_bound_with(&FixedClock::new(now), now)
    }

    /// Like [`Window::lower_bound`], with local midnight resolved by `clock`.
    pub fn lower_bound_with<C: Clock + ?Sized>(
        &self,
        clock: &C,
        now: DateTime<FixedOffset>,
    ) -> Option<DateTime<FixedOffset>> {
        match self {
            Window::Trailing(span) => now.checked_sub_signed(*span),
            Window::Today => clock.start_of_day(now),
        }
    }

    /// Returns true if `instant` is not older than the window's lower bound.
    ///
    /// The bound itself is inside; instants after `now` are inside too.
    pub fn contains(&self, now: DateTime<FixedOffset>, instant: DateTime<FixedOffset>) -> bool {
        self.lower_bound(now).is_none_or(|bound| instant >= bound)
    }
}
