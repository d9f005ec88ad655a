use chrono::Datelike;

/// Tells the current date.
pub trait TimeService: Send + Sync {
    /// The current year.
    fn this_year(&self) -> i32;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeService;

impl TimeService for SystemTimeService {
    fn this_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always answers the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeService {
    year: i32,
}

impl FixedTimeService {
    /// A service stuck in `year`.
    pub const fn new(year: i32) -> Self {
        Self { year }
    }
}

impl TimeService for FixedTimeService {
    fn this_year(&self) -> i32 {
        self.year
    }
}
