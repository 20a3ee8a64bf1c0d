use chrono::Month;

pub const INVALID_MONTH: &str = "Invalid Month";

/// A (year, month) pair. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: i32,
}

impl Period {
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Full English month name for 1-12, `"Invalid Month"` for anything else.
pub fn month_name(month: i32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or(INVALID_MONTH)
}
