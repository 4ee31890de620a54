/// A calendar date without time or timezone information. Values are
/// guaranteed to be between `0000-01-01` and `9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

const FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999 - 12 - 31));

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        let dt = Self(time::Date::from_calendar_date(year, month, day).ok()?);
        (Self::MIN..=Self::MAX).contains(&dt).then_some(dt)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn first_of_month(self) -> Self {
        Self(self.0.replace_day(1).unwrap_or(self.0))
    }

    pub fn last_of_month(self) -> Self {
        let last = time::util::days_in_year_month(self.year(), self.0.month());
        Self(self.0.replace_day(last).unwrap_or(self.0))
    }

    pub fn first_of_year(self) -> Self {
        Self::from_ymd(self.year(), 1, 1).unwrap_or(self)
    }

    pub fn last_of_year(self) -> Self {
        Self::from_ymd(self.year(), 12, 31).unwrap_or(self)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self.0.format(FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a `yyyy-mm-dd` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let dt = Self(time::Date::parse(s, FORMAT)?);
        match (Self::MIN..=Self::MAX).contains(&dt) {
            true => Ok(dt),
            false => Err(ParseError::OutOfRange),
        }
    }
}

impl TryFrom<&str> for Date {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
