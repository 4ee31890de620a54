use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Interval {
    /// The largest possible interval.
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
    #[error("expected 'yyyy', 'yyyy-mm' or 'yyyy-mm-dd'")]
    BadShorthand,
}

impl ParseError {
    /// Parses the single-period shorthands `yyyy` and `yyyy-mm`.
    fn shorthand(s: &str) -> Result<Interval, Self> {
        let mut parts = s.split('-');
        let year = parts.next().filter(|p| p.len() == 4);
        let month = parts.next().filter(|p| p.len() == 2);
        if parts.next().is_some() {
            return Err(Self::BadShorthand);
        }
        let year = year
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or(Self::BadShorthand)?;
        let (first, last) = match month {
            None if s.len() == 4 => {
                let dt = base::Date::from_ymd(year, 1, 1).ok_or(Self::BadShorthand)?;
                (dt.first_of_year(), dt.last_of_year())
            }
            Some(m) => {
                let month = m.parse::<u8>().map_err(|_| Self::BadShorthand)?;
                let dt = base::Date::from_ymd(year, month, 1).ok_or(Self::BadShorthand)?;
                (dt.first_of_month(), dt.last_of_month())
            }
            None => return Err(Self::BadShorthand),
        };
        Ok(Interval {
            start: first,
            end: last,
        })
    }
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((left, right)) = s.split_once(':') {
            let start = match left.is_empty() {
                true => base::Date::MIN,
                false => left.parse::<base::Date>().map_err(ParseError::Left)?,
            };
            let end = match right.is_empty() {
                true => base::Date::MAX,
                false => right.parse::<base::Date>().map_err(ParseError::Right)?,
            };
            return Ok(Self { start, end });
        }
        if s.len() == 10 {
            let dt = s.parse::<base::Date>()?;
            return Ok(Self { start: dt, end: dt });
        }
        ParseError::shorthand(s)
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
