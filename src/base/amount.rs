use crate::base::util;

/// Monetary quantity stored as an integral number of hundredths, so sums over
/// any number of records are exact. Addition saturates at the `i64` bounds.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
pub struct Amount(pub i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Converts a quantity in whole currency units, rounding to the nearest
    /// hundredth. Returns `None` for non-finite or out of range input.
    pub fn from_units(units: f64) -> Option<Self> {
        let hundredths = (units * 100.0).round();
        if hundredths.is_finite() && hundredths >= i64::MIN as f64 && hundredths <= i64::MAX as f64
        {
            Some(Self(hundredths as i64))
        } else {
            None
        }
    }

    /// Returns `amount.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.0.unsigned_abs().max(100);
        let mut len = util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 1; // minus sign
        }
        len
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::fmt::Display for Amount {
    /// Formats with two decimal places and thousands separators. Honors the
    /// formatter's width and alignment.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.0.unsigned_abs();
        let units = (n / 100).to_string();
        let mut s = String::with_capacity(self.charlen());
        if self.0 < 0 {
            s.push('-');
        }
        for (i, c) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                s.push(',');
            }
            s.push(c);
        }
        s.push('.');
        s.push_str(&format!("{:02}", n % 100));
        f.pad(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("invalid character '{0}'")]
    InvalidChar(char),
    #[error("input contains more than one decimal point")]
    MultiplePoints,
    #[error("amount is out of range")]
    OutOfRange,
}

impl std::str::FromStr for Amount {
    type Err = ParseError;

    /// Parses a human-readable quantity in whole units, which may carry a
    /// sign, comma thousands separators and any number of decimal places.
    /// Decimal places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits = rest.replace(',', "");
        let (int, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        if frac.contains('.') {
            return Err(ParseError::MultiplePoints);
        }
        if int.is_empty() && frac.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(c) = int.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidChar(c));
        }

        let int = match int.is_empty() {
            true => 0,
            false => int.parse::<i64>().map_err(|_| ParseError::OutOfRange)?,
        };
        let frac = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'));
        let hundredths = int
            .checked_mul(100)
            .and_then(|x| x.checked_add(frac))
            .ok_or(ParseError::OutOfRange)?;
        Ok(Self(if negative { -hundredths } else { hundredths }))
    }
}

impl TryFrom<&str> for Amount {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl<'de> serde::Deserialize<'de> for Amount {
    /// Accepts JSON integers and floats (whole units) as well as strings in
    /// the format accepted by [`Amount::from_str`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Amount;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Amount, E> {
                v.checked_mul(100)
                    .map(Amount)
                    .ok_or_else(|| E::custom(ParseError::OutOfRange))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Amount, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .map(Amount)
                    .ok_or_else(|| E::custom(ParseError::OutOfRange))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Amount, E> {
                Amount::from_units(v).ok_or_else(|| E::custom(ParseError::OutOfRange))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Amount, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Amount(0), "0.00")]
    #[case(Amount(10), "0.10")]
    #[case(Amount(-123), "-1.23")]
    #[case(Amount(100000), "1,000.00")]
    #[case(Amount(123456789), "1,234,567.89")]
    #[case(Amount(-123456789), "-1,234,567.89")]
    #[case(Amount(i64::MIN), "-92,233,720,368,547,758.08")]
    fn test_to_string(#[case] amount: Amount, #[case] want: &str) {
        let got = amount.to_string();
        assert_eq!(got, want);
        assert_eq!(amount.charlen(), got.len());
    }

    #[rstest]
    #[case(Amount(150), Amount(-200), Amount(-50))]
    #[case(Amount(i64::MAX - 1), Amount(5), Amount(i64::MAX))]
    #[case(Amount(i64::MIN + 1), Amount(-5), Amount(i64::MIN))]
    fn test_add_assign(#[case] mut a: Amount, #[case] b: Amount, #[case] want: Amount) {
        a += b;
        assert_eq!(a, want);
    }

    #[test]
    fn test_abs_of_min() {
        assert_eq!(Amount(i64::MIN).abs(), Amount(i64::MAX));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:>8}", Amount(150)), "    1.50");
    }

    #[rstest]
    #[case("0", Amount(0))]
    #[case("-0", Amount(0))]
    #[case(".5", Amount(50))]
    #[case("1", Amount(100))]
    #[case("+1.", Amount(100))]
    #[case("-.1", Amount(-10))]
    #[case("1,234.56", Amount(123456))]
    #[case("  1234.5678 ", Amount(123456))]
    fn test_from_str(#[case] s: &str, #[case] want: Amount) {
        assert_eq!(s.parse::<Amount>().unwrap(), want)
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("-", ParseError::Empty)]
    #[case(".", ParseError::Empty)]
    #[case("1.2.3", ParseError::MultiplePoints)]
    #[case("+-1", ParseError::InvalidChar('-'))]
    #[case("12a", ParseError::InvalidChar('a'))]
    #[case("99999999999999999999", ParseError::OutOfRange)]
    fn test_from_str_failing(#[case] s: &str, #[case] want: ParseError) {
        assert_eq!(s.parse::<Amount>().unwrap_err(), want)
    }

    #[rstest]
    #[case("100", Amount(10000))]
    #[case("-50", Amount(-5000))]
    #[case("1234.56", Amount(123456))]
    #[case("0.1", Amount(10))]
    #[case(r#""1,234.56""#, Amount(123456))]
    fn test_deserialize(#[case] json: &str, #[case] want: Amount) {
        assert_eq!(serde_json::from_str::<Amount>(json).unwrap(), want)
    }

    #[rstest]
    #[case("null")]
    #[case("true")]
    #[case(r#""abc""#)]
    #[case("[]")]
    fn test_deserialize_failing(#[case] json: &str) {
        assert!(serde_json::from_str::<Amount>(json).is_err())
    }
}
