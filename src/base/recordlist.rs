use crate::base;

/// Records sorted by date. Records sharing a date keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordlist(Vec<base::Record>);

impl Recordlist {
    fn from_vec(mut inner: Vec<base::Record>) -> Self {
        inner.sort_by_key(base::Record::date);
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    /// Returns the distinct names of the given dimension in order of first
    /// appearance. Missing names take their label from `missing`; without a
    /// label they are reported once as `None`.
    pub fn names<'a>(
        &'a self,
        dim: base::Dimension,
        missing: &'a base::MissingNames,
    ) -> Vec<Option<&'a str>> {
        let mut seen = std::collections::HashSet::new();
        self.iter()
            .map(|r| missing.resolve(r, dim))
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl FromIterator<base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Recordlist {
    type Err = ParseError;

    /// Parses one JSON record per line. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
