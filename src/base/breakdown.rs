use crate::base;

/// One category of a breakdown and its total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: base::Amount,
}

/// Category totals ranked by descending value. Categories with equal totals
/// keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    entries: Vec<Entry>,
    total: base::Amount,
    meaningful: bool,
}

impl Series {
    /// Groups contributing records by category and ranks the totals.
    pub fn aggregate<'r, I>(rule: &'r base::CategoryRule<'_>, records: I) -> Self
    where
        I: IntoIterator<Item = &'r base::Record>,
    {
        let mut agg = base::Aggregate::<&str, base::Amount>::default();
        let mut meaningful = false;
        let mut skipped = 0;
        for r in records {
            if !rule.contributes(r) {
                skipped += 1;
                continue;
            }
            let name = match rule.key(r) {
                Some(key) => {
                    meaningful = true;
                    key
                }
                None => rule.unknown,
            };
            agg.add(name, r.amount());
        }

        let total = agg.sum();
        let mut entries = agg
            .into_vec()
            .into_iter()
            .map(|(name, value)| Entry {
                name: name.to_string(),
                value,
            })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| b.value.cmp(&a.value));
        tracing::debug!(
            field = %rule.field,
            categories = entries.len(),
            skipped,
            meaningful,
            "aggregated records"
        );
        Self {
            entries,
            total,
            meaningful,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns false when nothing contributed, or when every contributing
    /// record fell under the unknown label.
    pub fn is_meaningful(&self) -> bool {
        self.meaningful
    }

    pub fn total(&self) -> base::Amount {
        self.total
    }

    /// Pairs every entry with its palette color by rank.
    pub fn colored<'a>(
        &'a self,
        palette: &'a base::Palette,
    ) -> impl Iterator<Item = (&'a Entry, base::Color)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(rank, e)| (e, palette.color(rank)))
    }
}
