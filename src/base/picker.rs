use crate::base;

/// Produces the candidate list shown when choosing names to include or
/// exclude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker<'a> {
    /// Case-insensitive substring filter. Empty matches everything.
    pub search: &'a str,
    pub tab: base::Tab,
    /// Maximum number of candidates returned. Further matches are omitted.
    pub cap: usize,
}

/// A name offered by the picker, and whether it is a member of the set the
/// picker's tab operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub active: bool,
}

impl Picker<'_> {
    pub const DEFAULT_CAP: usize = 100;

    /// Returns at most `self.cap` candidates drawn from `names`:
    /// 1. Missing names are dropped.
    /// 1. Names not containing the search term (ignoring case) are dropped.
    /// 1. Active names come first; each group is ordered by
    ///    [`base::collate::compare`]. The sort is stable.
    pub fn pick<'n, I>(&self, names: I, selection: &base::Selection) -> Vec<Candidate<'n>>
    where
        I: IntoIterator<Item = Option<&'n str>>,
    {
        let needle = self.search.to_lowercase();
        let mut candidates = names
            .into_iter()
            .flatten()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|name| Candidate {
                name,
                active: selection.is_active(self.tab, name),
            })
            .collect::<Vec<_>>();
        candidates.sort_by(|a, b| {
            b.active
                .cmp(&a.active)
                .then_with(|| base::collate::compare(a.name, b.name))
        });
        candidates.truncate(self.cap);
        candidates
    }
}

/// Printable picker result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub charset: base::Charset,
    pub tab: base::Tab,
    pub candidates: Vec<(String, bool)>,
}

impl Listing {
    pub fn new(charset: base::Charset, tab: base::Tab, candidates: &[Candidate]) -> Self {
        Self {
            charset,
            tab,
            candidates: candidates
                .iter()
                .map(|c| (c.name.to_string(), c.active))
                .collect(),
        }
    }

    fn marker(&self, active: bool) -> String {
        let marker = match (active, self.tab) {
            (false, _) => return self.charset.pick_inactive.to_string(),
            (true, base::Tab::Include) => self.charset.pick_included,
            (true, base::Tab::Exclude) => self.charset.pick_excluded,
        };
        match (self.charset.color, self.tab) {
            (false, _) => marker.to_string(),
            (true, base::Tab::Include) => colored::Colorize::blue(marker).to_string(),
            (true, base::Tab::Exclude) => colored::Colorize::red(marker).to_string(),
        }
    }
}

impl std::fmt::Display for Listing {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.candidates.is_empty() {
            return writeln!(f, "No matches.");
        }
        for (name, active) in &self.candidates {
            writeln!(f, "{} {}", self.marker(*active), name)?;
        }
        Ok(())
    }
}
