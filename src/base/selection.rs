use std::collections::BTreeSet;

use crate::base;

/// Inclusion and exclusion sets of a single dimension.
///
/// Membership in the two sets is independent: nothing stops a name from being
/// both included and excluded, in which case exclusion wins (see
/// [`Selection::is_visible`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Selection {
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    excluded: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    included: BTreeSet<String>,
}

impl Selection {
    pub fn excluded(&self) -> &BTreeSet<String> {
        &self.excluded
    }

    pub fn included(&self) -> &BTreeSet<String> {
        &self.included
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.included.is_empty()
    }

    /// Whether `name` is a member of the set the given tab operates on.
    pub fn is_active(&self, tab: base::Tab, name: &str) -> bool {
        match tab {
            base::Tab::Include => self.included.contains(name),
            base::Tab::Exclude => self.excluded.contains(name),
        }
    }

    /// Flips membership of `name` in the exclusion set. Returns whether `name`
    /// is excluded afterwards.
    pub fn toggle_exclusion(&mut self, name: &str) -> bool {
        flip(&mut self.excluded, name)
    }

    /// Flips membership of `name` in the inclusion set. Returns whether `name`
    /// is included afterwards.
    pub fn toggle_inclusion(&mut self, name: &str) -> bool {
        flip(&mut self.included, name)
    }

    pub fn toggle(&mut self, tab: base::Tab, name: &str) -> bool {
        match tab {
            base::Tab::Include => self.toggle_inclusion(name),
            base::Tab::Exclude => self.toggle_exclusion(name),
        }
    }

    pub fn clear(&mut self) {
        self.excluded.clear();
        self.included.clear();
    }

    /// Returns whether a record carrying `name` passes this selection:
    /// - Excluded names are hidden, even if also included.
    /// - Otherwise, a non-empty inclusion set restricts visibility to its
    ///   members.
    /// - Otherwise, everything is visible.
    pub fn is_visible(&self, name: &str) -> bool {
        if self.excluded.contains(name) {
            return false;
        }
        self.included.is_empty() || self.included.contains(name)
    }
}

fn flip(set: &mut BTreeSet<String>, name: &str) -> bool {
    if set.remove(name) {
        false
    } else {
        set.insert(name.to_string());
        true
    }
}

/// Selections of every dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selections {
    #[serde(skip_serializing_if = "Selection::is_empty")]
    clients: Selection,
    #[serde(skip_serializing_if = "Selection::is_empty")]
    products: Selection,
    #[serde(skip_serializing_if = "Selection::is_empty")]
    entities: Selection,
}

impl Selections {
    pub fn get(&self, dim: base::Dimension) -> &Selection {
        match dim {
            base::Dimension::Client => &self.clients,
            base::Dimension::Product => &self.products,
            base::Dimension::Entity => &self.entities,
        }
    }

    pub fn get_mut(&mut self, dim: base::Dimension) -> &mut Selection {
        match dim {
            base::Dimension::Client => &mut self.clients,
            base::Dimension::Product => &mut self.products,
            base::Dimension::Entity => &mut self.entities,
        }
    }

    pub fn clear(&mut self, dim: base::Dimension) {
        self.get_mut(dim).clear();
    }

    pub fn clear_all(&mut self) {
        base::Dimension::all().for_each(|dim| self.clear(dim));
    }

    /// Returns whether `r` passes the selection of every dimension. A missing
    /// name is matched as its label in `missing`, or as the empty name if
    /// the dimension has no label.
    pub fn is_visible(&self, r: &base::Record, missing: &base::MissingNames) -> bool {
        base::Dimension::all().all(|dim| {
            let name = missing.resolve(r, dim).unwrap_or_default();
            self.get(dim).is_visible(name)
        })
    }
}

impl std::fmt::Display for Selections {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Selections {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Selections {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
