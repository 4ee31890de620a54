use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub picker_cap: usize,
    pub missing_names: base::MissingNames,
    pub unknown_category: String,
    pub canonical_categories: Vec<base::Canonical>,
    pub palette: base::Palette,
    pub positive_only: bool,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker_cap: base::Picker::DEFAULT_CAP,
            missing_names: base::MissingNames::default(),
            unknown_category: "Unknown".to_string(),
            canonical_categories: vec![
                base::Canonical::new("card", "Card"),
                base::Canonical::new("tarjeta", "Card"),
            ],
            palette: base::Palette::default(),
            positive_only: false,
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl Config {
    /// Returns the rule grouping records by `field`. Positive-only mode is on
    /// if either the config or the caller asks for it.
    pub fn category_rule(&self, field: base::Field, positive_only: bool) -> base::CategoryRule<'_> {
        base::CategoryRule {
            field,
            unknown: &self.unknown_category,
            canonical: &self.canonical_categories,
            positive_only: self.positive_only || positive_only,
        }
    }

    pub fn charset(&self) -> base::Charset {
        let mut charset = base::Charset::default();
        if self.use_unicode_symbols {
            charset = charset.with_unicode();
        }
        if self.use_colored_output {
            charset = charset.with_color();
        }
        charset
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
