use crate::base;

/// A record field naming an entity that selections can filter on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Dimension {
    Client,
    Product,
    /// Grouping entity such as an insurer or agreement.
    Entity,
}

impl Dimension {
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Labels standing in for a record's missing name, per dimension. The label
/// is what the picker lists and what selections match against. A dimension
/// without a label leaves missing names missing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MissingNames {
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub entity: Option<String>,
}

impl MissingNames {
    pub const NONE: Self = Self {
        client: None,
        product: None,
        entity: None,
    };

    pub fn get(&self, dim: Dimension) -> Option<&str> {
        match dim {
            Dimension::Client => self.client.as_deref(),
            Dimension::Product => self.product.as_deref(),
            Dimension::Entity => self.entity.as_deref(),
        }
    }

    /// Returns the record's name in `dim`, or the label if it has none.
    pub fn resolve<'a>(&'a self, r: &'a base::Record, dim: Dimension) -> Option<&'a str> {
        r.name(dim).or_else(|| self.get(dim))
    }
}

impl Default for MissingNames {
    fn default() -> Self {
        Self {
            client: Some("Desconocido".to_string()),
            product: None,
            entity: Some("Particular".to_string()),
        }
    }
}

/// Which selection set a picker or toggle operates on.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Include,
    Exclude,
}
