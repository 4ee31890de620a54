use crate::base;

/// Record field used as the grouping key of a breakdown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::Display, strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Field {
    #[default]
    #[strum(to_string = "payment", serialize = "paymentmethod")]
    PaymentMethod,
    Branch,
    Client,
    Product,
    Entity,
    Seller,
    /// Invoice type.
    Type,
}

impl Field {
    pub fn of(self, r: &base::Record) -> Option<&str> {
        match self {
            Field::PaymentMethod => r.payment_method(),
            Field::Branch => r.branch(),
            Field::Client => r.name(base::Dimension::Client),
            Field::Product => r.name(base::Dimension::Product),
            Field::Entity => r.name(base::Dimension::Entity),
            Field::Seller => r.seller(),
            Field::Type => r.kind(),
        }
    }
}

/// Folds every value containing `contains` (ignoring case) into `label`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canonical {
    pub contains: String,
    pub label: String,
}

impl Canonical {
    pub fn new(contains: &str, label: &str) -> Self {
        Self {
            contains: contains.to_string(),
            label: label.to_string(),
        }
    }
}

/// How a record maps to a category, and whether it takes part at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule<'a> {
    pub field: Field,
    /// Label of records whose field is missing, blank or `-`.
    pub unknown: &'a str,
    /// Checked in order; the first match wins.
    pub canonical: &'a [Canonical],
    /// Only records with a strictly positive amount contribute.
    pub positive_only: bool,
}

impl<'a> CategoryRule<'a> {
    pub fn contributes(&self, r: &base::Record) -> bool {
        !self.positive_only || r.amount().is_positive()
    }

    /// Returns the record's category, or `None` if it belongs under the
    /// unknown label.
    pub fn key<'s>(&'s self, r: &'s base::Record) -> Option<&'s str> {
        let raw = self.field.of(r)?.trim();
        if raw.is_empty() || raw == "-" {
            return None;
        }
        let lower = raw.to_lowercase();
        let folded = self
            .canonical
            .iter()
            .find(|c| !c.contains.is_empty() && lower.contains(&c.contains.to_lowercase()));
        Some(match folded {
            Some(c) => c.label.as_str(),
            None => raw,
        })
    }
}
