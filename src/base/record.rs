use crate::base;

/// A sale or invoice line. Every field other than `date` may be missing. A
/// missing or `null` amount reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    date: base::Date,
    #[serde(default, deserialize_with = "lenient_name")]
    client: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    product: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    entity: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    branch: Option<String>,
    #[serde(default, alias = "paymentType", deserialize_with = "lenient_name")]
    payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    seller_name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_name")]
    kind: Option<String>,
    #[serde(
        default,
        alias = "totalAmount",
        alias = "netAmount",
        deserialize_with = "lenient_amount"
    )]
    amount: base::Amount,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<base::Amount, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let amount = <Option<base::Amount> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(amount.unwrap_or_default())
}

/// Reads a name field from legacy data. Strings are kept, other scalars are
/// converted to their string form, and anything else counts as missing.
fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match <Value as serde::Deserialize>::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

impl Record {
    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn amount(&self) -> base::Amount {
        self.amount
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn seller(&self) -> Option<&str> {
        self.seller_name.as_deref()
    }

    /// Returns the invoice type, e.g. `FA`, `NC`.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns the record's name in the given dimension.
    pub fn name(&self, dim: base::Dimension) -> Option<&str> {
        match dim {
            base::Dimension::Client => self.client.as_deref(),
            base::Dimension::Product => self.product.as_deref(),
            base::Dimension::Entity => self.entity.as_deref(),
        }
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
