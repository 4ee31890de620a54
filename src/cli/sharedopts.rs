use crate::base;
use crate::cli::util;

pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is an ISO 8601 date (yyyy-mm-dd). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively.

The following shorthands are also available:
yyyy-mm-dd = yyyy-mm-dd:yyyy-mm-dd
yyyy-mm = first to last day of the month
yyyy = first to last day of the year";

pub const FULLMATCH_HELP: &str = "Match patterns against the whole value";
pub const FULLMATCH_HELP_LONG: &str = "Match patterns against the whole value

By default, patterns match anywhere in the value, as if surrounded by '*'. With this flag, a pattern must match the entire value.";

/// Wildcard patterns narrowing records by field value. Use commas to separate
/// multiple patterns; a record is kept if its value matches any of them.
/// Records missing the field only match patterns that accept an empty value.
#[derive(clap::Args)]
pub struct PatternOpts {
    /// Wildcard patterns to match branches of interest
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub branches: Vec<String>,

    /// Wildcard patterns to match sellers of interest
    #[arg(long, value_name = "PATTERNS", value_delimiter = ',', default_value = "*")]
    pub seller: Vec<String>,

    /// Wildcard patterns to match invoice types of interest
    #[arg(long = "type", value_name = "PATTERNS", value_delimiter = ',', default_value = "*")]
    pub kind: Vec<String>,

    /// Wildcard patterns to match payment methods of interest
    #[arg(long, value_name = "PATTERNS", value_delimiter = ',', default_value = "*")]
    pub payment: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}

impl PatternOpts {
    /// Returns each filtered field with its patterns, adjusted for
    /// `--fullmatch`.
    pub fn fields(&self) -> [(base::Field, std::borrow::Cow<'_, [String]>); 4] {
        let fullmatch = self.fullmatch;
        [
            (base::Field::Branch, util::preprocess_patterns(&self.branches, fullmatch)),
            (base::Field::Seller, util::preprocess_patterns(&self.seller, fullmatch)),
            (base::Field::Type, util::preprocess_patterns(&self.kind, fullmatch)),
            (base::Field::PaymentMethod, util::preprocess_patterns(&self.payment, fullmatch)),
        ]
    }
}
