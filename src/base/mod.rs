mod aggregate;
mod amount;
pub mod barchart;
mod breakdown;
mod category;
mod charset;
pub mod collate;
mod config;
mod date;
mod dimension;
mod filter;
pub mod fs;
mod interval;
mod palette;
mod picker;
mod record;
mod recordlist;
mod selection;
pub mod util;

pub use aggregate::Aggregate;
pub use amount::Amount;
pub use breakdown::Entry;
pub use breakdown::Series;
pub use category::Canonical;
pub use category::CategoryRule;
pub use category::Field;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use dimension::Dimension;
pub use dimension::MissingNames;
pub use dimension::Tab;
pub use filter::Filter;
pub use fs::Fs;
pub use interval::Interval;
pub use palette::Color;
pub use palette::Palette;
pub use picker::Candidate;
pub use picker::Listing;
pub use picker::Picker;
pub use record::Record;
pub use recordlist::Recordlist;
pub use selection::Selection;
pub use selection::Selections;
