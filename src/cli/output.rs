use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Listing(base::Listing),
    Breakdown(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Listing(listing) => write!(f, "{}", listing),
            Output::Breakdown(config) => {
                if config.series.is_empty() {
                    writeln!(f, "No transactions.")
                } else if !config.series.is_meaningful() {
                    writeln!(f, "No meaningful data.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
        }
    }
}
