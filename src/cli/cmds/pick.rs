use crate::base;
use crate::cli;

/// List names of a dimension to include or exclude
///
/// Names come from the records, with the configured label standing in for
/// missing names. Names active in the chosen tab are listed first.
#[derive(clap::Parser)]
pub struct Pick {
    /// One of: client, product, entity
    dimension: base::Dimension,

    /// Only list names containing this text, ignoring case
    #[arg(default_value = "")]
    search: String,

    /// Selection set that marks names as active
    #[arg(long, default_value_t = base::Tab::Include)]
    tab: base::Tab,
}

impl Pick {
    pub fn run(
        &self,
        rl: &base::Recordlist,
        sels: &base::Selections,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let picker = base::Picker {
            search: &self.search,
            tab: self.tab,
            cap: config.picker_cap,
        };
        let names = rl.names(self.dimension, &config.missing_names);
        let candidates = picker.pick(names, sels.get(self.dimension));
        tracing::debug!(
            dimension = %self.dimension,
            search = self.search.as_str(),
            shown = candidates.len(),
            "picked candidates"
        );
        Ok(cli::Output::Listing(base::Listing::new(
            config.charset(),
            self.tab,
            &candidates,
        )))
    }
}
