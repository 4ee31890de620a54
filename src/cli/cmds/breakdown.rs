use crate::base;
use crate::cli::output::Output;
use crate::cli::sharedopts;

/// Chart record totals by category
///
/// Only records that fall in the interval, match every field pattern and pass
/// every dimension's selection are counted.
#[derive(clap::Parser)]
pub struct Breakdown {
    #[arg(help = sharedopts::INTERVAL_HELP, long_help = sharedopts::INTERVAL_HELP_LONG)]
    interval: Option<base::Interval>,

    /// Record field to group by
    ///
    /// One of: payment, branch, client, product, entity, seller, type
    #[arg(long, default_value_t = base::Field::PaymentMethod)]
    by: base::Field,

    /// Only count records with a positive amount
    #[arg(long)]
    positive_only: bool,

    #[command(flatten)]
    pattern_opts: sharedopts::PatternOpts,
}

impl Breakdown {
    pub fn run(
        &self,
        rl: &base::Recordlist,
        sels: &base::Selections,
        config: &base::Config,
    ) -> anyhow::Result<Output> {
        let interval = self.interval.unwrap_or(base::Interval::MAX);
        let filter = self
            .pattern_opts
            .fields()
            .into_iter()
            .fold(base::Filter::new(interval, sels), |filter, (field, patterns)| {
                filter.with_patterns(field, &patterns)
            })
            .with_missing_names(&config.missing_names);
        let rl = filter.apply(rl);
        if rl.is_empty() {
            return Ok(Output::Str("No transactions.".to_string()));
        }

        let rule = config.category_rule(self.by, self.positive_only);
        let chart_config = base::barchart::Config {
            charset: config.charset(),
            palette: config.palette.clone(),
            term_width: terminal_size::terminal_size()
                .map(|(w, _)| w.0)
                .unwrap_or_default() as usize,
            series: base::Series::aggregate(&rule, rl.iter()),
        };
        Ok(Output::Breakdown(chart_config))
    }
}
