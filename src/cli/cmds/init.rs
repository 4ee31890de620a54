use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a dashboard in the current directory
///
/// Creates the config file if there is none. Records are read from
/// 'records.jsonl', one JSON object per line.
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing dashboard's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let (config, mut lines) = match (fs.is_repo(), self.reset_config) {
            (false, _) => (
                initial_config(),
                vec![format!("Initialized dashboard in '{}'.", fs.dir().display())],
            ),
            (true, true) => (
                initial_config(),
                vec!["Config reset to defaults.".to_string()],
            ),
            (true, false) => (
                fs.read::<base::Config>()
                    .with_context(|| format!("failed to read '{}'", path.display()))?,
                vec![format!("Dashboard already initialized in '{}'.", fs.dir().display())],
            ),
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), reset = self.reset_config, "wrote config");

        let records = <base::Recordlist as base::fs::Io>::FILENAME;
        lines.push(match fs.read::<base::Recordlist>() {
            Ok(rl) if rl.is_empty() => format!("No records yet. Add them to '{}'.", records),
            Ok(rl) => format!("Found {} records in '{}'.", rl.len(), records),
            Err(e) => {
                tracing::warn!(error = %e, "records unreadable");
                format!("Could not read '{}': {}", records, e)
            }
        });
        Ok(cli::Output::Str(lines.join("\n")))
    }
}
