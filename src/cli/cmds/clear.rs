use anyhow::Context;

use crate::base;
use crate::cli;

/// Empty both selection sets of the given dimensions
#[derive(clap::Parser)]
pub struct Clear {
    /// Dimensions to reset. All dimensions are reset if none are given
    dimensions: Vec<base::Dimension>,
}

impl Clear {
    pub fn run(self, mut sels: base::Selections, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let msg = if self.dimensions.is_empty() {
            sels.clear_all();
            "Cleared all selections.".to_string()
        } else {
            self.dimensions.iter().for_each(|&dim| sels.clear(dim));
            let names = self
                .dimensions
                .iter()
                .map(|dim| dim.to_string())
                .collect::<Vec<_>>();
            format!("Cleared {} selections.", names.join(", "))
        };
        tracing::info!(dimensions = ?self.dimensions, "cleared selections");

        fs.write(&sels).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::Selections>().display()
            )
        })?;
        Ok(cli::Output::Str(msg))
    }
}
