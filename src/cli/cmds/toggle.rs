use anyhow::Context;

use crate::base;
use crate::cli;

/// Toggle names in a dimension's include set
///
/// While a dimension's include set is non-empty, only records whose name is
/// in it are shown.
#[derive(clap::Parser)]
pub struct Include {
    #[command(flatten)]
    args: ToggleArgs,
}

/// Toggle names in a dimension's exclude set
///
/// Records whose name is excluded are hidden, even if the name is also
/// included.
#[derive(clap::Parser)]
pub struct Exclude {
    #[command(flatten)]
    args: ToggleArgs,
}

#[derive(clap::Args)]
struct ToggleArgs {
    /// One of: client, product, entity
    dimension: base::Dimension,

    /// Names to toggle, matched exactly
    #[arg(required = true)]
    names: Vec<String>,
}

impl Include {
    pub fn run(self, sels: base::Selections, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        self.args.run(base::Tab::Include, sels, fs)
    }
}

impl Exclude {
    pub fn run(self, sels: base::Selections, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        self.args.run(base::Tab::Exclude, sels, fs)
    }
}

impl ToggleArgs {
    fn run(
        self,
        tab: base::Tab,
        mut sels: base::Selections,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let sel = sels.get_mut(self.dimension);
        let lines = self
            .names
            .iter()
            .map(|name| {
                let active = sel.toggle(tab, name);
                tracing::info!(
                    dimension = %self.dimension,
                    %tab,
                    name = name.as_str(),
                    active,
                    "toggled selection"
                );
                let state = match (tab, active) {
                    (base::Tab::Include, true) => "included",
                    (base::Tab::Include, false) => "not included",
                    (base::Tab::Exclude, true) => "excluded",
                    (base::Tab::Exclude, false) => "not excluded",
                };
                format!("{} '{}' {}", self.dimension, name, state)
            })
            .collect::<Vec<_>>();

        fs.write(&sels).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::Selections>().display()
            )
        })?;
        Ok(cli::Output::Str(lines.join("\n")))
    }
}
