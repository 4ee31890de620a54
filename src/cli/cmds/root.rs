use anyhow::Context;

use crate::base;
use crate::cli;

/// Sales and billing breakdowns with per-dimension name selections
#[derive(clap::Parser)]
#[command(name = "billdash", color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Pick(cli::cmds::pick::Pick),
    Include(cli::cmds::toggle::Include),
    Exclude(cli::cmds::toggle::Exclude),
    Clear(cli::cmds::clear::Clear),
    Status(cli::cmds::status::Status),
    Breakdown(cli::cmds::breakdown::Breakdown),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let sels = fs.read::<base::Selections>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Selections>().display()
            )
        })?;
        let read_rl = || {
            fs.read::<base::Recordlist>().with_context(|| {
                format!(
                    "failed to read '{}'",
                    fs.path::<base::Recordlist>().display()
                )
            })
        };

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Pick(cmd) => cmd.run(&read_rl()?, &sels, &config),
            Commands::Include(cmd) => cmd.run(sels, fs),
            Commands::Exclude(cmd) => cmd.run(sels, fs),
            Commands::Clear(cmd) => cmd.run(sels, fs),
            Commands::Status(cmd) => cmd.run(&sels),
            Commands::Breakdown(cmd) => cmd.run(&read_rl()?, &sels, &config),
        }
    }
}
