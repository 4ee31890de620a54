use crate::base;
use crate::cli;

/// Show the included and excluded names of every dimension
#[derive(clap::Parser)]
pub struct Status {}

impl Status {
    pub fn run(&self, sels: &base::Selections) -> anyhow::Result<cli::Output> {
        let mut lines = Vec::new();
        for dim in base::Dimension::all() {
            let sel = sels.get(dim);
            for (label, names) in [("included", sel.included()), ("excluded", sel.excluded())] {
                if names.is_empty() {
                    continue;
                }
                let names = names
                    .iter()
                    .map(|name| format!("'{}'", name))
                    .collect::<Vec<_>>();
                lines.push(format!("{} {}: {}", dim, label, names.join(", ")));
            }
        }
        Ok(cli::Output::Str(if lines.is_empty() {
            "No selections.".to_string()
        } else {
            lines.join("\n")
        }))
    }
}
