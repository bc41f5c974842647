//! CLI command handlers, one file per command.

mod compare;
mod completions;
mod run;
mod sites;

pub use compare::run_compare;
pub use completions::run_completions;
pub use run::run_strategy;
pub use sites::run_sites;
