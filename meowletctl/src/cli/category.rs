use meowlet::record::Kind;

use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List preset categories
    List(List),
}

#[derive(Args, Clone, Debug)]
pub struct List {
    /// Only show the presets of this kind
    #[arg(short = 'k', long)]
    pub kind: Option<Kind>,
}
