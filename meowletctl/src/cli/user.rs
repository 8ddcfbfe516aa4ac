use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List known users
    List {},
    /// Check or set the default user
    Default(DefaultUser),
    /// Delete every record and goal of a user
    Delete(Delete),
}

#[derive(Args, Clone, Debug)]
pub struct DefaultUser {
    /// Reset the default user
    #[arg(short, long)]
    pub reset: bool,
}

#[derive(Args, Clone, Debug)]
pub struct Delete {
    /// Confirm deletion
    #[arg(long)]
    pub confirm: bool,
}
