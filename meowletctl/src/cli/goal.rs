use meowlet::Decimal;

use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List saving goals
    List(List),
    /// Show a goal and its progress
    Show(Show),
    /// Create a saving goal
    Create(Create),
    /// Update a goal
    Update(Update),
    /// Delete a goal
    Delete(Delete),
}

#[derive(Args, Clone, Debug)]
pub struct List {
    /// Maximum number of goals to show
    #[arg(short = 'c', long)]
    pub count: Option<i64>,
}

#[derive(Args, Clone, Debug)]
pub struct Show {
    /// Id of the goal
    id: u32,
}

impl Show {
    pub fn id(&self) -> i64 {
        self.id as i64
    }
}

#[derive(Args, Clone, Debug)]
pub struct Create {
    /// Name of the new goal
    pub name: String,

    /// Amount to save
    pub target: Decimal,
}

#[derive(Args, Clone, Debug)]
pub struct Update {
    /// Id of the goal
    id: u32,

    /// Rename the goal
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Change the amount to save
    #[arg(long, value_name = "AMOUNT")]
    pub target: Option<Decimal>,
}

impl Update {
    pub fn id(&self) -> i64 {
        self.id as i64
    }
}

#[derive(Args, Clone, Debug)]
pub struct Delete {
    /// Id of the goal
    id: u32,

    /// Confirm deletion
    #[arg(long)]
    pub confirm: bool,
}

impl Delete {
    pub fn id(&self) -> i64 {
        self.id as i64
    }
}
