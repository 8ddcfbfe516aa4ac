use anyhow::Result;

use meowlet::{category, prelude::*};

use crate::cli::category::*;

use tabled::builder::Builder as TableBuilder;

pub fn run(command: &Command) -> Result<()> {
    match &command {
        Command::List(args) => list(args),
    }
}

fn list(args: &List) -> Result<()> {
    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => Kind::ALL.to_vec(),
    };

    let mut builder = TableBuilder::new();
    push_record!(builder, "kind", "category");
    for kind in kinds {
        for name in category::presets(kind) {
            push_record!(builder, kind, *name);
        }
    }

    println!("{}", builder.build());
    Ok(())
}
