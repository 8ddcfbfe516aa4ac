//! Preset categories offered for each kind of record
//!
//! Records are not restricted to these names, any non-empty category is accepted.

use crate::record::Kind;

/// Category used when none is given
pub const DEFAULT: &str = "Other";

const INCOME: &[&str] = &["Salary", "Bonus", "Gift", "Investment", DEFAULT];

const EXPENSE: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Health",
    "Entertainment",
    "Pets",
    DEFAULT,
];

const SAVING: &[&str] = &["Emergency fund", "Travel", "Education", "Retirement", DEFAULT];

pub fn presets(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Income => INCOME,
        Kind::Expense => EXPENSE,
        Kind::Saving => SAVING,
    }
}

pub fn is_preset(kind: Kind, name: &str) -> bool {
    presets(kind)
        .iter()
        .any(|preset| preset.eq_ignore_ascii_case(name.trim()))
}

/// Preset spelling of a category name, or the trimmed name itself
pub fn normalize(kind: Kind, name: &str) -> &str {
    let name = name.trim();
    presets(kind)
        .iter()
        .find(|preset| preset.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or(name)
}
