use crate::{stats::Totals, Decimal};

use std::fmt::{Display, Error, Formatter};

/// Reaction to the totals of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Nothing recorded yet
    Sleepy,
    /// Expenses exceed income
    Worried,
    /// Expenses and savings together exceed income
    Stretched,
    /// Savings reach a fifth of the income
    Proud,
    Happy,
}

/// Share of the income that makes savings worth celebrating, in percent
pub const PROUD_SAVING_RATE: i64 = 20;

impl Mood {
    pub fn from_totals(totals: &Totals) -> Self {
        if totals.is_empty() {
            Mood::Sleepy
        } else if totals.expense > totals.income {
            Mood::Worried
        } else if totals.balance() < Decimal::ZERO {
            Mood::Stretched
        } else if !totals.saving.is_zero()
            && totals.saving * Decimal::from(100) >= totals.income * Decimal::from(PROUD_SAVING_RATE)
        {
            Mood::Proud
        } else {
            Mood::Happy
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Sleepy => "😴",
            Mood::Worried => "🙀",
            Mood::Stretched => "😿",
            Mood::Proud => "😻",
            Mood::Happy => "😺",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Mood::Sleepy => "Nothing recorded yet",
            Mood::Worried => "Spending more than you earn",
            Mood::Stretched => "Savings and expenses exceed your income",
            Mood::Proud => "Great saving habits",
            Mood::Happy => "Everything is under control",
        }
    }

    /// Whether the mood calls for attention
    pub fn is_warning(&self) -> bool {
        matches!(self, Mood::Worried | Mood::Stretched)
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} {}", self.emoji(), self.message())
    }
}
