#[macro_use]
pub mod table_display;

use anyhow::Result;

use meowlet::Decimal;

pub fn confirm() -> Result<bool> {
    println!("Do you really want to do that?");

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim() == "yes")
}

/// Horizontal bar proportional to `value`, `width` characters long at `peak`
pub fn bar(value: Decimal, peak: Decimal, width: usize) -> String {
    if peak <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }

    let mut length = value * Decimal::from(width as u64) / peak;
    length.rescale(0);
    let length = usize::try_from(length.mantissa()).unwrap_or(0).min(width);

    "█".repeat(length.max(1))
}
