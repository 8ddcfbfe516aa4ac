#[macro_use]
mod common;
use common::{assert_in_order, prelude::*};

fn setup(env: &Env) -> Result<()> {
    cmd!(env, record create 1000 Salary "-k" income "-w" bank "--date" "2024-08-01").success();
    cmd!(env, record create 300 Rent "--category" Bills "-w" bank "--date" "2024-08-02")
        .success();
    cmd!(env, record create 100 Groceries "--category" Food "--date" "2024-08-05").success();
    cmd!(env, record create 50 Kibble "--category" Pets "--date" "2024-09-01").success();
    cmd!(env, record create 250 "Piggy bank" "-k" saving "-w" bank "--date" "2024-09-03")
        .success();

    Ok(())
}

#[test]
fn empty() -> Result<()> {
    let env = Env::with_user("Alice")?;

    cmd!(env, report).failure().stderr(str::contains("Usage:"));

    cmd!(env, report summary)
        .success()
        .stdout(str::contains("Nothing recorded yet"));

    cmd!(env, report categories).success().stdout(str::is_empty());
    cmd!(env, report monthly).success().stdout(str::is_empty());

    Ok(())
}

#[test]
fn summary() -> Result<()> {
    let env = Env::with_user("Alice")?;
    setup(&env)?;
    cmd!(env, goal create Holidays 1000).success();

    cmd!(env, report summary)
        .success()
        .stdout(str::contains("Income"))
        .stdout(str::contains("Expense"))
        .stdout(str::contains("Saving"))
        .stdout(str::contains("Balance:"))
        .stdout(str::contains("Great saving habits"))
        .stdout(str::contains("Warning!").not())
        .stdout(str::contains("Goal Holidays: 25%"));

    cmd!(env, report summary "--month" "2024-09")
        .success()
        .stdout(str::contains("Warning! 🙀 Spending more than you earn"));

    cmd!(env, report summary "-U" Bob)
        .success()
        .stdout(str::contains("Nothing recorded yet"))
        .stdout(str::contains("Holidays").not());

    Ok(())
}

#[test]
fn wallets() -> Result<()> {
    let env = Env::with_user("Alice")?;
    setup(&env)?;

    let stdout = cmd!(env, report wallets).success().stdout_str();
    assert_in_order(&stdout, &["wallet", "Cash", "Bank", "Total:"]);
    assert!(!stdout.contains("Credit"));

    Ok(())
}

#[test]
fn categories() -> Result<()> {
    let env = Env::with_user("Alice")?;
    setup(&env)?;

    let stdout = cmd!(env, report categories).success().stdout_str();
    assert_in_order(&stdout, &["Bills", "Food", "Pets", "Total Expense"]);
    assert!(stdout.contains("█"));
    assert!(!stdout.contains("Salary"));

    cmd!(env, report categories "-k" income)
        .success()
        .stdout(str::contains("Other"))
        .stdout(str::contains("Bills").not());

    cmd!(env, report categories "--month" "2024-09")
        .success()
        .stdout(str::contains("Pets"))
        .stdout(str::contains("Bills").not());

    Ok(())
}

#[test]
fn monthly() -> Result<()> {
    let env = Env::with_user("Alice")?;
    setup(&env)?;

    let stdout = cmd!(env, report monthly).success().stdout_str();
    assert_in_order(&stdout, &["2024-08", "2024-09"]);

    cmd!(env, report monthly "--year" 2024 "--from" "2024-01-01")
        .failure()
        .stderr(str::contains("cannot be used with"));

    cmd!(env, report monthly "--from" "2024-09-01")
        .success()
        .stdout(str::contains("2024-09"))
        .stdout(str::contains("2024-08").not());

    Ok(())
}

#[test]
fn out_of_range_periods() -> Result<()> {
    let env = Env::with_user("Alice")?;
    setup(&env)?;

    cmd!(env, report monthly "--year" 262142)
        .failure()
        .stderr(str::contains("Invalid month"));

    cmd!(env, record list "--to" "+262142-12-31")
        .failure()
        .stderr(str::contains("out of range"));

    Ok(())
}
