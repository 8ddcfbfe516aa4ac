use crate::common::prelude::*;

#[test]
fn required_arguments() -> Result<()> {
    let env = crate::Env::new()?;

    cmd!(env, record create)
        .failure()
        .stderr(str::contains("  <AMOUNT>"))
        .stderr(str::contains("  <DESCRIPTION>"));

    cmd!(env, record create 10)
        .failure()
        .stderr(str::contains("  <AMOUNT>").not())
        .stderr(str::contains("  <DESCRIPTION>"));

    cmd!(env, record create 10 Bread)
        .failure()
        .stderr(str::contains("User not provided"));

    cmd!(env, record create 10 Bread "-U" Alice)
        .success()
        .stdout(str::is_empty());

    Ok(())
}

#[test]
fn defaults() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;

    cmd!(env, record create 10 Bread).success();

    cmd!(env, record show 1)
        .success()
        .stdout(str::contains("Bread"))
        .stdout(str::contains("Expense"))
        .stdout(str::contains("Cash"))
        .stdout(str::contains("Other"));

    Ok(())
}

#[test]
fn invalid() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;

    cmd!(env, record create 0 Bread)
        .failure()
        .stderr(str::contains("Invalid"));

    cmd!(env, record create 10 Bread "-k" gift)
        .failure()
        .stderr(str::contains("invalid value 'gift'"));

    cmd!(env, record create 10 Bread "--category" " ")
        .failure()
        .stderr(str::contains("Invalid"));

    cmd!(env, record list).success().stdout(str::is_empty());

    Ok(())
}

#[test]
fn preset_category_is_normalized() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;

    cmd!(env, record create 10 Bread "--category" FOOD).success();

    cmd!(env, record list "--category" Food)
        .success()
        .stdout(str::contains("Bread"));

    Ok(())
}

#[test]
fn updated_category_is_normalized() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;

    cmd!(env, record create 10 Bread "--category" food).success();
    cmd!(env, record create 20 Milk "--category" pets).success();
    cmd!(env, record update 2 "--category" food).success();

    let stdout = cmd!(env, record list "--category" Food).success().stdout_str();
    assert!(stdout.contains("Bread"));
    assert!(stdout.contains("Milk"));

    cmd!(env, report categories)
        .success()
        .stdout(str::contains("Food"))
        .stdout(str::contains("food").not());

    Ok(())
}

#[test]
fn date_bounds() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;

    cmd!(env, record create 10 Bread "--date" "+10000-01-01")
        .failure()
        .stderr(str::contains("Invalid"));

    cmd!(env, record create 10 Bread "--date" "9999-12-31").success();
    cmd!(env, record update 1 "--date" "+12024-01-01")
        .failure()
        .stderr(str::contains("Invalid"));

    cmd!(env, report summary)
        .success()
        .stdout(str::contains("Nothing recorded yet").not());

    Ok(())
}
