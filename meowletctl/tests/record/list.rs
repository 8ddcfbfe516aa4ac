use crate::common::{assert_in_order, prelude::*};

#[test]
fn empty() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;

    cmd!(env, record list).success().stdout(str::is_empty());

    Ok(())
}

#[test]
fn all() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    let stdout = cmd!(env, record list).success().stdout_str();
    assert_in_order(&stdout, &["Rainy day", "Cat food", "Bread", "August salary"]);

    Ok(())
}

#[test]
fn other_users_do_not_see_records() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record list "-U" Bob).success().stdout(str::is_empty());

    cmd!(env, record create 5 Milk "-U" Bob).success();

    cmd!(env, record list "-U" Bob)
        .success()
        .stdout(str::contains("Milk"))
        .stdout(str::contains("Bread").not());

    cmd!(env, record list)
        .success()
        .stdout(str::contains("Milk").not())
        .stdout(str::contains("Bread"));

    Ok(())
}

#[test]
fn sort() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    let stdout = cmd!(env, record list "--sort" date).success().stdout_str();
    assert_in_order(&stdout, &["August salary", "Bread", "Cat food", "Rainy day"]);

    let stdout = cmd!(env, record list "--sort" "amount.desc")
        .success()
        .stdout_str();
    assert_in_order(&stdout, &["August salary", "Rainy day", "Cat food", "Bread"]);

    Ok(())
}

#[test]
fn filters() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record list "-k" expense)
        .success()
        .stdout(str::contains("Bread"))
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("August salary").not())
        .stdout(str::contains("Rainy day").not());

    cmd!(env, record list "-w" bank)
        .success()
        .stdout(str::contains("August salary"))
        .stdout(str::contains("Rainy day"))
        .stdout(str::contains("Bread").not());

    cmd!(env, record list "--category" Pets)
        .success()
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("Bread").not());

    cmd!(env, record list "--description" food)
        .success()
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("Bread").not());

    cmd!(env, record list "--greater-than" 40 "--less-than" 500)
        .success()
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("Rainy day"))
        .stdout(str::contains("Bread").not())
        .stdout(str::contains("August salary").not());

    cmd!(env, record list "-c" 1)
        .success()
        .stdout(str::contains("Rainy day"))
        .stdout(str::contains("Cat food").not());

    Ok(())
}

#[test]
fn period_bounds_are_inclusive() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record list "--from" "2024-08-03" "--to" "2024-08-10")
        .success()
        .stdout(str::contains("Bread"))
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("August salary").not())
        .stdout(str::contains("Rainy day").not());

    cmd!(env, record list "--month" "2024-09")
        .success()
        .stdout(str::contains("Rainy day"))
        .stdout(str::contains("Bread").not());

    cmd!(env, record list "--year" 2023).success().stdout(str::is_empty());

    cmd!(env, record list "--year" 2024 "--month" "2024-08")
        .failure()
        .stderr(str::contains("cannot be used with"));

    Ok(())
}

#[test]
fn update() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record list "-k" expense update "--category" Shopping)
        .success()
        .stdout(str::is_empty());

    cmd!(env, record list "--category" Shopping)
        .success()
        .stdout(str::contains("Bread"))
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("August salary").not());

    Ok(())
}

#[test]
fn delete() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record list "-k" expense delete)
        .failure()
        .stderr(str::contains("requires confirmation"));

    raw_cmd!(env, record list "-k" expense delete "--confirm")
        .write_stdin("yes")
        .assert()
        .success();

    cmd!(env, record list)
        .success()
        .stdout(str::contains("Bread").not())
        .stdout(str::contains("Cat food").not())
        .stdout(str::contains("August salary"))
        .stdout(str::contains("Rainy day"));

    Ok(())
}
