use crate::common::prelude::*;

#[test]
fn show() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record show 2)
        .success()
        .stdout(str::contains("Bread"))
        .stdout(str::contains("2024-08-03"))
        .stdout(str::contains("Food"));

    cmd!(env, record show 42)
        .failure()
        .stderr(str::contains("Record not found"));

    cmd!(env, record show 2 "-U" Bob)
        .failure()
        .stderr(str::contains("Record not found"));

    Ok(())
}

#[test]
fn update_changes_only_the_targeted_record() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record update 2 "--description" Baguette "--date" "2024-08-04")
        .success()
        .stdout(str::is_empty());

    cmd!(env, record show 2)
        .success()
        .stdout(str::contains("Baguette"))
        .stdout(str::contains("2024-08-04"));

    cmd!(env, record show 3)
        .success()
        .stdout(str::contains("Cat food"))
        .stdout(str::contains("2024-08-10"));

    cmd!(env, record show 2 update "-k" income "-w" bank)
        .success()
        .stdout(str::is_empty());

    cmd!(env, record list "-k" income)
        .success()
        .stdout(str::contains("Baguette"))
        .stdout(str::contains("Cat food").not());

    cmd!(env, record update 2).success();

    cmd!(env, record update 2 "--amount" 0)
        .failure()
        .stderr(str::contains("Invalid"));

    Ok(())
}

#[test]
fn delete() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record show 2 delete)
        .failure()
        .stderr(str::contains("requires confirmation"));

    raw_cmd!(env, record show 2 delete "--confirm")
        .write_stdin("no")
        .assert()
        .failure()
        .stderr(str::contains("requires confirmation"));

    raw_cmd!(env, record show 2 delete "--confirm")
        .write_stdin("yes")
        .assert()
        .success();

    cmd!(env, record show 2)
        .failure()
        .stderr(str::contains("Record not found"));

    cmd!(env, record list)
        .success()
        .stdout(str::contains("Bread").not())
        .stdout(str::contains("Cat food"));

    Ok(())
}
