use crate::common::prelude::*;

#[test]
fn stdout() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    cmd!(env, record export "-k" expense)
        .success()
        .stdout(str::starts_with(
            "id,date,kind,wallet,category,amount,description\n",
        ))
        .stdout(str::contains("3,2024-08-10,Expense,Credit,Pets,40,Cat food\n"))
        .stdout(str::contains("2,2024-08-03,Expense,Cash,Food,12.5,Bread\n"))
        .stdout(str::contains("August salary").not());

    Ok(())
}

#[test]
fn file() -> Result<()> {
    let env = crate::Env::with_user("Alice")?;
    crate::setup(&env)?;

    let output = env.data_dir.child("export.csv");
    raw_cmd!(env, record export "--month" "2024-09")
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(str::is_empty());

    output.assert(str::contains("Rainy day"));
    output.assert(str::contains("Bread").not());

    Ok(())
}
