//! Users only exist through the name carried by their records and goals

use crate::{
    essentials::*,
    schema::{goals, records},
};

use std::collections::BTreeSet;

use diesel::prelude::*;

/// Every user name found in the database, sorted
pub fn all(conn: &mut Conn) -> Result<Vec<String>> {
    let mut users = records::table
        .select(records::user)
        .distinct()
        .load::<String>(conn)?
        .into_iter()
        .collect::<BTreeSet<_>>();

    users.extend(goals::table.select(goals::user).distinct().load::<String>(conn)?);

    Ok(users.into_iter().collect())
}

/// Remove the records and goals of a user
///
/// Returns the number of deleted records and goals
pub fn delete(conn: &mut Conn, user: &str) -> Result<(usize, usize)> {
    let deleted = conn.transaction(|conn| {
        Result::Ok((
            crate::record::delete_by_user(conn, user)?,
            crate::goal::delete_by_user(conn, user)?,
        ))
    })?;
    log::info!(
        "Deleted {} records and {} goals of {}",
        deleted.0,
        deleted.1,
        user
    );

    Ok(deleted)
}
