pub use crate::schema::goals;
use crate::{date::all_time, essentials::*, stats::Totals, Amount};

use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Goal {
    pub id: i64,
    pub user: String,
    pub name: String,
    #[diesel(deserialize_as = crate::db::Decimal)]
    pub target: Decimal,
}

impl Goal {
    pub fn target(&self, currency: Currency) -> Amount {
        Amount(self.target, currency)
    }

    pub fn find(conn: &mut Conn, id: i64) -> Result<Self> {
        goals::table
            .find(id)
            .select(Goal::as_select())
            .first(conn)
            .map_err(|e| Error::from_diesel_error(e, "Goal", None))
    }

    pub fn find_by_name(conn: &mut Conn, user: &str, name: &str) -> Result<Self> {
        goals::table
            .filter(goals::user.eq(user))
            .filter(goals::name.eq(name))
            .select(Goal::as_select())
            .first(conn)
            .map_err(|e| Error::from_diesel_error(e, "Goal", Some("name")))
    }

    pub fn delete(&mut self, conn: &mut Conn) -> Result<()> {
        log::debug!("Deleting goal {}", self.id);
        diesel::delete(&*self).execute(conn)?;

        Ok(())
    }

    /// Progress of the goal against everything the user saved so far
    pub fn progress(&self, conn: &mut Conn) -> Result<Progress> {
        let totals = Totals::for_user(conn, &self.user, all_time())?;

        Ok(Progress {
            saved: totals.saving,
            target: self.target,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub saved: Decimal,
    pub target: Decimal,
}

impl Progress {
    pub fn remaining(&self) -> Decimal {
        (self.target - self.saved).max(Decimal::ZERO)
    }

    /// Completion in percent, between 0 and 100
    pub fn percent(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return Decimal::from(100);
        }
        (self.saved * Decimal::from(100) / self.target)
            .round_dp(1)
            .clamp(Decimal::ZERO, Decimal::from(100))
    }

    pub fn is_reached(&self) -> bool {
        self.saved >= self.target
    }
}

fn validate(name: Option<&str>, target: Option<Decimal>) -> Result<()> {
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(Error::Invalid("goal.name should not be empty".to_owned()));
        }
    }
    if let Some(target) = target {
        if db::Decimal::stored(target) <= Decimal::ZERO {
            return Err(Error::Invalid(format!(
                "goal.target should be greater than 0, got {}",
                target
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = goals)]
pub struct NewGoal<'a> {
    pub user: &'a str,
    pub name: &'a str,
    #[diesel(serialize_as = crate::db::Decimal)]
    pub target: Decimal,
}

impl<'a> NewGoal<'a> {
    pub fn new(user: &'a str, name: &'a str, target: Decimal) -> Self {
        Self { user, name, target }
    }
}

impl NewGoal<'_> {
    pub fn save(self, conn: &mut Conn) -> Result<Goal> {
        if self.user.trim().is_empty() {
            return Err(Error::Invalid("goal.user should not be empty".to_owned()));
        }
        validate(Some(self.name), Some(self.target))?;

        let goal = diesel::insert_into(goals::table)
            .values(Self {
                name: self.name.trim(),
                ..self
            })
            .returning(Goal::as_returning())
            .get_result(conn)?;
        log::debug!("Created goal {:?}", goal);

        Ok(goal)
    }
}

#[derive(Default, Clone, AsChangeset)]
#[diesel(table_name = goals)]
pub struct ChangeGoal<'a> {
    pub name: Option<&'a str>,
    #[diesel(serialize_as = crate::db::Decimal)]
    pub target: Option<Decimal>,
}

impl ChangeGoal<'_> {
    pub fn save(self, conn: &mut Conn, goal: &Goal) -> Result<()> {
        validate(self.name, self.target)?;

        let updated = diesel::update(goal)
            .set(ChangeGoal {
                name: self.name.map(str::trim),
                ..self
            })
            .execute(conn)?;
        if updated == 0 {
            return Err(Error::ModelNotFound("Goal"));
        }
        log::debug!("Updated goal {}", goal.id);

        Ok(())
    }

    pub fn apply(self, conn: &mut Conn, goal: &mut Goal) -> Result<()> {
        self.clone().save(conn, goal)?;

        if let Some(value) = self.name {
            goal.name = value.trim().to_string();
        }
        if let Some(value) = self.target {
            goal.target = db::Decimal::stored(value);
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct QueryGoal<'a> {
    pub user: Option<&'a str>,
    pub count: Option<i64>,
}

impl QueryGoal<'_> {
    pub fn run(&self, conn: &mut Conn) -> Result<Vec<Goal>> {
        let Some(user) = self.user else {
            return Err(Error::Invalid("Missing user".to_owned()));
        };

        let mut query = goals::table
            .into_boxed()
            .filter(goals::user.eq(user))
            .order_by(goals::id.asc());

        if let Some(count) = self.count {
            query = query.limit(count);
        }

        Ok(query.select(Goal::as_select()).load(conn)?)
    }
}

pub(crate) fn delete_by_user(conn: &mut Conn, user: &str) -> Result<usize> {
    Ok(diesel::delete(goals::table)
        .filter(goals::user.eq(user))
        .execute(conn)?)
}
