use chrono::NaiveDate;

use crate::client::memory::Tables;

use super::{
    db::Repository,
    models::{GenerationType, Usage, UserUsage},
};

impl Repository {
    /// Counters of `user_id` for `day`. A row left over from an earlier day
    /// reads as zero.
    pub fn get_usage(&self, db: &Tables, user_id: i64, day: NaiveDate) -> Usage {
        match db.usages.get(&user_id) {
            Some(row) if row.day == day => row.usage,
            _ => Usage::default(),
        }
    }

    pub fn increment_usage(
        &self,
        db: &mut Tables,
        user_id: i64,
        day: NaiveDate,
        kind: GenerationType,
    ) -> Usage {
        let row = db.usages.entry(user_id).or_insert(UserUsage {
            user_id,
            day,
            usage: Usage::default(),
        });
        if row.day != day {
            row.day = day;
            row.usage = Usage::default();
        }
        row.usage.increment(kind);
        row.usage
    }

    pub fn reset_usage(&self, db: &mut Tables, user_id: i64, day: NaiveDate) -> Usage {
        db.usages.insert(
            user_id,
            UserUsage {
                user_id,
                day,
                usage: Usage::default(),
            },
        );
        Usage::default()
    }
}
