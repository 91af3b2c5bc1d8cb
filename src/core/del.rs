use crate::auth::Session;
use crate::db::log::ttlog;
use crate::db::queries::delete_timesheet;
use crate::errors::AppResult;
use crate::models::record::TimesheetRecord;
use rusqlite::Connection;

pub struct DelLogic;

impl DelLogic {
    pub fn delete(conn: &Connection, session: &Session, id: i64) -> AppResult<TimesheetRecord> {
        let removed = delete_timesheet(conn, id)?;
        ttlog(
            conn,
            "del",
            &format!("timesheet #{id}"),
            &format!(
                "{} on {} ({}-{}) removed by {}",
                removed.worker_id,
                removed.date_str(),
                removed.clock_in,
                removed.clock_out,
                session.user_id
            ),
        )?;
        Ok(removed)
    }
}
