//! Per-day attendance record storage.
//!
//! One row per employee per date, upserted in place as tracking actions
//! land during the day. Dates are stored ISO-formatted so the month
//! selection can lean on SQLite's `strftime`.

use crate::db::db::Db;
use crate::libs::record::TimeRecord;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_TIME_RECORDS: &str = "CREATE TABLE IF NOT EXISTS time_records (
    id INTEGER PRIMARY KEY,
    employee_id INTEGER NOT NULL,
    date DATE NOT NULL,
    time_in TEXT,
    time_out TEXT,
    break_in TEXT,
    break_out TEXT,
    status TEXT,
    UNIQUE(employee_id, date)
);";
const UPSERT_RECORD: &str = "INSERT INTO time_records
    (employee_id, date, time_in, time_out, break_in, break_out, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(employee_id, date) DO UPDATE SET
        time_in = excluded.time_in,
        time_out = excluded.time_out,
        break_in = excluded.break_in,
        break_out = excluded.break_out,
        status = excluded.status";
const SELECT_FIELDS: &str =
    "SELECT employee_id, date, time_in, time_out, break_in, break_out, status FROM time_records";
const SELECT_ONE: &str = "SELECT employee_id, date, time_in, time_out, break_in, break_out, status
    FROM time_records WHERE employee_id = ?1 AND date = ?2";
const DELETE_FOR_EMPLOYEE: &str = "DELETE FROM time_records WHERE employee_id = ?1";

pub struct TimeRecords {
    conn: Connection,
}

impl TimeRecords {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TIME_RECORDS, [])?;
        Ok(TimeRecords { conn: db.conn })
    }

    pub fn upsert(&mut self, record: &TimeRecord) -> Result<()> {
        self.conn.execute(
            UPSERT_RECORD,
            params![
                record.employee_id,
                record.date,
                record.time_in,
                record.time_out,
                record.break_in,
                record.break_out,
                record.status.map(|s| s.as_str()),
            ],
        )?;
        Ok(())
    }

    pub fn fetch(&mut self, employee_id: i64, date: NaiveDate) -> Result<Option<TimeRecord>> {
        let record = self
            .conn
            .query_row(SELECT_ONE, params![employee_id, date], row_to_record)
            .optional()?;
        Ok(record)
    }

    /// Records for one employee inside an inclusive date range, newest
    /// first.
    pub fn fetch_range(
        &mut self,
        employee_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TimeRecord>> {
        let query = format!(
            "{} WHERE employee_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date DESC",
            SELECT_FIELDS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let record_iter = stmt.query_map(params![employee_id, from, to], row_to_record)?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Records for one employee in the calendar month containing `date`,
    /// newest first.
    pub fn fetch_month(&mut self, employee_id: i64, date: NaiveDate) -> Result<Vec<TimeRecord>> {
        let query = format!(
            "{} WHERE employee_id = ?1 AND strftime('%Y-%m', date) = strftime('%Y-%m', ?2) ORDER BY date DESC",
            SELECT_FIELDS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let record_iter = stmt.query_map(params![employee_id, date], row_to_record)?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// All employees' records for one date, keyed for roster assembly.
    pub fn fetch_day(&mut self, date: NaiveDate) -> Result<Vec<TimeRecord>> {
        let query = format!("{} WHERE date = ?1 ORDER BY employee_id", SELECT_FIELDS);
        let mut stmt = self.conn.prepare(&query)?;
        let record_iter = stmt.query_map(params![date], row_to_record)?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Drops an employee's history, used before reseeding.
    pub fn clear_for(&mut self, employee_id: i64) -> Result<()> {
        self.conn.execute(DELETE_FOR_EMPLOYEE, params![employee_id])?;
        Ok(())
    }
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<TimeRecord> {
    Ok(TimeRecord {
        employee_id: row.get(0)?,
        date: row.get(1)?,
        time_in: row.get(2)?,
        time_out: row.get(3)?,
        break_in: row.get(4)?,
        break_out: row.get(5)?,
        status: row
            .get::<_, Option<String>>(6)?
            .and_then(|s| s.parse().ok()),
    })
}
