//! Employee roster storage.
//!
//! Employees carry the cohort discriminator directly: a stored
//! `expected_start_time` marks field staff with a flexible schedule, its
//! absence marks warehouse staff on the fixed 08:00-17:00 shift.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    username TEXT NOT NULL UNIQUE,
    expected_start_time TEXT
);";
const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (first_name, last_name, username, expected_start_time) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ALL: &str =
    "SELECT id, first_name, last_name, username, expected_start_time FROM employees ORDER BY id";
const SELECT_BY_USERNAME: &str =
    "SELECT id, first_name, last_name, username, expected_start_time FROM employees WHERE username = ?1";
const SELECT_BY_ID: &str =
    "SELECT id, first_name, last_name, username, expected_start_time FROM employees WHERE id = ?1";
const DELETE_BY_USERNAME: &str = "DELETE FROM employees WHERE username = ?1";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Present for field staff; selects the flexible schedule.
    pub expected_start_time: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_field(&self) -> bool {
        self.expected_start_time.is_some()
    }
}

pub struct Employees {
    conn: Connection,
}

impl Employees {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(Employees { conn: db.conn })
    }

    pub fn insert(
        &mut self,
        first_name: &str,
        last_name: &str,
        username: &str,
        expected_start_time: Option<&str>,
    ) -> Result<i64> {
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![first_name, last_name, username, expected_start_time],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let employee_iter = stmt.query_map([], row_to_employee)?;
        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(SELECT_BY_ID, params![id], row_to_employee)
            .optional()?;
        Ok(employee)
    }

    pub fn fetch_by_username(&mut self, username: &str) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(SELECT_BY_USERNAME, params![username], row_to_employee)
            .optional()?;
        Ok(employee)
    }

    /// Removes an employee; returns whether a row was deleted.
    pub fn remove(&mut self, username: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_BY_USERNAME, params![username])?;
        Ok(affected > 0)
    }

    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_EMPLOYEES, [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_employee(row: &rusqlite::Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        username: row.get(3)?,
        expected_start_time: row.get(4)?,
    })
}
