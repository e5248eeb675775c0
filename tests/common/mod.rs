#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bank_manager::data_access::Database;
use bank_manager::error::AppError;
use bank_manager::models::enums::{CellValue, Param};
use bank_manager::notifier::Notifier;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Execute { sql: String, params: Vec<Param> },
    Fetch { sql: String },
}

#[derive(Default)]
struct DbState {
    calls: Vec<Call>,
    rows: Vec<Vec<CellValue>>,
    fail_with: Option<String>,
    fail_fetch_with: Option<String>,
    batch_affected: Option<u64>,
}

/// Records every statement instead of running it.
#[derive(Clone, Default)]
pub struct RecordingDb {
    state: Rc<RefCell<DbState>>,
}

impl RecordingDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows returned by every fetch.
    pub fn with_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let db = Self::default();
        db.state.borrow_mut().rows = rows;
        db
    }

    pub fn set_rows(&self, rows: Vec<Vec<CellValue>>) {
        self.state.borrow_mut().rows = rows;
    }

    /// Make every write fail with this driver message.
    pub fn fail_writes(&self, message: &str) {
        self.state.borrow_mut().fail_with = Some(message.to_string());
    }

    /// Make every fetch fail with this driver message.
    pub fn fail_fetches(&self, message: &str) {
        self.state.borrow_mut().fail_fetch_with = Some(message.to_string());
    }

    /// Rows reported as affected by the next batches, instead of one per statement.
    pub fn report_batch_affected(&self, affected: u64) {
        self.state.borrow_mut().batch_affected = Some(affected);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn executes(&self) -> Vec<(String, Vec<Param>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Execute { sql, params } => Some((sql, params)),
                Call::Fetch { .. } => None,
            })
            .collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Fetch { .. }))
            .count()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn failure(&self) -> Option<AppError> {
        self.state
            .borrow()
            .fail_with
            .clone()
            .map(|m| AppError::Database(sqlx::Error::Protocol(m)))
    }
}

impl Database for RecordingDb {
    fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, AppError> {
        self.state.borrow_mut().calls.push(Call::Execute {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        match self.failure() {
            Some(e) => Err(e),
            None => Ok(1),
        }
    }

    fn execute_batch(&self, sql: &str, batch: &[Vec<Param>]) -> Result<u64, AppError> {
        for params in batch {
            self.state.borrow_mut().calls.push(Call::Execute {
                sql: sql.to_string(),
                params: params.clone(),
            });
        }
        match self.failure() {
            Some(e) => Err(e),
            None => Ok(self.state.borrow().batch_affected.unwrap_or(batch.len() as u64)),
        }
    }

    fn fetch(&self, sql: &str) -> Result<Vec<Vec<CellValue>>, AppError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Fetch { sql: sql.to_string() });
        match &state.fail_fetch_with {
            Some(m) => Err(AppError::Database(sqlx::Error::Protocol(m.clone()))),
            None => Ok(state.rows.clone()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
    Confirm,
}

/// Notifier that answers confirmations from a script and keeps every message.
#[derive(Debug)]
pub struct ScriptedNotifier {
    pub answer: bool,
    pub messages: Vec<(Level, String, String)>,
}

impl ScriptedNotifier {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            messages: Vec::new(),
        }
    }

    pub fn count(&self, level: Level) -> usize {
        self.messages.iter().filter(|(l, _, _)| *l == level).count()
    }

    pub fn last(&self, level: Level) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|(l, _, _)| *l == level)
            .map(|(_, _, m)| m.as_str())
    }
}

impl Notifier for ScriptedNotifier {
    fn info(&mut self, title: &str, message: &str) {
        self.messages.push((Level::Info, title.into(), message.into()));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.messages.push((Level::Warning, title.into(), message.into()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.messages.push((Level::Error, title.into(), message.into()));
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.messages.push((Level::Confirm, title.into(), message.into()));
        self.answer
    }
}

pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn int(i: i64) -> CellValue {
    CellValue::Integer(i)
}
