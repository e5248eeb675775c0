use log::info;

use crate::data_access::Database;
use crate::error::AppError;

/// Tables the entity tabs read and write. Created only when absent.
pub const BANK_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS \"Department\" (
        DeptCode TEXT PRIMARY KEY,
        Description TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS \"Branch\" (
        BranchId INTEGER PRIMARY KEY AUTOINCREMENT,
        BranchCode TEXT NOT NULL,
        Email TEXT NOT NULL,
        Phone TEXT
    )",
    "CREATE TABLE IF NOT EXISTS \"Employee\" (
        EmpId INTEGER PRIMARY KEY AUTOINCREMENT,
        DeptCode TEXT NOT NULL REFERENCES \"Department\"(DeptCode),
        BranchId INTEGER NOT NULL REFERENCES \"Branch\"(BranchId),
        Email TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS \"Customer\" (
        CustomerId INTEGER PRIMARY KEY AUTOINCREMENT,
        SSN TEXT NOT NULL UNIQUE,
        Job TEXT,
        IsActive INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS \"Account\" (
        AccountId INTEGER PRIMARY KEY AUTOINCREMENT,
        IBAN TEXT NOT NULL UNIQUE,
        CustomerId INTEGER NOT NULL REFERENCES \"Customer\"(CustomerId),
        BranchId INTEGER NOT NULL REFERENCES \"Branch\"(BranchId),
        Balance REAL NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS \"Transaction\" (
        TransactionId INTEGER PRIMARY KEY AUTOINCREMENT,
        AccountId INTEGER NOT NULL REFERENCES \"Account\"(AccountId),
        EmpId INTEGER NOT NULL REFERENCES \"Employee\"(EmpId),
        Amount REAL NOT NULL,
        TransactionDate DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
];

pub fn ensure_bank_schema(db: &impl Database) -> Result<(), AppError> {
    for statement in BANK_SCHEMA {
        db.execute(statement, &[])?;
    }
    info!("Bank schema ready ({} tables)", BANK_SCHEMA.len());
    Ok(())
}
