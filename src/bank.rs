use crate::models::enums::FieldKind::{Decimal, Integer, Text};
use crate::models::structs::{ColumnDef, EntityDef, FieldDef};

pub static DEPARTMENT: EntityDef = EntityDef {
    name: "Department",
    plural: "departments",
    table: "Department",
    key_column: "DeptCode",
    key_is_integer: false,
    fields: &[
        FieldDef::required("Dept Code", "DeptCode", Text),
        FieldDef::required("Description", "Description", Text),
    ],
    columns: &[
        ColumnDef::new("Code", "Dept Code", "DeptCode"),
        ColumnDef::new("Desc", "Description", "Description"),
    ],
    insert_defaults: &[],
};

pub static BRANCH: EntityDef = EntityDef {
    name: "Branch",
    plural: "branches",
    table: "Branch",
    key_column: "BranchId",
    key_is_integer: true,
    fields: &[
        FieldDef::required("Branch Code", "BranchCode", Text),
        FieldDef::required("Email", "Email", Text),
        FieldDef::optional("Phone", "Phone", Text),
    ],
    columns: &[
        ColumnDef::new("ID", "ID", "BranchId"),
        ColumnDef::new("Code", "Code", "BranchCode"),
        ColumnDef::new("Email", "Email", "Email"),
        ColumnDef::new("Phone", "Phone", "Phone"),
    ],
    insert_defaults: &[],
};

pub static EMPLOYEE: EntityDef = EntityDef {
    name: "Employee",
    plural: "employees",
    table: "Employee",
    key_column: "EmpId",
    key_is_integer: true,
    fields: &[
        FieldDef::required("Dept Code", "DeptCode", Text),
        FieldDef::required("Branch ID", "BranchId", Integer),
        FieldDef::required("Email", "Email", Text),
    ],
    columns: &[
        ColumnDef::new("ID", "ID", "EmpId"),
        ColumnDef::new("Dept", "Dept", "DeptCode"),
        ColumnDef::new("Branch", "Branch", "BranchId"),
        ColumnDef::new("Email", "Email", "Email"),
    ],
    insert_defaults: &[],
};

pub static CUSTOMER: EntityDef = EntityDef {
    name: "Customer",
    plural: "customers",
    table: "Customer",
    key_column: "CustomerId",
    key_is_integer: true,
    fields: &[
        FieldDef::required("SSN", "SSN", Text),
        FieldDef::optional("Job", "Job", Text),
    ],
    columns: &[
        ColumnDef::new("ID", "ID", "CustomerId"),
        ColumnDef::new("SSN", "SSN", "SSN"),
        ColumnDef::new("Job", "Job", "Job"),
    ],
    insert_defaults: &[("IsActive", "1")],
};

pub static ACCOUNT: EntityDef = EntityDef {
    name: "Account",
    plural: "accounts",
    table: "Account",
    key_column: "AccountId",
    key_is_integer: true,
    fields: &[
        FieldDef::required("IBAN", "IBAN", Text),
        FieldDef::required("Customer ID", "CustomerId", Integer),
        FieldDef::required("Branch ID", "BranchId", Integer),
        // empty balance opens the account at zero
        FieldDef::optional("Balance", "Balance", Decimal),
    ],
    columns: &[
        ColumnDef::new("ID", "ID", "AccountId"),
        ColumnDef::new("IBAN", "IBAN", "IBAN"),
        ColumnDef::new("Cust", "Cust", "CustomerId"),
        ColumnDef::new("Branch", "Branch", "BranchId"),
        ColumnDef::new("Balance", "Balance", "Balance"),
    ],
    insert_defaults: &[],
};

pub static TRANSACTION: EntityDef = EntityDef {
    name: "Transaction",
    plural: "transactions",
    table: "Transaction",
    key_column: "TransactionId",
    key_is_integer: true,
    fields: &[
        FieldDef::required("Account ID", "AccountId", Integer),
        FieldDef::required("Employee ID", "EmpId", Integer),
        FieldDef::required("Amount", "Amount", Decimal),
    ],
    columns: &[
        ColumnDef::new("ID", "ID", "TransactionId"),
        ColumnDef::new("Acc", "Acc", "AccountId"),
        ColumnDef::new("Emp", "Emp", "EmpId"),
        ColumnDef::new("Amount", "Amount", "Amount"),
        ColumnDef::new("Date", "Date", "TransactionDate"),
    ],
    insert_defaults: &[("TransactionDate", "CURRENT_TIMESTAMP")],
};

/// Tab order of the desktop shell.
pub static ALL_ENTITIES: [&EntityDef; 6] =
    [&DEPARTMENT, &BRANCH, &EMPLOYEE, &CUSTOMER, &ACCOUNT, &TRANSACTION];
