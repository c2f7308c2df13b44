//! Database export
//!
//! Dumps every table into an `.xlsx` workbook, one worksheet per table,
//! header row first. Timestamps are written as RFC 3339 text; password
//! hashes are never exported.

use std::io::Cursor;

use shared::error::{AppError, ErrorCode};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::db::repository::RepoError;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const EXPORT_FILENAME: &str = "database_export.xlsx";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error("Workbook error: {0}")]
    Workbook(String),
}

impl From<sqlx::Error> for ExportError {
    fn from(err: sqlx::Error) -> Self {
        Self::Repo(err.into())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        tracing::error!(error = %err, "Database export failed");
        AppError::with_message(ErrorCode::ExportFailed, err.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Int,
    Real,
    Text,
    Bool,
    Millis,
}

struct Table {
    name: &'static str,
    columns: &'static [(&'static str, Kind)],
}

static TABLES: &[Table] = &[
    Table {
        name: "menu_items",
        columns: &[
            ("id", Kind::Int),
            ("name", Kind::Text),
            ("category", Kind::Text),
            ("price_full", Kind::Real),
            ("price_half", Kind::Real),
            ("is_available", Kind::Bool),
            ("created_at", Kind::Millis),
        ],
    },
    Table {
        name: "orders",
        columns: &[
            ("id", Kind::Int),
            ("timestamp", Kind::Millis),
            ("payment_method", Kind::Text),
            ("payment_status", Kind::Text),
            ("order_status", Kind::Text),
            ("total_amount", Kind::Real),
            ("merchant_upi_id", Kind::Int),
            ("customer_name", Kind::Text),
            ("customer_phone", Kind::Text),
        ],
    },
    Table {
        name: "order_items",
        columns: &[
            ("id", Kind::Int),
            ("order_id", Kind::Int),
            ("menu_item_id", Kind::Int),
            ("full_qty", Kind::Int),
            ("half_qty", Kind::Int),
            ("delivered_full", Kind::Int),
            ("delivered_half", Kind::Int),
        ],
    },
    Table {
        name: "restaurant_status",
        columns: &[
            ("id", Kind::Int),
            ("is_open", Kind::Bool),
            ("pause_message", Kind::Text),
            ("updated_at", Kind::Millis),
        ],
    },
    Table {
        name: "merchant_accounts",
        columns: &[
            ("id", Kind::Int),
            ("name", Kind::Text),
            ("upi_id", Kind::Text),
            ("is_active", Kind::Bool),
            ("created_at", Kind::Millis),
        ],
    },
    Table {
        name: "admin_users",
        columns: &[
            ("id", Kind::Int),
            ("username", Kind::Text),
            ("created_at", Kind::Millis),
        ],
    },
];

enum Value {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

fn read_value(row: &SqliteRow, column: &str, kind: Kind) -> Result<Value, sqlx::Error> {
    let value = match kind {
        Kind::Int => row
            .try_get::<Option<i64>, _>(column)?
            .map(|v| Value::Number(v as f64)),
        Kind::Real => row.try_get::<Option<f64>, _>(column)?.map(Value::Number),
        Kind::Text => row.try_get::<Option<String>, _>(column)?.map(Value::Text),
        Kind::Bool => row.try_get::<Option<bool>, _>(column)?.map(Value::Bool),
        Kind::Millis => row
            .try_get::<Option<i64>, _>(column)?
            .map(|v| Value::Text(shared::util::rfc3339_millis::format(v))),
    };
    Ok(value.unwrap_or(Value::Empty))
}

/// Table rows as cell values, in column order
async fn fetch_table(pool: &SqlitePool, table: &Table) -> Result<Vec<Vec<Value>>, ExportError> {
    let columns: Vec<&str> = table.columns.iter().map(|(name, _)| *name).collect();
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id",
        columns.join(", "),
        table.name
    );
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter()
        .map(|row| {
            table
                .columns
                .iter()
                .map(|(name, kind)| read_value(row, name, *kind))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(ExportError::from)
}

fn fill_sheet(sheet: &mut Worksheet, table: &Table, rows: &[Vec<Value>]) {
    for (col, (name, _)) in table.columns.iter().enumerate() {
        sheet
            .get_cell_mut((col as u32 + 1, 1u32))
            .set_value(name.to_string());
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let cell = sheet.get_cell_mut((c as u32 + 1, r as u32 + 2));
            match value {
                Value::Empty => {}
                Value::Number(n) => {
                    cell.set_value_number(*n);
                }
                Value::Text(s) => {
                    cell.set_value(s.clone());
                }
                Value::Bool(b) => {
                    cell.set_value_bool(*b);
                }
            }
        }
    }
}

fn build_workbook(tables: &[(&'static Table, Vec<Vec<Value>>)]) -> Result<Spreadsheet, ExportError> {
    let mut book = umya_spreadsheet::new_file();
    for (index, (table, rows)) in tables.iter().enumerate() {
        let sheet = if index == 0 {
            // new_file() starts with "Sheet1"
            let sheet = book
                .get_sheet_by_name_mut("Sheet1")
                .ok_or_else(|| ExportError::Workbook("default worksheet missing".into()))?;
            sheet.set_name(table.name);
            sheet
        } else {
            book.new_sheet(table.name)
                .map_err(|e| ExportError::Workbook(format!("{}: {e}", table.name)))?
        };
        fill_sheet(sheet, table, rows);
    }
    Ok(book)
}

/// Export the whole database as xlsx bytes
pub async fn export_database(pool: &SqlitePool) -> Result<Vec<u8>, ExportError> {
    let mut tables = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let rows = fetch_table(pool, table).await?;
        tables.push((table, rows));
    }

    let bytes = tokio::task::spawn_blocking(move || {
        let book = build_workbook(&tables)?;
        let mut out = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;
        Ok::<_, ExportError>(out.into_inner())
    })
    .await
    .map_err(|e| ExportError::Workbook(format!("export task failed: {e}")))??;

    tracing::info!(bytes = bytes.len(), sheets = TABLES.len(), "Database exported");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::{admin_user, menu_item, restaurant_status};

    #[tokio::test]
    async fn test_export_contains_every_table() {
        let pool = DbService::in_memory().await.unwrap().pool;
        menu_item::insert(&pool, "Veg Maida Momos", "Normal Momos", 200.0, 150.0)
            .await
            .unwrap();
        restaurant_status::ensure(&pool).await.unwrap();
        admin_user::insert(&pool, "admin", "$argon2id$secret")
            .await
            .unwrap();

        let bytes = export_database(&pool).await.unwrap();
        let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true).unwrap();

        for table in TABLES {
            assert!(book.get_sheet_by_name(table.name).is_some(), "{}", table.name);
        }

        let menu = book.get_sheet_by_name("menu_items").unwrap();
        assert_eq!(menu.get_value((1u32, 1u32)), "id");
        assert_eq!(menu.get_value((2u32, 1u32)), "name");
        assert_eq!(menu.get_value((2u32, 2u32)), "Veg Maida Momos");
        assert_eq!(menu.get_value((3u32, 2u32)), "Normal Momos");

        let admins = book.get_sheet_by_name("admin_users").unwrap();
        assert_eq!(admins.get_value((2u32, 2u32)), "admin");
        assert_eq!(admins.get_value((3u32, 1u32)), "created_at");
        assert_eq!(admins.get_value((4u32, 1u32)), "");
        assert_eq!(admins.get_value((4u32, 2u32)), "");
    }
}
