//! Generic statement execution over SQLite.
//!
//! Every call runs exactly one statement on the executor it is handed: the
//! pool for stand-alone reads and writes, or `&mut *tx` when several writes
//! must commit together. Rows come back as column-name keyed JSON maps so
//! repositories can reshape them with serde.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Executor, Row, TypeInfo, ValueRef};

use crate::StoreResult;

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Integer(v)
    }
}

impl From<u32> for SqlParam {
    fn from(v: u32) -> Self {
        SqlParam::Integer(i64::from(v))
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Integer(i64::from(v))
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        SqlParam::Real(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlParam::Null, Into::into)
    }
}

/// Builds a `Vec<SqlParam>` from heterogeneous values.
#[macro_export]
macro_rules! params {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::records::SqlParam::from($value)),*]
    };
}

fn bind_all<'q>(sql: &'q str, params: &'q [SqlParam]) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    params.iter().fold(sqlx::query(sql), |query, param| match param {
        SqlParam::Null => query.bind(None::<String>),
        SqlParam::Integer(v) => query.bind(*v),
        SqlParam::Real(v) => query.bind(*v),
        SqlParam::Text(v) => query.bind(v.as_str()),
    })
}

/// Runs a SELECT and returns every row as a record.
pub async fn query<'e, E>(executor: E, sql: &'e str, params: &'e [SqlParam]) -> StoreResult<Vec<Record>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = bind_all(sql, params).fetch_all(executor).await?;
    rows.iter().map(to_record).collect()
}

/// Runs an INSERT and returns the generated row id.
pub async fn insert<'e, E>(executor: E, sql: &'e str, params: &'e [SqlParam]) -> StoreResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = bind_all(sql, params).execute(executor).await?;
    Ok(result.last_insert_rowid())
}

/// Runs an UPDATE/DELETE and returns the number of affected rows.
pub async fn update<'e, E>(executor: E, sql: &'e str, params: &'e [SqlParam]) -> StoreResult<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = bind_all(sql, params).execute(executor).await?;
    Ok(result.rows_affected())
}

pub fn decode<T: DeserializeOwned>(record: Record) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(record))?)
}

pub fn decode_all<T: DeserializeOwned>(records: Vec<Record>) -> StoreResult<Vec<T>> {
    records.into_iter().map(decode).collect()
}

fn to_record(row: &SqliteRow) -> StoreResult<Record> {
    let mut record = Record::new();
    for column in row.columns() {
        let value = decode_column(row, column.ordinal())?;
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

// Decodes by the value's storage class, not the declared column type.
fn decode_column(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage = raw.type_info().name().to_ascii_uppercase();

    match storage.as_str() {
        "INTEGER" | "INT" | "BIGINT" | "BOOLEAN" => row.try_get::<i64, _>(index).map(Value::from),
        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => row.try_get::<f64, _>(index).map(Value::from),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|bytes| Value::String(String::from_utf8_lossy(&bytes).into_owned())),
        _ => row.try_get::<String, _>(index).map(Value::String),
    }
}
