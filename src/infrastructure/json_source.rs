// Column-oriented JSON dataset loader
use crate::application::sales_source::SalesDataSource;
use crate::domain::sales::{Channel, ChannelSales, SalesRecord};
use crate::infrastructure::normalize::normalize_value;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

// Column names after accent normalization.
pub const MONTH_COLUMN: &str = "Mes";
pub const TOTAL_ORDERS_COLUMN: &str = "Pedidos Totais";
pub const TOTAL_REVENUE_COLUMN: &str = "Ganho Total";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset root must be an object mapping column names to arrays")]
    NotAnObject,
    #[error("column {0:?} is missing or not an array")]
    MissingColumn(String),
    #[error("column {column:?} has {len} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        len: usize,
        expected: usize,
    },
    #[error("column {column:?}, row {row}: {reason}")]
    BadValue {
        column: String,
        row: usize,
        reason: String,
    },
}

/// Reads the snack bar dataset from a column-oriented JSON file: one key per
/// column, each holding an equal-length array of values, one entry per month.
pub struct JsonSalesSource {
    path: PathBuf,
}

impl JsonSalesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load_records(&self) -> Result<Vec<SalesRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        let document: Value =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;
        records_from_value(document)
    }
}

#[async_trait]
impl SalesDataSource for JsonSalesSource {
    async fn load(&self) -> anyhow::Result<Vec<SalesRecord>> {
        Ok(self.load_records().await?)
    }
}

/// Normalize keys and string values, validate the column layout, and
/// transpose columns into one record per month (dataset order preserved).
pub fn records_from_value(document: Value) -> Result<Vec<SalesRecord>, LoadError> {
    let Value::Object(columns) = normalize_value(document) else {
        return Err(LoadError::NotAnObject);
    };

    tracing::debug!(
        columns = ?columns.keys().collect::<Vec<_>>(),
        "dataset columns after normalization"
    );

    let months = month_column(&columns)?;
    let expected = months.len();

    let total_orders = count_column(&columns, TOTAL_ORDERS_COLUMN, expected)?;
    let total_revenue = money_column(&columns, TOTAL_REVENUE_COLUMN, expected)?;

    let mut channel_orders = Vec::with_capacity(Channel::ALL.len());
    let mut channel_revenue = Vec::with_capacity(Channel::ALL.len());
    for channel in Channel::ALL {
        channel_orders.push(count_column(&columns, &channel.orders_column(), expected)?);
        channel_revenue.push(money_column(&columns, &channel.revenue_column(), expected)?);
    }

    let records = (0..expected)
        .map(|row| {
            let channels: [ChannelSales; 6] = std::array::from_fn(|c| {
                ChannelSales::new(channel_orders[c][row], channel_revenue[c][row])
            });
            SalesRecord::new(
                months[row].clone(),
                ChannelSales::new(total_orders[row], total_revenue[row]),
                channels,
            )
        })
        .collect();

    Ok(records)
}

fn column<'a>(
    columns: &'a Map<String, Value>,
    name: &str,
    expected: Option<usize>,
) -> Result<&'a Vec<Value>, LoadError> {
    let values = columns
        .get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))?;
    if let Some(expected) = expected {
        if values.len() != expected {
            return Err(LoadError::ColumnLengthMismatch {
                column: name.to_string(),
                len: values.len(),
                expected,
            });
        }
    }
    Ok(values)
}

fn month_column(columns: &Map<String, Value>) -> Result<Vec<String>, LoadError> {
    column(columns, MONTH_COLUMN, None)?
        .iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| LoadError::BadValue {
                    column: MONTH_COLUMN.to_string(),
                    row,
                    reason: format!("expected a month label, got {value}"),
                })
        })
        .collect()
}

fn count_column(
    columns: &Map<String, Value>,
    name: &str,
    expected: usize,
) -> Result<Vec<u64>, LoadError> {
    column(columns, name, Some(expected))?
        .iter()
        .enumerate()
        .map(|(row, value)| {
            // as_u64 rejects negatives and fractional counts in one check
            value.as_u64().ok_or_else(|| LoadError::BadValue {
                column: name.to_string(),
                row,
                reason: format!("expected a non-negative order count, got {value}"),
            })
        })
        .collect()
}

fn money_column(
    columns: &Map<String, Value>,
    name: &str,
    expected: usize,
) -> Result<Vec<f64>, LoadError> {
    column(columns, name, Some(expected))?
        .iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .as_f64()
                .filter(|amount| *amount >= 0.0)
                .ok_or_else(|| LoadError::BadValue {
                    column: name.to_string(),
                    row,
                    reason: format!("expected a non-negative amount, got {value}"),
                })
        })
        .collect()
}
