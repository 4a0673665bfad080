//! Tabular results produced by the analyses
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// A table of 0/1 indicators with labelled rows and columns
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IndicatorTable {
    /// Row labels, in row order
    pub index: Vec<String>,
    /// Column labels, in column order
    pub columns: Vec<String>,
    /// Cell values, one inner vector per row
    pub data: Vec<Vec<u8>>,
}

impl IndicatorTable {
    /// Create a table of the given shape with every cell set to 0
    pub fn zeros(index: Vec<String>, columns: Vec<String>) -> Self {
        let data = vec![vec![0u8; columns.len()]; index.len()];
        IndicatorTable {
            index,
            columns,
            data,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Look up a single cell by its row and column labels
    pub fn get(&self, row: &str, column: &str) -> Option<u8> {
        let i = self.index.iter().position(|r| r == row)?;
        let j = self.columns.iter().position(|c| c == column)?;
        self.data.get(i)?.get(j).copied()
    }

    /// All cells of a row
    pub fn row(&self, row: &str) -> Option<&[u8]> {
        let i = self.index.iter().position(|r| r == row)?;
        self.data.get(i).map(Vec::as_slice)
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: u8) {
        self.data[i][j] = value;
    }

    /// Render the table as comma separated values, with a header row and the row labels first
    ///
    /// Fails if a row of `data` doesn't have one value per column.
    pub fn to_csv_string(&self) -> Result<String, TableError> {
        let mut writer = csv::Writer::from_writer(vec![]);
        // The header starts with an empty cell above the row labels
        writer.write_record(std::iter::once("").chain(self.columns.iter().map(String::as_str)))?;
        for (label, row) in self.index.iter().zip(&self.data) {
            writer.write_record(
                std::iter::once(label.clone()).chain(row.iter().map(u8::to_string)),
            )?;
        }
        into_csv_string(writer)
    }
}

/// A table of string columns which all have the same length
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExchangeTable {
    columns: IndexMap<String, Vec<String>>,
}

impl ExchangeTable {
    /// Create the table from columns which are already padded
    pub(crate) fn from_padded(columns: IndexMap<String, Vec<String>>) -> Self {
        debug_assert!(
            columns
                .values()
                .map(Vec::len)
                .collect::<std::collections::HashSet<_>>()
                .len()
                <= 1
        );
        ExchangeTable { columns }
    }

    /// Column names, in column order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Iterate over (name, values) pairs
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn n_rows(&self) -> usize {
        self.columns.values().next().map(Vec::len).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Iterate over the rows of the table
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.n_rows()).map(move |i| {
            self.columns
                .values()
                .map(|column| column[i].as_str())
                .collect()
        })
    }

    /// Render the table as comma separated values with a header row
    pub fn to_csv_string(&self) -> Result<String, TableError> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(self.column_names())?;
        for row in self.rows() {
            writer.write_record(row)?;
        }
        into_csv_string(writer)
    }
}

fn into_csv_string(writer: csv::Writer<Vec<u8>>) -> Result<String, TableError> {
    let buffer = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(buffer)?)
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Unable to write csv record")]
    Csv(#[from] csv::Error),
    #[error("Unable to flush csv writer")]
    Flush(#[from] std::io::Error),
    #[error("Csv output is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
