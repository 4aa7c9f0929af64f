use std::path::PathBuf;

/// Result alias for the data layer.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while loading or reshaping dashboard data.
///
/// Two families matter to the UI: a missing required file
/// ([`DataError::FileNotFound`]) and everything that makes a file
/// unusable once found. Either way the owning tab reports the error and
/// stops rendering; the other tabs are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The data file does not exist at the resolved path.
    #[error("data file not found: {}", path.display())]
    FileNotFound {
        /// Path that failed to resolve.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not a usable CSV table.
    #[error("malformed data in {}: {message}", path.display())]
    MalformedFile {
        /// Path of the offending file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// An expected column is absent from the table.
    #[error("column '{name}' not found")]
    ColumnNotFound {
        /// The name of the missing column.
        name: String,
    },

    /// A cell in a declared-numeric column failed to parse as a number.
    #[error("column '{column}', row {row}: expected a number, got '{value}'")]
    NotNumeric {
        /// The offending column.
        column: String,
        /// 1-based data row (header excluded).
        row: usize,
        /// The raw cell text.
        value: String,
    },

    /// Two columns would share the same name.
    #[error("duplicate column '{name}'")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// A row's cell count does not match the table's column count.
    #[error("row {row} has {cells} cells, expected {expected}")]
    RowShape {
        /// 0-based row index within the rows being assembled.
        row: usize,
        /// Cells found in the row.
        cells: usize,
        /// Cells required by the column set.
        expected: usize,
    },
}
