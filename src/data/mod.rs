use std::io;
use std::path::PathBuf;

pub mod city;
pub mod data_lector;
pub mod filters;
pub mod paging;
pub mod trip_struct;

/// Errores al cargar los datos de una ciudad
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("Row {row}: cannot parse '{value}' as a timestamp in column '{column}'")]
    Timestamp {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Unknown city '{0}' (choose chicago, new york city or washington)")]
    UnknownCity(String),
}
