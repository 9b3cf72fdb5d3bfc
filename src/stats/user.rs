use super::{TotalF64, impute_mean, mode, value_counts};
use crate::data::trip_struct::TripTable;

pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i64,
    pub latest: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub type_counts: Vec<(String, usize)>,
    /// `None` cuando el dataset no trae la columna Gender
    pub gender_counts: Option<Vec<(String, usize)>>,
    /// `None` cuando no hay columna Birth Year o no tiene valores
    pub birth_year: Option<BirthYearSummary>,
}

fn or_unknown(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| UNKNOWN.to_string())
}

fn birth_year_summary(table: &TripTable) -> Option<BirthYearSummary> {
    if !table.columns.birth_year {
        return None;
    }
    let raw: Vec<Option<f64>> = table.records.iter().map(|t| t.birth_year).collect();
    let years = impute_mean(&raw)?;

    let earliest = years.iter().copied().map(TotalF64).min()?;
    let latest = years.iter().copied().map(TotalF64).max()?;
    let most_common = mode(years.iter().copied().map(TotalF64))?;

    // Años enteros, se trunca como int()
    Some(BirthYearSummary {
        earliest: earliest.0 as i64,
        latest: latest.0 as i64,
        most_common: most_common.0 as i64,
    })
}

/// Conteo por tipo de usuario y genero, y resumen del año de nacimiento.
/// Gender y Birth Year son opcionales segun la ciudad.
pub fn user_stats(table: &TripTable) -> UserStats {
    let type_counts = value_counts(table.records.iter().map(|t| or_unknown(&t.user_type)));

    let gender_counts = table
        .columns
        .gender
        .then(|| value_counts(table.records.iter().map(|t| or_unknown(&t.gender))));

    UserStats {
        type_counts,
        gender_counts,
        birth_year: birth_year_summary(table),
    }
}
