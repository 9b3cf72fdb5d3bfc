//! Estadisticas descriptivas sobre una tabla de viajes filtrada.
//!
//! Cada modulo expone una funcion pura `*_stats(&TripTable)` que devuelve un
//! struct con el resultado; ninguna depende de otra.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{UserStats, user_stats};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("Column '{0}' is missing from this dataset")]
    MissingColumn(&'static str),

    #[error("No data available for '{0}'")]
    NoData(&'static str),

    #[error("Column '{0}' has no values")]
    NoValues(&'static str),
}

/// Valor mas frecuente. Si hay empate gana el menor.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    // BTreeMap itera en orden ascendente, `>` estricto deja el primero
    for (value, count) in counts {
        let better = best.as_ref().map_or(true, |(_, best_count)| count > *best_count);
        if better {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Conteo por valor, ordenado por frecuencia descendente.
/// Los empates quedan en el orden en que aparecieron.
pub fn value_counts<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1)); // sort_by es estable
    counts
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Reemplaza los faltantes por la media de los presentes.
/// `None` si no hay ningun valor presente.
pub fn impute_mean(values: &[Option<f64>]) -> Option<Vec<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let fill = mean(&present)?;
    Some(values.iter().map(|v| v.unwrap_or(fill)).collect())
}

/// f64 con orden total, para poder usarlo como llave de `mode`.
#[derive(Debug, Clone, Copy)]
pub struct TotalF64(pub f64);

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
