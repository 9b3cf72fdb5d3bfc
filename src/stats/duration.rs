use super::{StatsError, impute_mean, mean};
use crate::data::data_lector::TRIP_DURATION;
use crate::data::trip_struct::TripTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_minutes: f64,
    pub mean_minutes: f64,
    pub trips: usize,
    /// Cuantos valores faltantes se rellenaron con la media
    pub imputed: usize,
}

pub fn duration_stats(table: &TripTable) -> Result<DurationStats, StatsError> {
    if !table.columns.trip_duration {
        return Err(StatsError::MissingColumn(TRIP_DURATION));
    }

    let raw: Vec<Option<f64>> = table.records.iter().map(|t| t.trip_duration).collect();
    let filled = impute_mean(&raw).ok_or(StatsError::NoValues(TRIP_DURATION))?;
    let mean_seconds = mean(&filled).ok_or(StatsError::NoValues(TRIP_DURATION))?;

    Ok(DurationStats {
        total_minutes: filled.iter().sum::<f64>() / 60.0,
        mean_minutes: mean_seconds / 60.0,
        trips: filled.len(),
        imputed: raw.iter().filter(|v| v.is_none()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::trip_struct::fixtures::{at, table, trip};

    fn with_durations(durations: &[Option<f64>]) -> TripTable {
        table(
            durations
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let mut t = trip(i, at(2017, 4, 1, 10));
                    t.trip_duration = *d;
                    t
                })
                .collect(),
        )
    }

    #[test]
    fn missing_duration_takes_column_mean() {
        let stats = duration_stats(&with_durations(&[Some(60.0), Some(120.0), None])).unwrap();
        assert!((stats.total_minutes - 4.5).abs() < 1e-9);
        assert!((stats.mean_minutes - 1.5).abs() < 1e-9);
        assert_eq!(stats.trips, 3);
        assert_eq!(stats.imputed, 1);
    }

    #[test]
    fn total_is_mean_times_count() {
        let t = with_durations(&[Some(321.0), Some(1610.0), Some(416.5), Some(2000.25)]);
        let stats = duration_stats(&t).unwrap();
        let expected = stats.mean_minutes * t.len() as f64;
        assert!((stats.total_minutes - expected).abs() < 1e-9);
        assert_eq!(stats.imputed, 0);
    }

    #[test]
    fn absent_column_is_an_error() {
        let mut t = with_durations(&[Some(60.0)]);
        t.columns.trip_duration = false;
        assert_eq!(duration_stats(&t), Err(StatsError::MissingColumn(TRIP_DURATION)));
    }

    #[test]
    fn column_without_values() {
        let t = with_durations(&[None, None]);
        assert_eq!(duration_stats(&t), Err(StatsError::NoValues(TRIP_DURATION)));
    }
}
