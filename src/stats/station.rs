use super::{StatsError, mode};
use crate::data::data_lector::{END_STATION, START_STATION};
use crate::data::trip_struct::{TripRecord, TripTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: String,
    pub common_end: String,
    pub common_pair: String,
}

/// Etiqueta derivada "<inicio> to <fin>", solo si el viaje tiene ambas estaciones.
pub fn trip_label(trip: &TripRecord) -> Option<String> {
    match (&trip.start_station, &trip.end_station) {
        (Some(start), Some(end)) => Some(format!("{start} to {end}")),
        _ => None,
    }
}

pub fn station_stats(table: &TripTable) -> Result<StationStats, StatsError> {
    if !table.columns.start_station {
        return Err(StatsError::MissingColumn(START_STATION));
    }
    if !table.columns.end_station {
        return Err(StatsError::MissingColumn(END_STATION));
    }

    let common_start = mode(table.records.iter().filter_map(|t| t.start_station.as_deref()))
        .ok_or(StatsError::NoData(START_STATION))?;
    let common_end = mode(table.records.iter().filter_map(|t| t.end_station.as_deref()))
        .ok_or(StatsError::NoData(END_STATION))?;
    let common_pair = mode(table.records.iter().filter_map(trip_label))
        .ok_or(StatsError::NoData("Start Station to End Station"))?;

    Ok(StationStats {
        common_start: common_start.to_string(),
        common_end: common_end.to_string(),
        common_pair,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::trip_struct::fixtures::{at, table, trip};

    fn ride(row: usize, start: &str, end: &str) -> TripRecord {
        let mut t = trip(row, at(2017, 1, 2, 8));
        t.start_station = Some(start.to_string());
        t.end_station = Some(end.to_string());
        t
    }

    #[test]
    fn common_start_station() {
        let t = table(vec![ride(0, "A", "C"), ride(1, "A", "D"), ride(2, "B", "D")]);
        let stats = station_stats(&t).unwrap();
        assert_eq!(stats.common_start, "A");
        assert_eq!(stats.common_end, "D");
    }

    #[test]
    fn common_pair_uses_derived_label() {
        let t = table(vec![
            ride(0, "Lake Shore Dr", "Streeter Dr"),
            ride(1, "Clark St", "Streeter Dr"),
            ride(2, "Lake Shore Dr", "Streeter Dr"),
        ]);
        let stats = station_stats(&t).unwrap();
        assert_eq!(stats.common_pair, "Lake Shore Dr to Streeter Dr");
    }

    #[test]
    fn trips_without_a_station_are_skipped() {
        let mut partial = ride(1, "B", "B");
        partial.end_station = None;
        let t = table(vec![ride(0, "A", "C"), partial]);

        let stats = station_stats(&t).unwrap();
        assert_eq!(stats.common_pair, "A to C");
        assert_eq!(stats.common_end, "C");
    }

    #[test]
    fn absent_station_column_is_reported() {
        let mut t = table(vec![ride(0, "A", "B")]);
        t.columns.start_station = false;
        assert_eq!(station_stats(&t), Err(StatsError::MissingColumn(START_STATION)));
    }

    #[test]
    fn no_station_values_is_no_data() {
        let mut only = ride(0, "A", "B");
        only.start_station = None;
        assert_eq!(station_stats(&table(vec![only])), Err(StatsError::NoData(START_STATION)));
    }
}
