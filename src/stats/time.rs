use super::{StatsError, mode};
use crate::data::filters::WEEKDAYS;
use crate::data::trip_struct::TripTable;
use chrono::{Datelike, Month, Timelike, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub common_month: Month,
    pub common_weekday: Weekday,
    pub common_hour: u32,
}

/// Mes, dia de la semana y hora mas frecuentes de `Start Time`.
pub fn time_stats(table: &TripTable) -> Result<TimeStats, StatsError> {
    let starts = || table.records.iter().map(|trip| trip.start_time);

    let month = mode(starts().map(|t| t.month())).ok_or(StatsError::NoData("Start Time"))?;
    // Weekday no es Ord, se cuenta por numero desde el lunes
    let weekday = mode(starts().map(|t| t.weekday().num_days_from_monday()))
        .ok_or(StatsError::NoData("Start Time"))?;
    let hour = mode(starts().map(|t| t.hour())).ok_or(StatsError::NoData("Start Time"))?;

    let common_month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(StatsError::NoData("Start Time"))?;

    Ok(TimeStats {
        common_month,
        common_weekday: WEEKDAYS[weekday as usize],
        common_hour: hour,
    })
}
