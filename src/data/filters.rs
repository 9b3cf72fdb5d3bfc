use super::trip_struct::{TripRecord, TripTable};
use chrono::{Datelike, Month, Weekday};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Meses que cubren los datasets (enero a junio)
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown month '{0}' (choose all, january, february, march, april, may or june)")]
    UnknownMonth(String),

    #[error("Unknown day '{0}' (choose all or a day of the week)")]
    UnknownDay(String),

    #[error("No data found for month '{month}' and day '{day}'")]
    EmptyResult { month: MonthFilter, day: DayFilter },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl FromStr for MonthFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        MONTHS
            .into_iter()
            .find(|month| month.name().to_lowercase() == wanted)
            .map(MonthFilter::Only)
            .ok_or_else(|| FilterError::UnknownMonth(s.trim().to_string()))
    }
}

impl FromStr for DayFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).to_lowercase() == wanted)
            .map(DayFilter::Only)
            .ok_or_else(|| FilterError::UnknownDay(s.trim().to_string()))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

pub enum TripFilter {
    Month(Month),
    Day(Weekday),
    And(Vec<TripFilter>),
}

impl TripFilter {
    pub fn matches(&self, trip: &TripRecord) -> bool {
        match self {
            TripFilter::Month(month) => trip.start_time.month() == month.number_from_month(),
            TripFilter::Day(day) => trip.start_time.weekday() == *day,
            // Todos los filtros deben cumplirse (AND lógico)
            TripFilter::And(filters) => filters.iter().all(|filter| filter.matches(trip)),
        }
    }

    /// Combina la seleccion de mes y dia; "all" no agrega filtro.
    pub fn from_selection(month: MonthFilter, day: DayFilter) -> TripFilter {
        let mut filters = Vec::new();
        if let MonthFilter::Only(month) = month {
            filters.push(TripFilter::Month(month));
        }
        if let DayFilter::Only(day) = day {
            filters.push(TripFilter::Day(day));
        }

        if filters.len() == 1 {
            filters.remove(0)
        } else {
            // Vacio = sin filtro
            TripFilter::And(filters)
        }
    }
}

/// Filtra la tabla por mes y dia de la semana de `Start Time`.
///
/// Devuelve `FilterError::EmptyResult` si ningun viaje cumple, para que quien
/// llama pida otros filtros.
pub fn load(table: &TripTable, month: MonthFilter, day: DayFilter) -> Result<TripTable, FilterError> {
    let filter = TripFilter::from_selection(month, day);
    let filtered = table.retain_matching(|trip| filter.matches(trip));

    debug!(before = table.len(), after = filtered.len(), %month, %day, "filter applied");

    if filtered.is_empty() {
        return Err(FilterError::EmptyResult { month, day });
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::trip_struct::fixtures::{at, table, trip};

    // 2017-01-02 es lunes
    fn sample() -> TripTable {
        table(vec![
            trip(0, at(2017, 1, 2, 8)),  // enero, lunes
            trip(1, at(2017, 1, 3, 9)),  // enero, martes
            trip(2, at(2017, 2, 6, 17)), // febrero, lunes
            trip(3, at(2017, 6, 4, 12)), // junio, domingo
            trip(4, at(2017, 6, 5, 7)),  // junio, lunes
        ])
    }

    #[test]
    fn parses_filters_case_insensitively() {
        assert_eq!("ALL".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!("March".parse::<MonthFilter>(), Ok(MonthFilter::Only(Month::March)));
        assert_eq!(" sunday ".parse::<DayFilter>(), Ok(DayFilter::Only(Weekday::Sun)));
        assert_eq!("all".parse::<DayFilter>(), Ok(DayFilter::All));
    }

    #[test]
    fn months_after_june_are_rejected() {
        assert_eq!(
            "july".parse::<MonthFilter>(),
            Err(FilterError::UnknownMonth("july".to_string()))
        );
        assert!("funday".parse::<DayFilter>().is_err());
    }

    #[test]
    fn all_all_is_identity() {
        let input = sample();
        let output = load(&input, MonthFilter::All, DayFilter::All).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn month_and_day_both_apply() {
        let input = sample();
        let output = load(
            &input,
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Mon),
        )
        .unwrap();

        assert_eq!(output.len(), 1);
        assert_eq!(output.records[0].row, 0);
    }

    #[test]
    fn every_selection_yields_only_matching_subset() {
        let input = sample();
        let months = std::iter::once(MonthFilter::All).chain(MONTHS.into_iter().map(MonthFilter::Only));

        for month in months {
            let days = std::iter::once(DayFilter::All).chain(WEEKDAYS.into_iter().map(DayFilter::Only));
            for day in days {
                let output = match load(&input, month, day) {
                    Ok(output) => output,
                    Err(FilterError::EmptyResult { .. }) => continue,
                    Err(other) => panic!("unexpected error {other:?}"),
                };

                assert!(output.len() <= input.len());
                for trip in &output.records {
                    if let MonthFilter::Only(m) = month {
                        assert_eq!(trip.start_time.month(), m.number_from_month());
                    }
                    if let DayFilter::Only(d) = day {
                        assert_eq!(trip.start_time.weekday(), d);
                    }
                }
            }
        }
    }

    #[test]
    fn empty_result_is_reported() {
        let input = sample();
        let err = load(&input, MonthFilter::Only(Month::March), DayFilter::All).unwrap_err();
        assert_eq!(
            err,
            FilterError::EmptyResult {
                month: MonthFilter::Only(Month::March),
                day: DayFilter::All,
            }
        );
    }
}
