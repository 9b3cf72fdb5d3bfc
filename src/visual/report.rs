use crate::data::filters::weekday_name;
use crate::data::trip_struct::TripRecord;
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use std::fmt::Write;

pub const RULE: &str = "----------------------------------------";

pub fn time_report(stats: &TimeStats) -> String {
    format!(
        "The most common month is: {}\n\
         The most common day of the week is: {}\n\
         The most common start hour is: {}\n",
        stats.common_month.name(),
        weekday_name(stats.common_weekday),
        stats.common_hour
    )
}

pub fn station_report(stats: &StationStats) -> String {
    format!(
        "The most commonly used start station is: {}\n\
         The most commonly used end station is: {}\n\
         The most frequent combination of start and end station is: {}\n",
        stats.common_start, stats.common_end, stats.common_pair
    )
}

pub fn duration_report(stats: &DurationStats) -> String {
    let mut out = format!(
        "The total travel time is: {} minutes\n\
         The mean travel time is: {} minutes\n",
        stats.total_minutes, stats.mean_minutes
    );
    if stats.imputed > 0 {
        let _ = writeln!(
            out,
            "({} of {} trips had no duration and were counted at the mean)",
            stats.imputed, stats.trips
        );
    }
    out
}

fn counts_block(out: &mut String, title: &str, counts: &[(String, usize)]) {
    let _ = writeln!(out, "{title}");
    let width = counts.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in counts {
        let _ = writeln!(out, "  {name:<width$}  {count}");
    }
}

pub fn user_report(stats: &UserStats) -> String {
    let mut out = String::new();
    counts_block(&mut out, "Counts of user types:", &stats.type_counts);

    match &stats.gender_counts {
        Some(counts) => counts_block(&mut out, "Counts of user gender:", counts),
        None => out.push_str("Gender data: not available.\n"),
    }

    match &stats.birth_year {
        Some(summary) => {
            let _ = writeln!(out, "The earliest year of birth is: {}", summary.earliest);
            let _ = writeln!(out, "The most recent year of birth is: {}", summary.latest);
            let _ = writeln!(out, "The most common year of birth is: {}", summary.most_common);
        }
        None => out.push_str("Birth Year data: not available.\n"),
    }
    out
}

fn opt_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn opt_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Filas crudas, una por linea, con la posicion original del CSV.
pub fn rows_report(rows: &[TripRecord]) -> String {
    let mut out = String::from(
        "Row | Start Time | End Time | Trip Duration | Start Station | End Station | User Type | Gender | Birth Year\n",
    );
    for trip in rows {
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {} | {} | {} | {} | {}",
            trip.row,
            trip.start_time,
            trip.end_time,
            opt_number(trip.trip_duration),
            opt_text(&trip.start_station),
            opt_text(&trip.end_station),
            opt_text(&trip.user_type),
            opt_text(&trip.gender),
            opt_number(trip.birth_year),
        );
    }
    out
}
