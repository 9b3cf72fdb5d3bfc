use super::DataError;
use super::city::City;
use super::trip_struct::{Columns, TripRecord, TripTable};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

// Fila tal como viene en el CSV, antes de parsear las fechas
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration", default, deserialize_with = "lenient_number")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "lenient_number")]
    birth_year: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            debug!(%value, "ignoring non-numeric value");
            None
        }
    }))
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn timestamp(row: usize, column: &'static str, value: &str) -> Result<NaiveDateTime, DataError> {
    parse_timestamp(value).ok_or_else(|| DataError::Timestamp {
        row,
        column,
        value: value.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Recorre el CSV fila por fila y entrega cada viaje ya parseado.
/// Devuelve las columnas opcionales que trae el header.
pub fn stream_process_csv<R, F>(reader: R, mut process_trip: F) -> Result<Columns, DataError>
where
    R: Read,
    F: FnMut(TripRecord),
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .buffer_capacity(128 * 1024) // Buffer de 128KB para el parser CSV
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    for required in [START_TIME, END_TIME] {
        if !has(required) {
            return Err(DataError::MissingColumn(required));
        }
    }

    let columns = Columns {
        trip_duration: has(TRIP_DURATION),
        start_station: has(START_STATION),
        end_station: has(END_STATION),
        user_type: has(USER_TYPE),
        gender: has(GENDER),
        birth_year: has(BIRTH_YEAR),
    };

    for (row, result) in csv_reader.deserialize::<RawTrip>().enumerate() {
        let raw = result?;
        process_trip(TripRecord {
            row,
            start_time: timestamp(row, START_TIME, &raw.start_time)?,
            end_time: timestamp(row, END_TIME, &raw.end_time)?,
            trip_duration: raw.trip_duration,
            start_station: non_empty(raw.start_station),
            end_station: non_empty(raw.end_station),
            user_type: non_empty(raw.user_type),
            gender: non_empty(raw.gender),
            birth_year: raw.birth_year,
        });
    }

    Ok(columns)
}

pub fn read_trips<R: Read>(reader: R) -> Result<TripTable, DataError> {
    let mut records = Vec::new();
    let columns = stream_process_csv(reader, |trip| records.push(trip))?;
    Ok(TripTable::new(columns, records))
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<TripTable, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let buf_reader = BufReader::with_capacity(64 * 1024, file); // Buffer de 64KB

    let table = read_trips(buf_reader)?;
    info!(path = %path.display(), rows = table.len(), "trip table loaded");
    Ok(table)
}

pub fn load_city<P: AsRef<Path>>(data_dir: P, city: City) -> Result<TripTable, DataError> {
    load_csv(city.csv_path(data_dir))
}
