use chrono::NaiveDateTime;

/// Un viaje de bikeshare ya parseado.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    // Posicion de la fila en el CSV original (0-based)
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Segundos
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

/// Columnas opcionales presentes en el header del archivo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub trip_duration: bool,
    pub start_station: bool,
    pub end_station: bool,
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub columns: Columns,
    pub records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(columns: Columns, records: Vec<TripRecord>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filas en el rango semiabierto [start, end), recortado al tamaño de la tabla.
    pub fn rows(&self, start: usize, end: usize) -> &[TripRecord] {
        let end = end.min(self.records.len());
        let start = start.min(end);
        &self.records[start..end]
    }

    /// Nueva tabla con los registros que cumplen `keep`, mismas columnas.
    pub fn retain_matching<F>(&self, mut keep: F) -> TripTable
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|trip| keep(trip))
            .cloned()
            .collect();

        TripTable::new(self.columns, records)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    impl Columns {
        pub fn all() -> Self {
            Self {
                trip_duration: true,
                start_station: true,
                end_station: true,
                user_type: true,
                gender: true,
                birth_year: true,
            }
        }
    }

    pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    pub fn trip(row: usize, start: NaiveDateTime) -> TripRecord {
        TripRecord {
            row,
            start_time: start,
            end_time: start + chrono::Duration::minutes(10),
            trip_duration: Some(600.0),
            start_station: Some("A".to_string()),
            end_station: Some("B".to_string()),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    pub fn table(records: Vec<TripRecord>) -> TripTable {
        TripTable::new(Columns::all(), records)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn rows_clamps_to_table_len() {
        let t = table((0..12).map(|i| trip(i, at(2017, 1, 2, 8))).collect());
        assert_eq!(t.rows(10, 15).len(), 2);
        assert_eq!(t.rows(10, 15)[0].row, 10);
        assert!(t.rows(20, 25).is_empty());
    }

    #[test]
    fn retain_matching_keeps_columns() {
        let mut t = table(vec![trip(0, at(2017, 1, 2, 8)), trip(1, at(2017, 2, 2, 8))]);
        t.columns.gender = false;
        let filtered = t.retain_matching(|trip| trip.row == 1);
        assert_eq!(filtered.len(), 1);
        assert!(!filtered.columns.gender);
    }
}
