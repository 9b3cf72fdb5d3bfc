use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use tracing::{info, warn};

use crate::data::DataError;
use crate::data::city::City;
use crate::data::data_lector;
use crate::data::filters::{self, DayFilter, FilterError, MonthFilter};
use crate::data::paging::RowPager;
use crate::data::trip_struct::TripTable;
use crate::stats::{self, StatsError};
use crate::visual::report::{self, RULE};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input closed")]
    InputClosed,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, AppError>;

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington?\n";
const MONTH_PROMPT: &str = "Which month? January, February, March, April, May, June, or all?\n";
const DAY_PROMPT: &str =
    "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or all?\n";

pub struct App<R, W> {
    data_dir: PathBuf,
    input: R,
    output: W,
    // Tablas crudas por ciudad, se cargan una vez por sesion
    cache: HashMap<City, TripTable>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(data_dir: PathBuf, input: R, output: W) -> Self {
        Self {
            data_dir,
            input,
            output,
            cache: HashMap::new(),
        }
    }

    /// Corre la sesion completa. Cerrar la entrada termina la sesion sin error.
    pub fn run(&mut self) -> Result<()> {
        match self.session() {
            Err(AppError::InputClosed) => {
                info!("input closed, ending session");
                self.goodbye()
            }
            other => other,
        }
    }

    fn session(&mut self) -> Result<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;
        writeln!(self.output, "{RULE}")?;

        loop {
            let table = self.load_round()?;
            writeln!(self.output, "{RULE}")?;

            self.view_rows(&table)?;
            writeln!(self.output, "{RULE}")?;

            self.show_stats(&table)?;

            if !self.ask_yes_no("\nWould you like to restart? Enter yes or no.\n")? {
                break;
            }
        }

        self.goodbye()
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Exiting the program...")?;
        writeln!(self.output, "Thank you for using the bikeshare data analysis tool!")?;
        writeln!(self.output, "Goodbye!")?;
        writeln!(self.output, "{RULE}")?;
        self.output.flush()?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let mut answer = self.ask(question)?;
        loop {
            match answer.to_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => {
                    writeln!(self.output, "Please enter a valid response (yes or no).")?;
                    answer = self.ask(question)?;
                }
            }
        }
    }

    fn ask_parsed<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            match self.ask(question)?.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn ask_row_count(&mut self) -> Result<usize> {
        loop {
            let answer = self.ask("How many rows do you want to see? (5, 10, 15, etc.)\n")?;
            match answer.parse::<i64>() {
                Ok(n) if n > 0 => return Ok(n as usize),
                Ok(_) => writeln!(self.output, "Please enter a positive number.")?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn get_filters(&mut self) -> Result<(City, MonthFilter, DayFilter)> {
        writeln!(self.output, "{RULE}")?;
        let city = self.ask_parsed::<City>(CITY_PROMPT)?;
        let month = self.ask_parsed::<MonthFilter>(MONTH_PROMPT)?;
        let day = self.ask_parsed::<DayFilter>(DAY_PROMPT)?;
        writeln!(self.output, "{RULE}")?;
        Ok((city, month, day))
    }

    fn city_table(&mut self, city: City) -> std::result::Result<&TripTable, DataError> {
        match self.cache.entry(city) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let table = data_lector::load_city(&self.data_dir, city)?;
                Ok(&*entry.insert(table))
            }
        }
    }

    /// Pide filtros hasta que el resultado no quede vacio.
    fn load_round(&mut self) -> Result<TripTable> {
        loop {
            let (city, month, day) = self.get_filters()?;
            writeln!(self.output, "Filtering on: {day}, {month}")?;

            let outcome = self
                .city_table(city)
                .map(|table| filters::load(table, month, day));

            match outcome {
                Ok(Ok(table)) => {
                    writeln!(self.output, "Data loaded successfully!")?;
                    return Ok(table);
                }
                Ok(Err(FilterError::EmptyResult { .. })) => {
                    writeln!(
                        self.output,
                        "Oops! No data found for your filter. Try another month or day."
                    )?;
                }
                Ok(Err(e)) => writeln!(self.output, "{e}")?,
                Err(e) => {
                    warn!(%city, error = %e, "could not load city data");
                    writeln!(self.output, "Could not load data for {city}: {e}")?;
                }
            }
        }
    }

    fn view_rows(&mut self, table: &TripTable) -> Result<()> {
        let question = "\nWould you like to view rows of individual trip data? Enter yes or no.\n";
        if !self.ask_yes_no(question)? {
            return Ok(());
        }

        let mut pager = RowPager::new(self.ask_row_count()?);
        loop {
            match pager.next_page(table.len()) {
                Some(range) => {
                    let text = report::rows_report(table.rows(range.start, range.end));
                    write!(self.output, "{text}")?;
                }
                None => {
                    writeln!(self.output, "No more rows to display.")?;
                    return Ok(());
                }
            }

            if !self.ask_yes_no("Do you wish to continue? Enter yes or no.\n")? {
                return Ok(());
            }
        }
    }

    fn show_stats(&mut self, table: &TripTable) -> Result<()> {
        if !self.ask_yes_no("\nWould you like to see the statistics? Enter yes or no.\n")? {
            writeln!(self.output, "{RULE}")?;
            writeln!(self.output, "Okay, no statistics will be shown.")?;
            writeln!(self.output, "{RULE}")?;
            return Ok(());
        }

        writeln!(self.output, "{RULE}")?;
        self.section("Calculating The Most Frequent Times of Travel...", || {
            stats::time_stats(table).map(|s| report::time_report(&s))
        })?;
        self.section("Calculating The Most Popular Stations and Trip...", || {
            stats::station_stats(table).map(|s| report::station_report(&s))
        })?;
        self.section("Calculating Trip Duration...", || {
            stats::duration_stats(table).map(|s| report::duration_report(&s))
        })?;
        self.section("Calculating User Stats...", || {
            Ok(report::user_report(&stats::user_stats(table)))
        })?;
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }

    // Un reporte que falla se informa y se sigue con el resto
    fn section<F>(&mut self, title: &str, compute: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<String, StatsError>,
    {
        writeln!(self.output, "\n{title}\n")?;
        let start_time = Instant::now();

        match compute() {
            Ok(text) => write!(self.output, "{text}")?,
            Err(e) => {
                warn!(section = title, error = %e, "statistics unavailable");
                writeln!(self.output, "Could not compute these statistics: {e}")?;
            }
        }

        writeln!(self.output, "\nThis took {:.2?}.", start_time.elapsed())?;
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }
}
