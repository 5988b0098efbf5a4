use super::records::{InitRow, MonthlyRecord, TripRow, TRIP_LOG_HEADER};
use super::{RecordSource, RecordSink};
use crate::libs::messages::Message;
use crate::libs::monthly::{MonthKey, MonthlyRow};
use crate::libs::report::ReportRow;
use crate::libs::trip::{CumulativeReading, InitRecord, TripRecord};
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const INIT_FILE_NAME: &str = "init.csv";
pub const TRIP_LOG_FILE_NAME: &str = "trips.csv";
const DAILY_DIR: &str = "daily";
const MONTHLY_DIR: &str = "monthly";

/// Result of rolling the trip log over to the next day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rollover {
    /// The last logged reading, now the baseline in `init.csv`.
    pub carried: CumulativeReading,
    /// Number of trips removed from the log.
    pub cleared: usize,
}

/// A directory of CSV files acting as record source and sink.
#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn init_path(&self) -> PathBuf {
        self.root.join(INIT_FILE_NAME)
    }

    pub fn trip_log_path(&self) -> PathBuf {
        self.root.join(TRIP_LOG_FILE_NAME)
    }

    pub fn daily_report_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(DAILY_DIR).join(format!("{}.csv", date.format("%Y-%m-%d")))
    }

    pub fn monthly_report_path(&self, month: MonthKey) -> PathBuf {
        self.root.join(MONTHLY_DIR).join(format!("{}.csv", month))
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Replaces the baseline record.
    pub fn write_init_record(&self, record: &InitRecord) -> Result<()> {
        let path = self.init_path();
        Self::ensure_parent(&path)?;
        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.serialize(InitRow::from(record))?;
        wtr.flush()?;
        tracing::debug!(path = %path.display(), "initial record written");
        Ok(())
    }

    /// Replaces the whole trip log.
    pub fn write_trips(&self, trips: &[TripRecord]) -> Result<()> {
        let path = self.trip_log_path();
        Self::ensure_parent(&path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(&path)?;
        wtr.write_record(TRIP_LOG_HEADER)?;
        for (index, trip) in trips.iter().enumerate() {
            wtr.serialize(TripRow {
                id: Some(index as u32 + 1),
                date: trip.date.clone(),
                destination: trip.destination.clone(),
                start_time: trip.start_time.clone(),
                end_time: trip.end_time.clone(),
                display_economy: trip.reading.display_economy,
                display_distance: trip.reading.display_distance,
            })?;
        }
        wtr.flush()?;
        tracing::debug!(path = %path.display(), trips = trips.len(), "trip log written");
        Ok(())
    }

    /// Starts a new day: the last trip's reading becomes the baseline, the
    /// baseline date is blanked so it has to be set again, and the trip log
    /// is emptied down to its header. The fuel price is kept.
    ///
    /// Returns `None` and changes nothing when the log holds no trips.
    pub fn rollover(&self) -> Result<Option<Rollover>> {
        let trips = self.trips()?;
        let Some(last) = trips.last() else {
            return Ok(None);
        };

        let init = self.read_init_row()?;
        self.write_init_record(&InitRecord {
            date: String::new(),
            price: init.price,
            reading: last.reading,
        })?;
        self.write_trips(&[])?;

        Ok(Some(Rollover {
            carried: last.reading,
            cleared: trips.len(),
        }))
    }

    fn read_init_row(&self) -> Result<InitRow> {
        let path = self.init_path();
        if !path.exists() {
            msg_bail_anyhow!(Message::InitRecordNotFound(path.display().to_string()));
        }

        let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_path(&path)?;
        let row = rdr
            .deserialize::<InitRow>()
            .next()
            .ok_or_else(|| msg_error_anyhow!(Message::InitRecordNotFound(path.display().to_string())))??;
        Ok(row)
    }
}

impl RecordSource for CsvStore {
    fn init_record(&self) -> Result<InitRecord> {
        Ok(self.read_init_row()?.into())
    }

    fn trips(&self) -> Result<Vec<TripRecord>> {
        let path = self.trip_log_path();
        if !path.exists() {
            msg_bail_anyhow!(Message::TripLogNotFound(path.display().to_string()));
        }

        let mut rdr = ReaderBuilder::new().from_path(&path)?;
        let mut trips = Vec::new();
        for row in rdr.deserialize::<TripRow>() {
            trips.push(TripRecord::from(row?));
        }
        tracing::debug!(path = %path.display(), trips = trips.len(), "trip log loaded");
        Ok(trips)
    }

    fn daily_report_rows(&self, date: NaiveDate) -> Result<Option<Vec<Vec<String>>>> {
        let path = self.daily_report_path(date);
        if !path.exists() {
            return Ok(None);
        }

        let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_path(&path)?;
        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        tracing::debug!(path = %path.display(), rows = rows.len(), "daily report loaded");
        Ok(Some(rows))
    }

    fn monthly_rows(&self, month: MonthKey) -> Result<Vec<MonthlyRow>> {
        let path = self.monthly_report_path(month);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new().from_path(&path)?;
        let mut rows = Vec::new();
        for record in rdr.deserialize::<MonthlyRecord>() {
            rows.push(MonthlyRow::from(record?));
        }
        Ok(rows)
    }
}

impl RecordSink for CsvStore {
    fn write_daily_report(&self, date: NaiveDate, rows: &[ReportRow]) -> Result<PathBuf> {
        let path = self.daily_report_path(date);
        Self::ensure_parent(&path)?;

        let mut wtr = WriterBuilder::new().flexible(true).from_path(&path)?;
        for row in rows {
            wtr.write_record(&row.cells)?;
        }
        wtr.flush()?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "daily report written");
        Ok(path)
    }

    fn append_monthly_row(&self, row: &MonthlyRow) -> Result<PathBuf> {
        let path = self.monthly_report_path(MonthKey::of(row.date));
        Self::ensure_parent(&path)?;

        let is_new = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = WriterBuilder::new().has_headers(is_new).from_writer(file);
        wtr.serialize(MonthlyRecord::from(row))?;
        wtr.flush()?;
        tracing::debug!(path = %path.display(), date = %row.date, new_month = is_new, "monthly row appended");
        Ok(path)
    }
}
