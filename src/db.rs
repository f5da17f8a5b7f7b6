use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::{GpaintError, Result};
use crate::model::SCHEMA_VERSION;
use crate::store::Contributions;

/// Pattern database: one JSON day array per year.
pub struct PatternDb {
    conn: Connection,
}

impl PatternDb {
    /// Open (creating if needed) the database under `store_path`, defaulting
    /// to the platform data directory with a working-directory fallback.
    pub fn new<P: AsRef<Path>>(store_path: Option<P>) -> Result<Self> {
        let dir = match store_path {
            Some(path) => path.as_ref().to_path_buf(),
            None => default_dir(),
        };
        std::fs::create_dir_all(&dir)?;
        let db_path = dir.join("patterns.db");
        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS patterns (
                year INTEGER PRIMARY KEY,
                days TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            ",
        )?;
        self.check_schema_version()?;
        Ok(())
    }

    fn check_schema_version(&mut self) -> Result<()> {
        let user_version: i64 = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if user_version == 0 {
            let set_stmt = format!("PRAGMA user_version = {SCHEMA_VERSION};");
            self.conn.execute_batch(&set_stmt)?;
        } else if user_version != SCHEMA_VERSION as i64 {
            return Err(GpaintError::Store(format!(
                "Schema version mismatch: expected {}, found {}",
                SCHEMA_VERSION, user_version
            )));
        }

        Ok(())
    }

    /// Serialize and upsert the pattern under its year.
    pub fn save(&mut self, contributions: &Contributions) -> Result<()> {
        let days = contributions.serialize()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO patterns (year, days, updated_at) VALUES (?, ?, ?)",
            params![contributions.year(), days, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// Load the stored pattern for `year`. A missing row is `None`; so is a
    /// blob that no longer validates against the year's current day count
    /// (legacy data is treated as absent rather than truncated or padded).
    pub fn load(&self, year: i32) -> Result<Option<Contributions>> {
        let result = self.conn.query_row(
            "SELECT days FROM patterns WHERE year = ?",
            params![year],
            |row| row.get::<_, String>(0),
        );
        let days = match result {
            Ok(days) => days,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match Contributions::deserialize(year, &days) {
            Ok(contributions) => Ok(Some(contributions)),
            Err(GpaintError::Parse(_) | GpaintError::Validation(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn default_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("gpaint"))
        .unwrap_or_else(|| PathBuf::from(".gpaint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut db = PatternDb::new(Some(dir.path())).unwrap();
        let mut c = Contributions::new(2024);
        c.toggle(3).unwrap();
        c.set_message(3, "First brush stroke").unwrap();
        db.save(&c).unwrap();

        let loaded = db.load(2024).unwrap().unwrap();
        assert_eq!(loaded, c);
    }

    #[test]
    fn missing_year_loads_as_absent() {
        let dir = tempdir().unwrap();
        let db = PatternDb::new(Some(dir.path())).unwrap();
        assert!(db.load(1999).unwrap().is_none());
    }

    #[test]
    fn legacy_wrong_length_blob_loads_as_absent() {
        let dir = tempdir().unwrap();
        let db = PatternDb::new(Some(dir.path())).unwrap();
        // a 365-entry blob stored under a leap year no longer validates
        let stale = Contributions::new(2023).serialize().unwrap();
        db.conn
            .execute(
                "INSERT INTO patterns (year, days, updated_at) VALUES (?, ?, 0)",
                params![2024, stale],
            )
            .unwrap();
        assert!(db.load(2024).unwrap().is_none());
    }

    #[test]
    fn save_overwrites_the_previous_pattern() {
        let dir = tempdir().unwrap();
        let mut db = PatternDb::new(Some(dir.path())).unwrap();
        let mut c = Contributions::new(2023);
        c.toggle(0).unwrap();
        db.save(&c).unwrap();
        c.toggle(0).unwrap();
        db.save(&c).unwrap();

        let loaded = db.load(2023).unwrap().unwrap();
        assert_eq!(loaded.active_count(), 0);
    }
}
