// src/store/mod.rs

mod row;

pub use row::StoredRow;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rusqlite::{params, params_from_iter, types::Value, Connection};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::config::STATS_TABLE;
use crate::normalize::{StatLine, FIELDS};

static CREATE_SQL: Lazy<String> = Lazy::new(|| {
    let cols: Vec<String> = FIELDS
        .iter()
        .map(|f| format!("    {} {}", f.column, f.kind.sql_type()))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    id INTEGER PRIMARY KEY AUTOINCREMENT,\n{}\n)",
        STATS_TABLE,
        cols.join(",\n")
    )
});

static INSERT_SQL: Lazy<String> = Lazy::new(|| {
    let cols: Vec<&str> = FIELDS.iter().map(|f| f.column).collect();
    let marks: Vec<String> = (1..=FIELDS.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        STATS_TABLE,
        cols.join(", "),
        marks.join(", ")
    )
});

/// Append-only SQLite store for stat lines. The connection is closed
/// when the store is dropped or [`StatsStore::close`] is called.
pub struct StatsStore {
    conn: Connection,
}

impl StatsStore {
    /// Open a database on disk at `path`, creating the file if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        info!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory database")?;
        Ok(Self { conn })
    }

    /// Create the stats table unless it is already there.
    pub fn ensure_schema(&self) -> Result<()> {
        debug!(sql = %CREATE_SQL.as_str(), "ensuring schema");
        self.conn
            .execute(&CREATE_SQL, [])
            .with_context(|| format!("creating table {}", STATS_TABLE))?;
        Ok(())
    }

    /// One INSERT per record inside a single transaction, committed at the
    /// end. Any failed insert rolls back everything this call wrote.
    #[instrument(level = "info", skip(self, records), fields(records = records.len()))]
    pub fn insert_all(&mut self, records: &[StatLine]) -> Result<usize> {
        let tx = self
            .conn
            .transaction()
            .context("starting insert transaction")?;
        {
            let mut stmt = tx.prepare(&INSERT_SQL).context("preparing insert")?;
            for (i, rec) in records.iter().enumerate() {
                stmt.execute(params_from_iter(rec.sql_values()))
                    .with_context(|| {
                        format!(
                            "inserting record {} (player {:?}, year {})",
                            i, rec.player, rec.year
                        )
                    })?;
            }
        }
        tx.commit().context("committing inserts")?;
        info!(inserted = records.len(), "stored records");
        Ok(records.len())
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", STATS_TABLE), [], |r| {
                r.get(0)
            })
            .context("counting rows")?;
        Ok(n as usize)
    }

    /// First `limit` rows in storage order (no ORDER BY).
    pub fn head(&self, limit: usize) -> Result<Vec<StoredRow>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} LIMIT ?1", STATS_TABLE))
            .context("preparing head query")?;
        let width = stmt.column_count();
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                let id: i64 = row.get(0)?;
                let values = (1..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(StoredRow { id, values })
            })
            .context("querying head")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("reading head rows")?;
        Ok(rows)
    }

    /// `(year, runs)` for one team, ascending by year.
    pub fn runs_by_year(&self, team: &str) -> Result<Vec<(f64, f64)>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT year, runs FROM {} WHERE team = ?1 ORDER BY year",
                STATS_TABLE
            ))
            .context("preparing series query")?;
        let series = stmt
            .query_map(params![team], |row| Ok((row.get(0)?, row.get(1)?)))
            .context("querying series")?
            .collect::<rusqlite::Result<Vec<(f64, f64)>>>()
            .with_context(|| format!("reading series for team {}", team))?;
        debug!(team, points = series.len(), "queried runs by year");
        Ok(series)
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("closing database")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{Cell, Number};
    use tempfile::tempdir;

    fn line(player: &str, year: i64, team: &str, runs: i64) -> StatLine {
        StatLine {
            player: Cell::Text(player.into()),
            year: Number::Int(year),
            team: Cell::Text(team.into()),
            games: Cell::Number(Number::Int(100)),
            at_bats: Cell::Null,
            runs: Number::Int(runs),
            hits: Cell::Null,
            doubles: Cell::Null,
            triples: Cell::Null,
            home_runs: Cell::Null,
            rbi: Cell::Null,
            walks: Cell::Null,
            strikeouts: Cell::Null,
            stolen_bases: Cell::Null,
            caught_stealing: Cell::Null,
            avg: Cell::Number(Number::Real(0.3)),
            obp: Cell::Null,
            slg: Cell::Null,
            ops: Cell::Text("-.--".into()),
        }
    }

    #[test]
    fn schema_is_idempotent() -> Result<()> {
        let store = StatsStore::open_in_memory()?;
        store.ensure_schema()?;
        store.ensure_schema()?;
        assert_eq!(store.count()?, 0);
        Ok(())
    }

    #[test]
    fn stores_every_record_and_reads_back_literally() -> Result<()> {
        let mut store = StatsStore::open_in_memory()?;
        store.ensure_schema()?;
        let recs = vec![line("Bob", 2001, "SF", 5), line("Sue", 2002, "SF", 7)];
        assert_eq!(store.insert_all(&recs)?, 2);
        assert_eq!(store.count()?, 2);

        let head = store.head(5)?;
        assert_eq!(head.len(), 2);
        assert_eq!(head[0].id, 1);
        assert_eq!(head[0].values.len(), FIELDS.len());
        assert_eq!(head[0].values[0], Value::Text("Bob".into()));
        assert_eq!(head[0].values[1], Value::Integer(2001));
        assert_eq!(head[0].values[5], Value::Integer(5));
        assert_eq!(head[0].values[15], Value::Real(0.3));
        assert_eq!(head[0].values[18], Value::Text("-.--".into()));
        Ok(())
    }

    #[test]
    fn head_respects_limit() -> Result<()> {
        let mut store = StatsStore::open_in_memory()?;
        store.ensure_schema()?;
        let recs: Vec<_> = (0..8).map(|i| line("P", 2000 + i, "SF", i)).collect();
        store.insert_all(&recs)?;
        assert_eq!(store.head(5)?.len(), 5);
        Ok(())
    }

    #[test]
    fn reopening_appends_duplicates() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stats.db");
        let recs = vec![line("Bob", 2001, "SF", 5), line("Sue", 2002, "SF", 7)];

        for _ in 0..2 {
            let mut store = StatsStore::open(&path)?;
            store.ensure_schema()?;
            store.insert_all(&recs)?;
            store.close()?;
        }

        let store = StatsStore::open(&path)?;
        assert_eq!(store.count()?, 4);
        Ok(())
    }

    #[test]
    fn series_is_filtered_and_ordered() -> Result<()> {
        let mut store = StatsStore::open_in_memory()?;
        store.ensure_schema()?;
        store.insert_all(&[
            line("A", 2005, "SF", 50),
            line("B", 2001, "SF", 10),
            line("C", 2003, "NYG", 99),
            line("D", 2003, "SF", 30),
            line("E", 2002, "sf", 77),
        ])?;

        let series = store.runs_by_year("SF")?;
        assert_eq!(series, vec![(2001.0, 10.0), (2003.0, 30.0), (2005.0, 50.0)]);
        assert!(series.windows(2).all(|w| w[0].0 <= w[1].0));
        assert!(store.runs_by_year("LAD")?.is_empty());
        Ok(())
    }
}
