// src/normalize/mod.rs

mod record;
pub mod schema;
mod value;

pub use record::StatLine;
pub use schema::{Field, FieldKind, FIELDS};
pub use value::{Cell, Number};

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::extract::RawTable;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("schema mismatch: expected {expected} columns ({labels}), table has {found}")]
pub struct SchemaMismatch {
    pub expected: usize,
    pub found: usize,
    pub labels: String,
}

/// Records kept plus how many rows were dropped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub records: Vec<StatLine>,
    pub dropped: usize,
}

/// Bind `table` to the declared schema and keep rows with a numeric year
/// and runs. Row order is preserved.
#[instrument(level = "info", skip(table), fields(rows = table.rows.len()))]
pub fn normalize(table: &RawTable) -> Result<Normalized> {
    if table.width() != FIELDS.len() {
        return Err(SchemaMismatch {
            expected: FIELDS.len(),
            found: table.width(),
            labels: schema::labels().join(","),
        }
        .into());
    }
    debug!(page_headers = ?table.headers, "replacing page headers with declared labels");

    let mut out = Normalized::default();
    for (i, row) in table.rows.iter().enumerate() {
        match StatLine::from_row(row) {
            Some(line) => out.records.push(line),
            None => {
                debug!(row = i, year = %row[schema::YEAR], runs = %row[schema::RUNS], "dropping row: year or runs not numeric");
                out.dropped += 1;
            }
        }
    }

    info!(kept = out.records.len(), dropped = out.dropped, "normalized table");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(player: &str, year: &str, team: &str, runs: &str) -> Vec<String> {
        let mut r = vec![String::new(); FIELDS.len()];
        r[schema::PLAYER] = player.into();
        r[schema::YEAR] = year.into();
        r[schema::TEAM] = team.into();
        r[3] = "10".into();
        r[schema::RUNS] = runs.into();
        r[15] = ".300".into();
        r
    }

    fn table(rows: Vec<Vec<String>>) -> RawTable {
        RawTable {
            headers: vec!["x".to_string(); FIELDS.len()],
            rows,
        }
    }

    #[test]
    fn drops_rows_with_non_numeric_year_or_runs() -> Result<()> {
        let t = table(vec![
            row("Bob", "2001", "SF", "5"),
            row("Sue", "abc", "SF", "7"),
            row("Al", "2002", "SF", ""),
            row("Cy", "2003", "NYG", "12"),
        ]);
        let n = normalize(&t)?;
        assert_eq!(n.dropped, 2);
        let players: Vec<_> = n.records.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(players, vec![Some("Bob"), Some("Cy")]);
        Ok(())
    }

    #[test]
    fn keeps_other_columns_as_given() -> Result<()> {
        let mut r = row("Bob", "2001", "SF", "5");
        r[4] = "n/a".into();
        let n = normalize(&table(vec![r]))?;
        let line = &n.records[0];
        assert_eq!(line.year, Number::Int(2001));
        assert_eq!(line.runs, Number::Int(5));
        assert_eq!(line.games, Cell::Number(Number::Int(10)));
        assert_eq!(line.at_bats, Cell::Text("n/a".into()));
        assert_eq!(line.hits, Cell::Null);
        assert_eq!(line.avg, Cell::Number(Number::Real(0.3)));
        Ok(())
    }

    #[test]
    fn header_only_table_normalizes_to_nothing() -> Result<()> {
        let n = normalize(&table(vec![]))?;
        assert!(n.records.is_empty());
        assert_eq!(n.dropped, 0);
        Ok(())
    }

    #[test]
    fn wrong_width_is_a_schema_mismatch() {
        let t = RawTable {
            headers: vec!["PLAYER".into(), "YEAR".into()],
            rows: vec![vec!["Bob".into(), "2001".into()]],
        };
        let err = normalize(&t).unwrap_err();
        let mismatch = err.downcast_ref::<SchemaMismatch>().expect("SchemaMismatch");
        assert_eq!(mismatch.expected, 19);
        assert_eq!(mismatch.found, 2);
        assert!(err.to_string().contains("schema mismatch"));
    }
}
