// src/normalize/record.rs

use rusqlite::types::ToSql;

use super::schema::{FIELDS, PLAYER, RUNS, TEAM, YEAR};
use super::value::{Cell, Number};

/// One player-season batting line after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub player: Cell,
    pub year: Number,
    pub team: Cell,
    pub games: Cell,
    pub at_bats: Cell,
    pub runs: Number,
    pub hits: Cell,
    pub doubles: Cell,
    pub triples: Cell,
    pub home_runs: Cell,
    pub rbi: Cell,
    pub walks: Cell,
    pub strikeouts: Cell,
    pub stolen_bases: Cell,
    pub caught_stealing: Cell,
    pub avg: Cell,
    pub obp: Cell,
    pub slg: Cell,
    pub ops: Cell,
}

impl StatLine {
    /// Bind a padded row positionally. `None` when year or runs is absent.
    pub fn from_row(row: &[String]) -> Option<StatLine> {
        debug_assert_eq!(row.len(), FIELDS.len());
        let year = Number::parse(&row[YEAR])?;
        let runs = Number::parse(&row[RUNS])?;
        let c = |i: usize| Cell::coerce(&row[i]);

        Some(StatLine {
            player: Cell::text(&row[PLAYER]),
            year,
            team: Cell::text(&row[TEAM]),
            games: c(3),
            at_bats: c(4),
            runs,
            hits: c(6),
            doubles: c(7),
            triples: c(8),
            home_runs: c(9),
            rbi: c(10),
            walks: c(11),
            strikeouts: c(12),
            stolen_bases: c(13),
            caught_stealing: c(14),
            avg: c(15),
            obp: c(16),
            slg: c(17),
            ops: c(18),
        })
    }

    /// Values in `FIELDS` order, ready for positional binding.
    pub fn sql_values(&self) -> [&dyn ToSql; 19] {
        [
            &self.player,
            &self.year,
            &self.team,
            &self.games,
            &self.at_bats,
            &self.runs,
            &self.hits,
            &self.doubles,
            &self.triples,
            &self.home_runs,
            &self.rbi,
            &self.walks,
            &self.strikeouts,
            &self.stolen_bases,
            &self.caught_stealing,
            &self.avg,
            &self.obp,
            &self.slg,
            &self.ops,
        ]
    }
}
