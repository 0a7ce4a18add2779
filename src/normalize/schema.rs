// src/normalize/schema.rs

/// Storage class a column is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
}

impl FieldKind {
    pub fn sql_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "TEXT",
            FieldKind::Integer => "INTEGER",
            FieldKind::Real => "REAL",
        }
    }
}

/// One declared column: the page label it binds to and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

const fn field(label: &'static str, column: &'static str, kind: FieldKind) -> Field {
    Field {
        label,
        column,
        kind,
    }
}

/// Positional layout of the stats table, left to right.
pub const FIELDS: [Field; 19] = [
    field("PLAYER", "player", FieldKind::Text),
    field("YEAR", "year", FieldKind::Integer),
    field("TEAM", "team", FieldKind::Text),
    field("G", "games", FieldKind::Integer),
    field("AB", "at_bats", FieldKind::Integer),
    field("R", "runs", FieldKind::Integer),
    field("H", "hits", FieldKind::Integer),
    field("2B", "doubles", FieldKind::Integer),
    field("3B", "triples", FieldKind::Integer),
    field("HR", "home_runs", FieldKind::Integer),
    field("RBI", "rbi", FieldKind::Integer),
    field("BB", "walks", FieldKind::Integer),
    field("SO", "strikeouts", FieldKind::Integer),
    field("SB", "stolen_bases", FieldKind::Integer),
    field("CS", "caught_stealing", FieldKind::Integer),
    field("AVG", "avg", FieldKind::Real),
    field("OBP", "obp", FieldKind::Real),
    field("SLG", "slg", FieldKind::Real),
    field("OPS", "ops", FieldKind::Real),
];

pub const PLAYER: usize = 0;
pub const YEAR: usize = 1;
pub const TEAM: usize = 2;
pub const RUNS: usize = 5;

/// Column index of a declared label.
pub fn position(label: &str) -> Option<usize> {
    FIELDS.iter().position(|f| f.label == label)
}

pub fn labels() -> Vec<String> {
    FIELDS.iter().map(|f| f.label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_and_columns_are_unique() {
        let labels: HashSet<_> = FIELDS.iter().map(|f| f.label).collect();
        let columns: HashSet<_> = FIELDS.iter().map(|f| f.column).collect();
        assert_eq!(labels.len(), FIELDS.len());
        assert_eq!(columns.len(), FIELDS.len());
    }

    #[test]
    fn required_columns_sit_where_the_page_has_them() {
        assert_eq!(position("PLAYER"), Some(PLAYER));
        assert_eq!(position("YEAR"), Some(YEAR));
        assert_eq!(position("TEAM"), Some(TEAM));
        assert_eq!(position("R"), Some(RUNS));
        assert_eq!(position("OPS"), Some(18));
        assert_eq!(position("ERA"), None);
    }
}
