use rusqlite::types::Value;
use std::fmt;

/// A row read back verbatim: surrogate id, then the declared columns.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    pub id: i64,
    pub values: Vec<Value>,
}

impl fmt::Display for StoredRow {
    /// Tuple form, e.g. `(1, 'Bob', 2001, 'SF', None, 0.3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.id)?;
        for v in &self.values {
            f.write_str(", ")?;
            match v {
                Value::Null => f.write_str("None")?,
                Value::Integer(i) => write!(f, "{}", i)?,
                Value::Real(r) => write!(f, "{:?}", r)?,
                Value::Text(s) => write!(f, "'{}'", s.replace('\'', "\\'"))?,
                Value::Blob(b) => write!(f, "<{} bytes>", b.len())?,
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_tuple() {
        let row = StoredRow {
            id: 3,
            values: vec![
                Value::Text("O'Neil".into()),
                Value::Integer(2001),
                Value::Null,
                Value::Real(0.3),
                Value::Real(12.0),
            ],
        };
        assert_eq!(row.to_string(), r"(3, 'O\'Neil', 2001, None, 0.3, 12.0)");
    }
}
