// src/normalize/value.rs

use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};
use std::fmt;

/// A numeric cell that parsed cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Parse or mark absent.
    ///
    /// Accepts integers, decimals (`.312`), exponents and `1,234`-style
    /// thousands separators. Empty, non-numeric and non-finite inputs
    /// give `None`.
    pub fn parse(raw: &str) -> Option<Number> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        let s = if s.contains(',') {
            s.replace(',', "")
        } else {
            s.to_string()
        };

        if let Ok(i) = s.parse::<i64>() {
            return Some(Number::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Number::Real(f)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Real(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Real(r) => write!(f, "{:?}", r),
        }
    }
}

impl ToSql for Number {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match *self {
            Number::Int(i) => ToSqlOutput::Owned(Value::Integer(i)),
            Number::Real(f) => ToSqlOutput::Owned(Value::Real(f)),
        })
    }
}

/// A cell bound for storage: whatever the page gave, typed where it parses.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(Number),
    Text(String),
}

impl Cell {
    /// Empty text is `Null`, everything else kept verbatim.
    pub fn text(raw: &str) -> Cell {
        let s = raw.trim();
        if s.is_empty() {
            Cell::Null
        } else {
            Cell::Text(s.to_string())
        }
    }

    /// Numeric when it parses, otherwise the text as given.
    pub fn coerce(raw: &str) -> Cell {
        match Number::parse(raw) {
            Some(n) => Cell::Number(n),
            None => Cell::text(raw),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Number> for Cell {
    fn from(n: Number) -> Self {
        Cell::Number(n)
    }
}

impl ToSql for Cell {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Cell::Null => Ok(ToSqlOutput::Owned(Value::Null)),
            Cell::Number(n) => n.to_sql(),
            Cell::Text(s) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_the_page_uses() {
        assert_eq!(Number::parse("2001"), Some(Number::Int(2001)));
        assert_eq!(Number::parse(" 42 "), Some(Number::Int(42)));
        assert_eq!(Number::parse("1,234"), Some(Number::Int(1234)));
        assert_eq!(Number::parse(".312"), Some(Number::Real(0.312)));
        assert_eq!(Number::parse("1.045"), Some(Number::Real(1.045)));
    }

    #[test]
    fn non_numeric_is_absent() {
        for s in ["", "   ", "abc", "-", "--", "2001a", "NaN", "inf", ","] {
            assert_eq!(Number::parse(s), None, "{:?} should be absent", s);
        }
    }

    #[test]
    fn coerce_keeps_text_as_given() {
        assert_eq!(Cell::coerce("7"), Cell::Number(Number::Int(7)));
        assert_eq!(Cell::coerce("-.--"), Cell::Text("-.--".into()));
        assert_eq!(Cell::coerce(""), Cell::Null);
        assert_eq!(Cell::text(" SF "), Cell::Text("SF".into()));
    }

    #[test]
    fn display_matches_stored_form() {
        assert_eq!(Number::Int(5).to_string(), "5");
        assert_eq!(Number::Real(0.3).to_string(), "0.3");
        assert_eq!(Number::Real(2001.0).to_string(), "2001.0");
    }
}
