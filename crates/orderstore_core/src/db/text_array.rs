//! Array-of-text column type for SQLite.
//!
//! SQLite has no native array type, so the array is stored in a `TEXT` column
//! as a JSON array of strings. Each element is kept verbatim; callers decide
//! what the element texts mean.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

/// Bindable/scannable wrapper around an ordered list of text values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArray(pub Vec<String>);

impl TextArray {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TextArray {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl ToSql for TextArray {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let encoded = serde_json::to_string(&self.0)
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
        Ok(ToSqlOutput::Owned(Value::Text(encoded)))
    }
}

impl FromSql for TextArray {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        serde_json::from_str::<Vec<String>>(text)
            .map(Self)
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::TextArray;
    use rusqlite::Connection;

    fn echo(conn: &Connection, value: &TextArray) -> rusqlite::Result<TextArray> {
        conn.query_row("SELECT ?1;", [value], |row| row.get(0))
    }

    #[test]
    fn binds_as_json_array_text() {
        let conn = Connection::open_in_memory().unwrap();
        let value = TextArray(vec!["a".to_string(), r#"{"k":"v"}"#.to_string()]);
        let stored: String = conn
            .query_row("SELECT ?1;", [&value], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, r#"["a","{\"k\":\"v\"}"]"#);
        assert_eq!(echo(&conn, &value).unwrap(), value);
    }

    #[test]
    fn empty_array_scans_back_empty() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(echo(&conn, &TextArray::default()).unwrap(), TextArray::default());
    }

    #[test]
    fn scan_rejects_text_that_is_not_a_string_array() {
        let conn = Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<TextArray> =
            conn.query_row("SELECT '[1, 2]';", [], |row| row.get(0));
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }

    #[test]
    fn scan_rejects_non_text_values() {
        let conn = Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<TextArray> =
            conn.query_row("SELECT 42;", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
