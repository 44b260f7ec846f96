//! Writing command results as JSON or CSV.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, shaped like the dashboard's chart inputs
    #[default]
    Json,
    /// One CSV row per point, with headers
    Csv,
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write rows as CSV with a header taken from the row's field names.
pub fn write_csv<W: Write, T: Serialize>(out: &mut W, rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        date: &'static str,
        value: f64,
    }

    #[test]
    fn test_write_csv_with_header() {
        let mut buf = Vec::new();
        let rows = [
            Row { date: "2024-01-01", value: 1.5 },
            Row { date: "2024-01-02", value: -2.0 },
        ];
        write_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "date,value\n2024-01-01,1.5\n2024-01-02,-2.0\n");
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[1.0, 2.5]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("]\n"));
        let parsed: Vec<f64> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![1.0, 2.5]);
    }
}
