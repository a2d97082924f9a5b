// src/process/mod.rs
use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::{debug, trace};

use crate::error::{FeedError, Result};

pub mod date_parser;
pub mod normalize;
pub mod raw_table;

pub use date_parser::{DateLayout, DateParser};
pub use normalize::normalize;
pub use raw_table::RawTable;

/// Split a comma-delimited payload into rows of fields.
///
/// No header handling happens here: row 0 is returned like any other.
/// Rows may have differing field counts.
#[tracing::instrument(level = "debug", skip(data), fields(bytes = data.len()))]
pub fn load_table(data: &[u8]) -> Result<RawTable> {
    check_quoting(data)?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true) // keep this so records with different field-counts work
        .from_reader(Cursor::new(data));

    let mut table = RawTable::default();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .map_err(|e| FeedError::malformed(format!("CSV parse error at record {}: {}", idx, e)))?;
        trace!(idx, fields = record.len(), "read row");
        table.rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(rows = table.len(), "parsed table");
    Ok(table)
}

#[derive(Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// a `"` seen inside a quoted field: either the close or half of `""`
    QuoteInQuoted,
}

/// Strict quote rules, which the `csv` reader does not enforce: a `"` may
/// open a field, appear doubled inside a quoted field, or close a quoted
/// field right before a delimiter, line break or end of input.
fn check_quoting(data: &[u8]) -> Result<()> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1usize;
    let mut opened_on = 0usize;

    for &b in data {
        let boundary = b == b',' || b == b'\n' || b == b'\r';
        state = match state {
            QuoteState::FieldStart if b == b'"' => {
                opened_on = line;
                QuoteState::Quoted
            }
            QuoteState::FieldStart | QuoteState::Unquoted if boundary => QuoteState::FieldStart,
            QuoteState::FieldStart | QuoteState::Unquoted if b == b'"' => {
                return Err(FeedError::malformed(format!(
                    "bare quote in unquoted field on line {}",
                    line
                )));
            }
            QuoteState::FieldStart | QuoteState::Unquoted => QuoteState::Unquoted,
            QuoteState::Quoted if b == b'"' => QuoteState::QuoteInQuoted,
            QuoteState::Quoted => QuoteState::Quoted,
            QuoteState::QuoteInQuoted if b == b'"' => QuoteState::Quoted,
            QuoteState::QuoteInQuoted if boundary => QuoteState::FieldStart,
            QuoteState::QuoteInQuoted => {
                return Err(FeedError::malformed(format!(
                    "extraneous text after closing quote on line {}",
                    line
                )));
            }
        };
        if b == b'\n' {
            line += 1;
        }
    }

    if state == QuoteState::Quoted {
        return Err(FeedError::malformed(format!(
            "unterminated quoted field opened on line {}",
            opened_on
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn splits_rows_and_keeps_ragged_widths() -> Result<()> {
        let data = b"H1,H2,H3,H4,H5,H6\nx,Ann,Lee,ann@x.com,y,15/03/2023\nx,Bo,Kim,bo@x.com\n";
        let table = load_table(data)?;
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0], vec!["H1", "H2", "H3", "H4", "H5", "H6"]);
        assert_eq!(table.rows[1][1], "Ann");
        assert_eq!(table.rows[2].len(), 4);
        Ok(())
    }

    #[test]
    fn quoted_fields_may_contain_commas_and_escaped_quotes() -> Result<()> {
        let data = b"id,first\n1,\"Smith, \"\"Jo\"\"\"\n";
        let table = load_table(data)?;
        assert_eq!(table.rows[1], vec!["1", "Smith, \"Jo\""]);
        Ok(())
    }

    #[test]
    fn quoted_fields_may_span_lines_and_end_the_payload() -> Result<()> {
        let table = load_table(b"a,b\n\"two\nlines\",\"last\"")?;
        assert_eq!(table.rows[1], vec!["two\nlines", "last"]);
        Ok(())
    }

    #[test]
    fn crlf_line_endings_are_accepted() -> Result<()> {
        let table = load_table(b"a,b\r\nc,d\r\n")?;
        assert_eq!(table.rows, vec![vec!["a", "b"], vec!["c", "d"]]);
        Ok(())
    }

    #[test]
    fn empty_payload_gives_empty_table() -> Result<()> {
        assert!(load_table(b"")?.is_empty());
        Ok(())
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let err = load_table(b"a,b\n1,\"open field\n2,3\n").unwrap_err();
        assert!(
            matches!(err, FeedError::MalformedTable { ref reason } if reason.contains("opened on line 2"))
        );
    }

    #[test]
    fn unterminated_quote_with_a_later_stray_quote_is_malformed() {
        // the second quote pairs up with the unclosed one; a lenient reader
        // would fold Bo's row into Ann's
        let data = b"h,h,h,h,h,h\n\
x,\"Ann,Lee,a@b,y,01/01/2020\n\
x,Bo,Kim,b@x,5\" tall,02/01/2020\n\
x,Cy,Doe,c@x,y,03/01/2020\n";
        let err = load_table(data).unwrap_err();
        assert!(
            matches!(err, FeedError::MalformedTable { ref reason } if reason.contains("after closing quote on line 3"))
        );
    }

    #[test]
    fn bare_quote_in_unquoted_field_is_malformed() {
        let err = load_table(b"h,h\nBo,5\" tall\n").unwrap_err();
        assert!(
            matches!(err, FeedError::MalformedTable { ref reason } if reason.contains("bare quote"))
        );
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = load_table(b"a,b\n1,\xff\xfe\n").unwrap_err();
        assert!(matches!(err, FeedError::MalformedTable { ref reason } if reason.contains("record 1")));
    }
}
