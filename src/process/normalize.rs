use chrono::NaiveDate;
use tracing::{trace, warn};

use crate::member::{JoinDateSource, MemberRecord};
use crate::process::{DateParser, RawTable};

/// Rows narrower than this carry no join date and are dropped.
pub const MIN_FIELDS: usize = 6;

const FIRST_NAME: usize = 1;
const LAST_NAME: usize = 2;
const EMAIL: usize = 3;
const JOIN_DATE: usize = 5;

/// Map feed rows to member records, in source order.
///
/// - row 0 is the header and never becomes a record
/// - rows with fewer than [`MIN_FIELDS`] fields are skipped silently
/// - an unparseable join date is replaced by `processed_on` and logged
pub fn normalize(table: &RawTable, parser: &DateParser, processed_on: NaiveDate) -> Vec<MemberRecord> {
    table
        .rows
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, row)| normalize_row(idx, row, parser, processed_on))
        .collect()
}

fn normalize_row(
    idx: usize,
    row: &[String],
    parser: &DateParser,
    processed_on: NaiveDate,
) -> Option<MemberRecord> {
    if row.len() < MIN_FIELDS {
        trace!(row = idx, fields = row.len(), "skipping short row");
        return None;
    }

    let raw_date = &row[JOIN_DATE];
    let (join_date, source) = match parser.parse(raw_date) {
        Some((date, layout)) => (date, JoinDateSource::Parsed { layout }),
        None => {
            warn!(
                row = idx,
                value = raw_date.trim(),
                fallback = %processed_on,
                "unable to parse join date, using processing date instead"
            );
            (processed_on, JoinDateSource::Fallback)
        }
    };

    Some(MemberRecord::new(
        &row[FIRST_NAME],
        &row[LAST_NAME],
        &row[EMAIL],
        join_date,
        source,
    ))
}
