//! CSV validation and per-product summation.

use crate::domain::error::AggregationError;
use crate::domain::model::CsvRow;

/// Sum of matching quantities, or the first defect found.
pub type AggregationResult = Result<i64, AggregationError>;

/// Sum the quantities of every row in `lines` whose key equals `product`.
///
/// `lines[0]` is the header and is skipped without being looked at. Every
/// other line must hold exactly two comma-separated fields. Quantities are
/// parsed only on matching rows, so a non-numeric quantity under another key
/// is accepted. Scanning stops at the first defect.
///
/// # Errors
/// - [`AggregationError::EmptyDocument`] if `lines` is empty
/// - [`AggregationError::FieldCount`] for a row without exactly two fields
/// - [`AggregationError::InvalidQuantity`] for a matching row whose quantity
///   is not a base-10 integer
/// - [`AggregationError::Overflow`] if the running total leaves the `i64` range
pub fn aggregate<S: AsRef<str>>(lines: &[S], product: &str) -> AggregationResult {
    if lines.is_empty() {
        return Err(AggregationError::EmptyDocument);
    }

    let mut total: i64 = 0;
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let line = line.as_ref();
        let line_no = idx + 1;

        let row = CsvRow::parse(line).map_err(|fields| AggregationError::FieldCount {
            line: line_no,
            fields,
            content: line.to_owned(),
        })?;

        if row.key != product {
            continue;
        }

        let quantity: i64 = row
            .quantity
            .parse()
            .map_err(|_| AggregationError::InvalidQuantity {
                line: line_no,
                value: row.quantity.to_owned(),
            })?;

        total = total
            .checked_add(quantity)
            .ok_or(AggregationError::Overflow { line: line_no })?;
    }

    Ok(total)
}
