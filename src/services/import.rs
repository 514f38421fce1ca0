//! CSV import service
//!
//! Decodes headered CSV text into expense inputs. Row-level faults never
//! abort the import: invalid rows are excluded and reported per row, and a
//! file yielding zero valid rows plus only errors is a normal outcome, not
//! an exceptional one.

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::KakeiboResult;
use crate::models::{Category, Expense, Money, NewExpense};
use crate::store::LedgerStore;

/// Result of decoding a CSV file: valid rows plus per-row error messages
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Rows that passed validation, in file order
    pub rows: Vec<NewExpense>,
    /// One message per rejected row, `"Row N: reason"` with 1-based data
    /// row numbers, plus any structural reader faults
    pub errors: Vec<String>,
}

/// Column indices resolved from the normalized header row
struct ColumnIndices {
    date: usize,
    category: usize,
    amount: usize,
    memo: Option<usize>,
}

/// Decode expenses from CSV text
///
/// Header names are trimmed and lowercased before matching. An `id` column
/// is tolerated and ignored; ids are reassigned on insert. A leading
/// byte-order-mark is tolerated.
pub fn parse_expenses_csv(text: &str) -> CsvImport {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            return CsvImport {
                rows: Vec::new(),
                errors: vec![format!("CSV parse error: {}", e)],
            }
        }
    };

    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().to_lowercase() == name)
    };

    let columns = match (find("date"), find("category"), find("amount")) {
        (Some(date), Some(category), Some(amount)) => ColumnIndices {
            date,
            category,
            amount,
            memo: find("memo"),
        },
        _ => {
            return CsvImport {
                rows: Vec::new(),
                errors: vec!["CSV parse error: missing required column (date, category, amount)"
                    .to_string()],
            }
        }
    };

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let row_number = idx + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                errors.push(format!("Row {}: {}", row_number, e));
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(row) => rows.push(row),
            Err(reason) => errors.push(format!("Row {}: {}", row_number, reason)),
        }
    }

    CsvImport { rows, errors }
}

fn parse_row(record: &csv::StringRecord, columns: &ColumnIndices) -> Result<NewExpense, String> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let date_raw = field(columns.date);
    if date_raw.is_empty() {
        return Err("date is required".into());
    }
    let date = parse_date(date_raw).ok_or_else(|| format!("invalid date: {}", date_raw))?;

    let category: Category = field(columns.category).parse()?;

    let amount_raw = field(columns.amount);
    let amount = Money::parse(amount_raw)
        .map_err(|_| format!("invalid amount: {}", amount_raw))?;
    if amount.is_negative() {
        return Err(format!("amount must be non-negative: {}", amount_raw));
    }

    let memo = columns
        .memo
        .map(|idx| field(idx))
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    Ok(NewExpense {
        date,
        category,
        amount,
        memo,
    })
}

/// Accept plain ISO dates as well as ISO datetimes, keeping the date part
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Decode CSV text and bulk-insert the valid rows into the ledger
///
/// One history commit covers the whole batch. Returns the created records
/// alongside the per-row errors.
pub fn import_into(
    store: &mut LedgerStore,
    text: &str,
) -> KakeiboResult<(Vec<Expense>, Vec<String>)> {
    let CsvImport { rows, errors } = parse_expenses_csv(text);

    store.commit();
    let created = store.add_many(rows)?;
    Ok((created, errors))
}
