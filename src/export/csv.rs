//! CSV export
//!
//! Serializes an expense collection (or any filtered view of one) to
//! delimited text with a fixed column order. An optional byte-order-mark
//! prefix keeps spreadsheet applications happy with UTF-8 content.

use csv::Writer;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Expense;

/// The fixed export column order
pub const CSV_HEADER: [&str; 5] = ["id", "date", "category", "amount", "memo"];

/// Serialize expenses to CSV text
///
/// Accepts any slice, so callers can export the full ledger or a filtered
/// view. With `with_bom` the text is prefixed with U+FEFF.
pub fn write_expenses(expenses: &[Expense], with_bom: bool) -> KakeiboResult<String> {
    let mut writer = Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

    for expense in expenses {
        writer
            .write_record([
                expense.id.as_str(),
                &expense.date.to_string(),
                expense.category.as_str(),
                &expense.amount.to_string(),
                expense.memo.as_deref().unwrap_or(""),
            ])
            .map_err(|e| KakeiboError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    let text =
        String::from_utf8(bytes).map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(if with_bom {
        format!("\u{feff}{}", text)
    } else {
        text
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, NewExpense};
    use crate::services::import::parse_expenses_csv;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            NewExpense::new(date(2025, 1, 15), Category::Food, Money::from_units(1000))
                .with_memo("lunch")
                .into_expense(ExpenseId::from_raw("e1")),
            NewExpense::new(date(2025, 1, 20), Category::Rent, Money::from_units(80_000))
                .into_expense(ExpenseId::from_raw("e2")),
        ]
    }

    #[test]
    fn test_header_and_rows() {
        let text = write_expenses(&sample(), false).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("id,date,category,amount,memo"));
        assert_eq!(lines.next(), Some("e1,2025-01-15,food,1000,lunch"));
        assert_eq!(lines.next(), Some("e2,2025-01-20,rent,80000,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_bom_prefix() {
        let plain = write_expenses(&sample(), false).unwrap();
        let with_bom = write_expenses(&sample(), true).unwrap();

        assert!(!plain.starts_with('\u{feff}'));
        assert!(with_bom.starts_with('\u{feff}'));
        assert_eq!(with_bom.trim_start_matches('\u{feff}'), plain);
    }

    #[test]
    fn test_memo_with_comma_is_quoted() {
        let expenses = vec![NewExpense::new(
            date(2025, 1, 15),
            Category::Other,
            Money::from_units(500),
        )
        .with_memo("coffee, to go")
        .into_expense(ExpenseId::from_raw("e1"))];

        let text = write_expenses(&expenses, false).unwrap();
        assert!(text.contains("\"coffee, to go\""));

        let back = parse_expenses_csv(&text);
        assert!(back.errors.is_empty());
        assert_eq!(back.rows[0].memo.as_deref(), Some("coffee, to go"));
    }

    #[test]
    fn test_empty_collection_is_header_only() {
        let text = write_expenses(&[], false).unwrap();
        assert_eq!(text.trim_end(), "id,date,category,amount,memo");
    }

    #[test]
    fn test_encode_decode_round_trip_ignoring_ids() {
        let expenses = sample();
        let text = write_expenses(&expenses, true).unwrap();

        let decoded = parse_expenses_csv(&text);
        assert!(decoded.errors.is_empty());
        assert_eq!(decoded.rows.len(), expenses.len());
        for (row, original) in decoded.rows.iter().zip(&expenses) {
            assert_eq!(row.date, original.date);
            assert_eq!(row.category, original.category);
            assert_eq!(row.amount, original.amount);
            assert_eq!(row.memo, original.memo);
        }
    }
}
