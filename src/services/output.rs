use crate::domain::models::JsonOut;
use serde::Serialize;

/// Prints a result list. JSON mode always emits the envelope, including an
/// empty `data` array; text mode prints `empty` (when non-blank) instead of
/// zero rows, so callers do not special-case empty query results.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    empty: &str,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else if data.is_empty() {
        if !empty.is_empty() {
            println!("{}", empty);
        }
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
