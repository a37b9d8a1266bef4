use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_rows<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: &T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(data));
    }
    Ok(())
}

/// Terminal failure path: structured on stdout in JSON mode so a failed
/// action still produces a machine-readable envelope, plain on stderr
/// otherwise.
pub fn print_failure(json: bool, err: &anyhow::Error) {
    if json {
        println!(
            "{}",
            serde_json::json!({ "ok": false, "error": format!("{err:#}") })
        );
    } else {
        eprintln!("error: {err:#}");
    }
}
