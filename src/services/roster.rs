use anyhow::{bail, Context};
use std::path::Path;

/// A locally validated roster CSV, ready for upload.
#[derive(Debug, Clone)]
pub struct RosterFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub data_rows: usize,
}

/// Reads and validates a roster CSV before any request is issued: the file
/// must exist, carry a `.csv` extension, and hold more than whitespace.
pub fn load_roster_file(path: &Path) -> anyhow::Result<RosterFile> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        bail!("roster file must be a .csv file: {}", path.display());
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("read roster file {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    if text.trim().is_empty() {
        bail!("roster file is empty: {}", path.display());
    }

    let data_rows = count_data_rows(&text);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "roster.csv".to_string());

    Ok(RosterFile {
        file_name,
        bytes,
        data_rows,
    })
}

/// Counts non-empty lines, excluding the name/number/size header row when
/// one is present.
fn count_data_rows(text: &str) -> usize {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let Some(first) = lines.next() else { return 0 };
    let rest = lines.count();
    if first.to_ascii_lowercase().contains("name") {
        rest
    } else {
        rest + 1
    }
}
