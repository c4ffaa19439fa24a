use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{errors::LedgerError, ledger::Transaction};

const TMP_SUFFIX: &str = "tmp";

/// Loads the snapshot at `path`. A missing file is the bootstrap case and
/// yields an empty ledger; a source that exists but cannot be read or does
/// not decode is reported as `CorruptData` instead of being silently
/// discarded. `WriteFailure` is reserved for the save side.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(LedgerError::CorruptData(err.to_string())),
    };
    serde_json::from_str(&data).map_err(|err| LedgerError::CorruptData(err.to_string()))
}

/// Writes the full snapshot, overwriting prior contents. The document is
/// staged through a temporary file and renamed into place so a failed write
/// never truncates the previous snapshot.
pub fn save_transactions(transactions: &[Transaction], path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(transactions)
        .map_err(|err| LedgerError::CorruptData(err.to_string()))?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Sibling staging path: `ledger.json` -> `ledger.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
