use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Pretty-prints `value` as JSON into `path`.
pub fn export_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(json.as_bytes()).map_err(io_err)?;
    info!(path = %path.display(), bytes = json.len(), "wrote json");
    Ok(())
}
