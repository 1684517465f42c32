use std::path::{Path, PathBuf};

/// Suffix appended to the full file name of the target.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Path of the backup artifact for `target`: `server.js` becomes `server.js.bak`.
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
