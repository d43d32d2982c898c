use std::path::{Path, PathBuf};

use log::debug;

use crate::Result;

pub fn create_parent_dir_if_not_exist(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            debug!("Created directory {}", parent.display());
        }
    }
    Ok(())
}

/// Atomically replace `path` with `contents`: write a temp sibling, then
/// rename over the target. Readers of `path` never observe a partial file.
pub async fn replace_file(
    path: &Path,
    contents: &[u8],
) -> Result<()> {
    create_parent_dir_if_not_exist(path)?;
    let tmp = temp_sibling(path);
    tokio::fs::write(&tmp, contents).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// `targets.json` -> `targets.json.tmp`, in the same directory so the
/// rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
