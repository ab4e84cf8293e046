pub mod inspect;
pub mod list;
pub mod load;
pub mod pack;
pub mod save;
pub mod unpack;
pub mod verify;

use anyhow::Context;
use std::path::Path;

pub(crate) fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
