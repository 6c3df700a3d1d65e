//! Artifact writer.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CodegenError;

/// Mode of written artifacts. Temporary files start owner-only.
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// Writes an artifact atomically.
///
/// Missing parent directories are created. The contents go to a temporary
/// file in the target directory that is then renamed over `path`, so
/// readers see either the previous file or the complete new one.
///
/// # Errors
/// Returns `CodegenError::Io` if any filesystem step fails. The target is
/// left untouched in that case.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE))?;
    }
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
