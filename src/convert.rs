#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail, ensure};
use tracing::info;
use which::which;

/// Finds and returns the path to the LibreOffice binary, trying `soffice`
/// first and falling back to `libreoffice`.
pub fn soffice_path() -> Result<OsString> {
    which("soffice")
        .or_else(|_| which("libreoffice"))
        .map(PathBuf::into_os_string)
        .context("Cannot find a LibreOffice binary on path (soffice or libreoffice)")
}

/// Normalizes a legacy-format file by converting it in place with headless
/// LibreOffice, returning the path of the converted file.
///
/// Files already in the target format pass through untouched. The converted
/// file lands next to the source with the target extension. A failed
/// conversion is an error for this one file; callers grade the affected
/// student as a zero-score failure rather than aborting the batch.
pub fn convert_to(path: &Path, target_ext: &str) -> Result<PathBuf> {
    let current_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    if current_ext.as_deref() == Some(target_ext) {
        return Ok(path.to_path_buf());
    }

    let outdir = path
        .parent()
        .with_context(|| format!("Submission has no parent directory: {}", path.display()))?;

    info!("Converting {} to {target_ext}", path.display());
    let output = Command::new(soffice_path()?)
        .arg("--headless")
        .arg("--convert-to")
        .arg(target_ext)
        .arg(path)
        .arg("--outdir")
        .arg(outdir)
        .output()
        .with_context(|| format!("Failed to launch LibreOffice for {}", path.display()))?;

    if !output.status.success() {
        bail!(
            "LibreOffice conversion of {} failed: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let converted = path.with_extension(target_ext);
    ensure!(
        converted.exists(),
        "LibreOffice reported success but {} was not produced",
        converted.display()
    );

    Ok(converted)
}
