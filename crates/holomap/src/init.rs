use cap_std::{ambient_authority, fs_utf8::Dir};
use miette::{Context, IntoDiagnostic, Result};

const DEFAULT_DATA_DIR: &str = "holomap-data";

/// Resolves the holomap data directory.
///
/// Reads a path from the `HOLOMAP_DATA_DIR` env var, or creates
/// `holomap-data` next to the working directory. Logs and offline datasets
/// live here.
pub fn get_holomap_dir() -> Result<Dir> {
    let authority = ambient_authority();
    let path = std::env::var("HOLOMAP_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    Dir::create_ambient_dir_all(&path, authority)
        .into_diagnostic()
        .wrap_err(path.clone())
        .wrap_err("failed to create holomap data directory")?;
    Dir::open_ambient_dir(&path, authority)
        .into_diagnostic()
        .wrap_err(path)
        .wrap_err("failed to open holomap data directory")
}
