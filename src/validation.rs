//! Input validation for the flagrename CLI.
//!
//! Country names from the mapping become filename stems, and the extension
//! argument is spliced into every candidate path, so both are validated
//! before they reach path construction.

use anyhow::{bail, Result};

/// Maximum allowed length for the extension argument.
pub const MAX_EXT_LENGTH: usize = 16;

/// Maximum allowed byte length for a filename stem.
pub const MAX_NAME_LENGTH: usize = 255;

/// Validates the image filename extension.
///
/// An extension is valid if:
/// - It is not empty
/// - It is no longer than MAX_EXT_LENGTH characters
/// - It contains only ASCII alphanumeric characters (no leading dot)
///
/// # Examples
///
/// ```
/// use flagrename::validation::validate_extension;
///
/// assert!(validate_extension("png").is_ok());
/// assert!(validate_extension("jpeg").is_ok());
/// assert!(validate_extension("").is_err());
/// assert!(validate_extension(".png").is_err());
/// ```
pub fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() {
        bail!("Extension cannot be empty");
    }

    if ext.len() > MAX_EXT_LENGTH {
        bail!(
            "Extension too long: {} characters (max {})",
            ext.len(),
            MAX_EXT_LENGTH
        );
    }

    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        bail!("Extension '{ext}' contains invalid characters. Use only alphanumeric characters, without a leading dot");
    }

    Ok(())
}

/// Validates that a country name is usable as a filename stem.
///
/// A name is valid if:
/// - It is not empty
/// - It is no longer than MAX_NAME_LENGTH bytes
/// - It contains no path separators, NUL bytes, or control characters
/// - It is not `.` or `..`
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Name cannot be empty");
    }

    if name.len() > MAX_NAME_LENGTH {
        bail!(
            "Name too long: {} bytes (max {})",
            name.len(),
            MAX_NAME_LENGTH
        );
    }

    if name.chars().any(|c| c == '/' || c == '\\' || c.is_control()) {
        bail!("Name '{name}' contains a path separator or control character");
    }

    if name == "." || name == ".." {
        bail!("Name '{name}' is not a valid filename");
    }

    Ok(())
}

/// Clap value parser for the extension argument.
///
/// # Examples
///
/// ```ignore
/// #[arg(value_parser = clap_ext_validator)]
/// ext: String,
/// ```
pub fn clap_ext_validator(s: &str) -> Result<String, String> {
    validate_extension(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
