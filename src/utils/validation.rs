use crate::utils::error::{AdderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that `value` is a non-empty run of '0'/'1' characters.
pub fn validate_bit_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AdderError::invalid_argument(
            field_name,
            value,
            "bit string cannot be empty",
        ));
    }

    if let Some((position, ch)) = value.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
        return Err(AdderError::invalid_argument(
            field_name,
            value,
            format!("unexpected character {:?} at position {}", ch, position),
        ));
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AdderError::invalid_argument(field_name, path, "path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(AdderError::invalid_argument(
            field_name,
            path,
            "path contains null bytes",
        ));
    }

    Ok(())
}

/// Returns the lower-cased extension of `file` if it is one of `allowed_extensions`.
pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<String> {
    let extension = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| {
            AdderError::invalid_argument(field_name, file, "file has no extension or invalid filename")
        })?;

    if !allowed_extensions.contains(&extension.as_str()) {
        return Err(AdderError::invalid_argument(
            field_name,
            file,
            format!(
                "unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        ));
    }

    Ok(extension)
}
