use crate::utils::error::{ReadmeError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReadmeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReadmeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ReadmeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReadmeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The placeholder must be a single visible character that is not a field
/// separator, otherwise obfuscated lines could change shape.
pub fn validate_placeholder(field_name: &str, glyph: char) -> Result<()> {
    if glyph == ',' || glyph.is_whitespace() || glyph.is_control() {
        return Err(ReadmeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: glyph.escape_default().to_string(),
            reason: "Placeholder must be a visible character other than ','".to_string(),
        });
    }
    Ok(())
}

/// Rejects `path` when it names the same file as `other`. Existing files are
/// compared by canonical path, anything else lexically against the cwd.
pub fn validate_distinct_paths(field_name: &str, path: &str, other: &str) -> Result<()> {
    if same_location(Path::new(path), Path::new(other)) {
        return Err(ReadmeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Refers to the same file as {}", other),
        });
    }
    Ok(())
}

fn same_location(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        return a == b;
    }
    normalize(a) == normalize(b)
}

fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
