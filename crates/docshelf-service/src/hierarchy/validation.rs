//! Name validation rules.

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;

/// Maximum length of any document name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a folder name, in characters.
pub const MAX_FOLDER_NAME_LEN: usize = 50;

/// Characters a folder name may not contain.
pub const FORBIDDEN_FOLDER_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validate a file name or a rename target. Returns the trimmed name.
pub fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a new folder name. Returns the trimmed name.
pub fn validate_folder_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_FOLDER_NAME_LEN {
        return Err(AppError::validation(format!(
            "Folder name cannot exceed {MAX_FOLDER_NAME_LEN} characters"
        )));
    }
    if let Some(bad) = trimmed.chars().find(|c| FORBIDDEN_FOLDER_CHARS.contains(c)) {
        return Err(AppError::validation(format!(
            "Folder name cannot contain '{bad}' (forbidden: < > : \" / \\ | ? *)"
        )));
    }
    Ok(trimmed.to_string())
}
