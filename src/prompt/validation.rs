//! Input validation for the prompt flow.

/// Longest accepted commit description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 50;

/// Message shown when a Y/N confirmation gets anything but `y` or `n`.
pub const INVALID_CONFIRMATION: &str = "Invalid input. Please enter Y or N";

/// Checks a free-text answer, returning the message to show on rejection.
pub type Validator = fn(&str) -> Result<(), String>;

/// Validates the commit description: non-empty and at most
/// [`MAX_DESCRIPTION_LENGTH`] characters.
///
/// # Errors
/// * If the description is empty or too long
pub fn validate_description(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("commit message cannot be empty".to_string())
    } else if input.chars().count() > MAX_DESCRIPTION_LENGTH {
        Err(format!(
            "commit message cannot be longer than {MAX_DESCRIPTION_LENGTH} characters"
        ))
    } else {
        Ok(())
    }
}

/// Validates the breaking-change description: non-empty.
///
/// # Errors
/// * If the description is empty
pub fn validate_breaking_description(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("breaking change description cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Interprets a Y/N answer: case-insensitive `y` or `n` after trimming.
/// Anything else yields `None`.
#[must_use]
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_length_boundary() {
        assert!(validate_description(&"a".repeat(50)).is_ok());
        assert_eq!(
            validate_description(&"a".repeat(51)),
            Err("commit message cannot be longer than 50 characters".to_string())
        );
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        // 50 two-byte characters
        assert!(validate_description(&"é".repeat(50)).is_ok());
        assert!(validate_description(&"é".repeat(51)).is_err());
    }

    #[test]
    fn test_empty_answers_rejected() {
        assert_eq!(
            validate_description(""),
            Err("commit message cannot be empty".to_string())
        );
        assert_eq!(
            validate_breaking_description(""),
            Err("breaking change description cannot be empty".to_string())
        );
        assert!(validate_breaking_description("changes API shape").is_ok());
    }

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(parse_confirmation("y"), Some(true));
        assert_eq!(parse_confirmation("  Y \n"), Some(true));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("\tN "), Some(false));
        assert_eq!(parse_confirmation("yes"), None);
        assert_eq!(parse_confirmation("no"), None);
        assert_eq!(parse_confirmation(""), None);
    }
}
