//! Validation utilities for the Smart Irrigation Assistant

use crate::models::{MAX_MOISTURE_LEVEL, MIN_MOISTURE_LEVEL};

/// Validate soil moisture is a percentage
pub fn validate_moisture_level(level: i32) -> Result<(), &'static str> {
    if !(MIN_MOISTURE_LEVEL..=MAX_MOISTURE_LEVEL).contains(&level) {
        return Err("Soil moisture must be between 0 and 100%");
    }
    Ok(())
}

/// Validate a chat question before it is sent to the AI service
pub fn validate_question(question: &str) -> Result<(), &'static str> {
    if question.trim().is_empty() {
        return Err("Question cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moisture_level_range() {
        assert!(validate_moisture_level(0).is_ok());
        assert!(validate_moisture_level(50).is_ok());
        assert!(validate_moisture_level(100).is_ok());
        assert!(validate_moisture_level(-1).is_err());
        assert!(validate_moisture_level(101).is_err());
    }

    #[test]
    fn test_question_must_have_text() {
        assert!(validate_question("How often should I water rice?").is_ok());
        assert!(validate_question("").is_err());
        assert!(validate_question("   \n\t").is_err());
    }

    #[test]
    fn test_long_questions_are_accepted() {
        assert!(validate_question(&"Why are my tomato leaves curling? ".repeat(500)).is_ok());
    }
}
