use unicode_segmentation::UnicodeSegmentation;

const MAX_NAME_GRAPHEMES: usize = 100;

/// A validated, trimmed user name.
#[derive(Debug)]
pub struct UserName(String);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name must be at most {MAX_NAME_GRAPHEMES} characters long")]
    TooLong,

    #[error("name may only contain letters, spaces, hyphens and apostrophes")]
    InvalidCharacters,
}

impl UserName {
    /// Accepts names of 1 to 100 graphemes (after trimming) drawn from Unicode
    /// letters, whitespace, hyphen and apostrophe. Each rule failure gets its
    /// own error variant so the caller can report what was wrong.
    pub fn parse(s: String) -> Result<UserName, NameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        if trimmed.graphemes(true).count() > MAX_NAME_GRAPHEMES {
            return Err(NameError::TooLong);
        }

        let is_allowed =
            |c: char| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
        if !trimmed.chars().all(is_allowed) {
            return Err(NameError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
