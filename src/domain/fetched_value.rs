use unicode_segmentation::UnicodeSegmentation;

const MAX_VALUE_GRAPHEMES: usize = 2000;

/// The payload extracted from the remote API, trimmed and length-bounded.
#[derive(Debug)]
pub struct FetchedValue(String);

impl FetchedValue {
    pub fn parse(s: String) -> Result<FetchedValue, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("remote value is empty after trimming".to_string());
        }
        if trimmed.graphemes(true).count() > MAX_VALUE_GRAPHEMES {
            return Err(format!(
                "remote value exceeds {} characters",
                MAX_VALUE_GRAPHEMES
            ));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for FetchedValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
