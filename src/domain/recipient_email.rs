/// A syntactically valid email address for the notification recipient.
#[derive(Debug)]
pub struct RecipientEmail(String);

impl RecipientEmail {
    pub fn parse(s: String) -> Result<RecipientEmail, String> {
        // validate_email follows the WHATWG rules, which permit dot-less
        // domains like `user@localhost`; notifications only go out to fully
        // qualified addresses.
        let has_qualified_domain = s
            .rsplit('@')
            .next()
            .map_or(false, |domain| domain.contains('.'));

        if validator::validate_email(&s) && has_qualified_domain {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address", s))
        }
    }
}

impl AsRef<str> for RecipientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
