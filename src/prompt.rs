use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::domain::{NameError, UserName};

const NAME_PROMPT: &[u8] = b"Please enter your name: ";

#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    #[error("failed to read from the terminal")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] NameError),
}

/// Print the prompt and block on one line of terminal input. No timeout: the
/// read itself is the suspension point.
pub async fn ask_for_name() -> Result<UserName, PromptError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(NAME_PROMPT).await?;
    stdout.flush().await?;

    let mut reader = BufReader::new(tokio::io::stdin());
    read_name(&mut reader).await
}

/// Read one line from `reader` and validate it as a user name. EOF yields an
/// empty line, which fails validation as such.
pub async fn read_name<R>(reader: &mut R) -> Result<UserName, PromptError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(UserName::parse(line)?)
}

#[cfg(test)]
mod tests {
    use super::{read_name, PromptError};
    use crate::domain::NameError;
    use claims::{assert_err, assert_ok};

    #[tokio::test]
    async fn a_valid_line_resolves_to_the_trimmed_name() {
        let mut input = "Ann Lee\n".as_bytes();
        let name = assert_ok!(read_name(&mut input).await);
        assert_eq!(name.as_ref(), "Ann Lee");
    }

    #[tokio::test]
    async fn an_invalid_line_fails_validation() {
        let mut input = "Ann <script>\n".as_bytes();
        let error = assert_err!(read_name(&mut input).await);
        assert!(matches!(
            error,
            PromptError::Invalid(NameError::InvalidCharacters)
        ));
    }

    #[tokio::test]
    async fn end_of_input_is_reported_as_an_empty_name() {
        let mut input = "".as_bytes();
        let error = assert_err!(read_name(&mut input).await);
        assert!(matches!(error, PromptError::Invalid(NameError::Empty)));
    }
}
