use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::configuration::SmtpSettings;
use crate::domain::RecipientEmail;

// Implicit-TLS SMTP submission; everything else goes through STARTTLS.
const SMTPS_PORT: u16 = 465;

#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("invalid mailbox address")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build the email message")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport failure")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Send one plain-text email. The recipient is validated before the transport
/// is even constructed; an invalid address never reaches the network. All
/// failures are returned to the caller, which decides whether to surface them.
#[tracing::instrument(name = "sending notification email", skip(smtp, body))]
pub async fn send_notification(
    smtp: &SmtpSettings,
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<(), NotifyError> {
    let recipient =
        RecipientEmail::parse(to.to_string()).map_err(NotifyError::InvalidRecipient)?;

    let message = Message::builder()
        .from(from.parse()?)
        .to(recipient.as_ref().parse()?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())?;

    let mailer = build_transport(smtp)?;
    let response = mailer.send(message).await?;
    tracing::info!("notification email accepted by relay: {}", response.code());

    Ok(())
}

fn build_transport(
    smtp: &SmtpSettings,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
    let mut builder = if smtp.port == SMTPS_PORT {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
    };
    builder = builder.port(smtp.port);

    if let (Some(user), Some(pass)) = (&smtp.user, &smtp.pass) {
        builder = builder.credentials(Credentials::new(
            user.clone(),
            pass.expose_secret().clone(),
        ));
    }

    Ok(builder.build())
}
