use lettre::SmtpTransport;
use lettre::address::AddressError;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use thiserror::Error;
use tracing::instrument;
use webapp_config::EmailSettings;

use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("invalid sender address: {0}")]
    Address(#[from] AddressError),

    #[error("failed to configure SMTP relay: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// SMTP transport for the configured host. Nothing is sent until the
/// caller hands it a message.
#[instrument(skip(email), fields(host = %email.host, port = email.port, tls = email.use_tls))]
pub fn build_transport(email: &EmailSettings) -> Result<SmtpTransport, MailerError> {
    let builder = if email.use_tls {
        SmtpTransport::starttls_relay(&email.host)?
    } else {
        SmtpTransport::builder_dangerous(&email.host)
    };

    Ok(builder
        .port(email.port)
        .credentials(Credentials::new(
            email.host_user.clone(),
            email.host_password().to_string(),
        ))
        .build())
}

/// `From:` mailbox built from the site name and the default sender address.
pub fn default_sender(settings: &Settings) -> Result<Mailbox, MailerError> {
    let address = settings.email.default_from_email.parse()?;
    Ok(Mailbox::new(Some(settings.site.name.clone()), address))
}
