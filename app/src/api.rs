//! Server functions backing the portfolio site.
//!
//! The only one today is `contact`, which turns a contact form submission
//! into an email to the site owner.

use leptos::prelude::{ServerFnError, server};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use std::time::Duration;
#[cfg(feature = "ssr")]
use tokio_retry::{Retry, strategy::ExponentialBackoff};

use crate::validation::ValidationError;

/// Contact form submission data.
///
/// `website` is a honeypot: the form hides it from people, so a filled value
/// means the submission came from a bot.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl ContactRequest {
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.website.as_deref().is_some_and(|value| !value.is_empty())
    }
}

/// A contact request that passed validation, with every field sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Subject line of the outgoing email.
    #[must_use]
    pub fn mail_subject(&self) -> String {
        if self.subject.is_empty() {
            format!("Portfolio contact from {}", self.email)
        } else {
            format!("{} - {}", self.email, self.subject)
        }
    }

    /// Plain-text body of the outgoing email.
    #[must_use]
    pub fn mail_body(&self) -> String {
        format!("From: {} ({})\n\nMessage:\n{}", self.name, self.email, self.message)
    }
}

impl TryFrom<ContactRequest> for ContactMessage {
    type Error = ValidationError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        use crate::validation::{
            MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_SUBJECT_LEN, sanitize_field, validate_email,
        };

        Ok(Self {
            email: validate_email(&request.email)?,
            name: sanitize_field("Name", &request.name, MAX_NAME_LEN, true)?,
            subject: sanitize_field("Subject", &request.subject, MAX_SUBJECT_LEN, false)?,
            message: sanitize_field("Message", &request.message, MAX_MESSAGE_LEN, true)?,
        })
    }
}

/// Failures while delivering a contact message.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("missing mail setting {0}")]
    MissingSetting(&'static str),
    #[error("invalid mailbox {0}")]
    InvalidMailbox(String),
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

/// SMTP settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub recipient: String,
}

impl MailConfig {
    pub const REQUIRED_VARS: [&'static str; 3] = ["SMTP_HOST", "SMTP_USER", "SMTP_PASSWORD"];

    /// Builds the config from a variable lookup; `CONTACT_RECIPIENT`
    /// defaults to `SMTP_USER`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ContactError> {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ContactError::MissingSetting(key))
        };
        let user = require("SMTP_USER")?;
        Ok(Self {
            host: require("SMTP_HOST")?,
            password: require("SMTP_PASSWORD")?,
            recipient: lookup("CONTACT_RECIPIENT")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| user.clone()),
            user,
        })
    }

    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(feature = "ssr")]
async fn deliver(config: MailConfig, message: &ContactMessage) -> Result<(), ContactError> {
    use lettre::{
        AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor,
        message::{Mailbox, header::ContentType},
        transport::smtp::authentication::Credentials,
    };

    let mailbox = |address: &str| {
        address
            .parse::<Mailbox>()
            .map_err(|_| ContactError::InvalidMailbox(address.to_owned()))
    };

    let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        .map_err(|e| ContactError::Delivery(e.to_string()))?
        .credentials(Credentials::new(config.user.clone(), config.password))
        .build::<Tokio1Executor>();

    let email = Message::builder()
        .from(mailbox(&config.user)?)
        .to(mailbox(&config.recipient)?)
        .subject(message.mail_subject())
        .header(ContentType::TEXT_PLAIN)
        .body(message.mail_body())
        .map_err(|e| ContactError::Delivery(e.to_string()))?;

    // Three retries with exponential backoff before giving up on the relay.
    let retry_strategy = ExponentialBackoff::from_millis(200)
        .max_delay(Duration::from_secs(10))
        .take(3);

    Retry::spawn(retry_strategy, || async {
        mailer.send(email.clone()).await.map_err(|email_err| {
            tracing::warn!("Failed to send contact email, retrying: {email_err:?}");
            email_err
        })
    })
    .await
    .map(|response| tracing::info!("Contact email sent: {response:?}"))
    .map_err(|email_err| {
        tracing::error!("Failed to send contact email after retries: {email_err:?}");
        ContactError::Delivery(email_err.to_string())
    })
}

/// Handles contact form submissions by emailing them to the site owner.
///
/// Honeypot hits are acknowledged without sending anything so bots cannot
/// tell they were filtered. Input is validated and escaped before the mail
/// settings are even read, so bad input never depends on server config.
#[server(endpoint = "/contact")]
pub async fn contact(data: ContactRequest) -> Result<(), ServerFnError> {
    if data.is_bot() {
        tracing::warn!("Contact form rejected: honeypot field was filled");
        return Ok(());
    }

    let message = ContactMessage::try_from(data).map_err(ServerFnError::new)?;
    let config = MailConfig::from_env().map_err(|err| {
        tracing::error!("Contact mail is not configured: {err}");
        ServerFnError::new(err)
    })?;

    deliver(config, &message).await.map_err(ServerFnError::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn request() -> ContactRequest {
        ContactRequest {
            name: " Ada <Lovelace> ".to_owned(),
            email: "Ada@Example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Nice <b>site</b>".to_owned(),
            website: None,
        }
    }

    #[test]
    fn contact_request_default_is_blank() {
        let request = ContactRequest::default();
        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert_eq!(request.subject, "");
        assert_eq!(request.message, "");
        assert_eq!(request.website, None);
        assert!(!request.is_bot());
    }

    #[test]
    fn contact_request_without_honeypot_deserializes() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","subject":"","message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(request.website, None);
    }

    #[test]
    fn honeypot_marks_bots() {
        let mut request = request();
        request.website = Some(String::new());
        assert!(!request.is_bot());
        request.website = Some("http://spam.example".to_owned());
        assert!(request.is_bot());
    }

    #[test]
    fn message_is_sanitized() {
        let message = ContactMessage::try_from(request()).unwrap();
        assert_eq!(message.name, "Ada &lt;Lovelace&gt;");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Nice &lt;b&gt;site&lt;&#x2F;b&gt;");
        assert_eq!(message.mail_subject(), "ada@example.com - Hello");
        assert!(message.mail_body().starts_with("From: Ada &lt;Lovelace&gt; (ada@example.com)"));
    }

    #[test]
    fn empty_subject_gets_a_default() {
        let mut request = request();
        request.subject = "  ".to_owned();
        let message = ContactMessage::try_from(request).unwrap();
        assert_eq!(message.mail_subject(), "Portfolio contact from ada@example.com");
    }

    #[test]
    fn invalid_request_is_rejected() {
        let mut request = request();
        request.message = String::new();
        assert_matches!(
            ContactMessage::try_from(request),
            Err(ValidationError::Empty { field: "Message" })
        );
    }

    #[test]
    fn mail_config_reads_lookup() {
        let vars = HashMap::from([
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USER", "me@example.com"),
            ("SMTP_PASSWORD", "secret"),
        ]);
        let config =
            MailConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned())).unwrap();
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.recipient, "me@example.com");
    }

    #[test]
    fn mail_config_reports_missing_setting() {
        let result = MailConfig::from_lookup(|key| (key == "SMTP_USER").then(|| "me@example.com".to_owned()));
        assert_matches!(result, Err(ContactError::MissingSetting("SMTP_HOST")));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn honeypot_submission_succeeds_silently() {
        let mut request = request();
        request.website = Some("bot".to_owned());
        assert!(tokio_test::block_on(contact(request)).is_ok());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn invalid_submission_fails_before_mail() {
        let mut request = request();
        request.email = "not-an-email".to_owned();
        let err = tokio_test::block_on(contact(request)).unwrap_err();
        assert!(err.to_string().contains("invalid email address"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn contact_signature_is_stable() {
        let _: fn(ContactRequest) -> _ = contact;
    }
}
