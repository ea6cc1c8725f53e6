//! Delivery of login codes to users.
//!
//! The create phase hands a rendered [`EmailMessage`] to an [`EmailSender`] and waits for the
//! outcome. Senders deliver exactly once and never retry: a failure fails the round.

use async_trait::async_trait;
use log::info;

use crate::challenge::LoginCode;
use crate::constant::{DEFAULT_APP_NAME, DEFAULT_CODE_TTL_MINUTES};
use crate::OtpError;

#[cfg(feature = "lambda")]
pub use ses::SesEmailSender;

#[cfg(feature = "lambda")]
mod ses;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Email delivery abstraction used by the create phase.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver a message, or return an error to fail the challenge round.
    async fn send(&self, message: &EmailMessage) -> Result<(), OtpError>;
}

#[async_trait]
impl<S: EmailSender + ?Sized> EmailSender for &S {
    async fn send(&self, message: &EmailMessage) -> Result<(), OtpError> {
        (**self).send(message).await
    }
}

/// Local development sender which logs the recipient instead of sending real email.
///
/// Only the recipient is logged. Both the subject and the body contain the code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), OtpError> {
        info!(to = message.to.as_str(); "Email send stub");
        Ok(())
    }
}

/// Renders the email a login code is delivered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    app_name: String,
    code_ttl_minutes: u32,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME, DEFAULT_CODE_TTL_MINUTES)
    }
}

impl MessageTemplate {
    /// The TTL only appears in the text of the email; it is not enforced.
    #[must_use]
    pub fn new(app_name: &str, code_ttl_minutes: u32) -> Self {
        Self {
            app_name: app_name.into(),
            code_ttl_minutes,
        }
    }

    #[must_use]
    pub fn render(&self, to: &str, code: &LoginCode) -> EmailMessage {
        let Self {
            app_name,
            code_ttl_minutes,
        } = self;

        let unit = if *code_ttl_minutes == 1 { "minute" } else { "minutes" };

        EmailMessage {
            to: to.into(),
            subject: format!("{app_name} verification code: {code}"),
            body: format!(
                "Your {app_name} verification code is: {code}\n\nThis code will expire in {code_ttl_minutes} {unit}."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EmailSender, LogEmailSender, MessageTemplate};
    use crate::challenge::LoginCode;

    #[test]
    fn test_default_template_renders_code_and_expiry() {
        let message =
            MessageTemplate::default().render("a@b.com", &LoginCode::from_metadata(Some("123456")));

        assert_eq!(message.to, "a@b.com");
        assert_eq!(message.subject, "ASA Racing verification code: 123456");
        assert_eq!(
            message.body,
            "Your ASA Racing verification code is: 123456\n\nThis code will expire in 5 minutes."
        );
    }

    #[test]
    fn test_single_minute_expiry() {
        let message = MessageTemplate::new("Example", 1)
            .render("a@b.com", &LoginCode::from_metadata(Some("123456")));

        assert!(message.body.ends_with("expire in 1 minute."));
    }

    #[tokio::test]
    async fn test_log_sender_always_succeeds() {
        let message =
            MessageTemplate::default().render("a@b.com", &LoginCode::from_metadata(Some("123456")));

        assert_eq!(LogEmailSender.send(&message).await, Ok(()));
    }
}
