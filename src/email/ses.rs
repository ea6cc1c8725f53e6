use async_trait::async_trait;
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use log::{error, info};

use crate::email::{EmailMessage, EmailSender};
use crate::OtpError;

const CHARSET: &str = "UTF-8";

/// Sends email through Amazon SES (v2 `SendEmail`), from a verified source address.
#[derive(Debug, Clone)]
pub struct SesEmailSender {
    client: aws_sdk_sesv2::Client,
    source_address: String,
}

impl SesEmailSender {
    #[must_use]
    pub fn new(client: aws_sdk_sesv2::Client, source_address: &str) -> Self {
        Self {
            client,
            source_address: source_address.into(),
        }
    }

    /// Build a sender from the default AWS configuration chain (environment, profile, or
    /// the Lambda execution role).
    pub async fn from_env(source_address: &str) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        Self::new(aws_sdk_sesv2::Client::new(&config), source_address)
    }

    fn content(data: &str) -> Result<Content, OtpError> {
        Content::builder()
            .data(data)
            .charset(CHARSET)
            .build()
            .map_err(|err| OtpError::InvalidTemplate(err.to_string()))
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), OtpError> {
        let content = EmailContent::builder()
            .simple(
                Message::builder()
                    .subject(Self::content(&message.subject)?)
                    .body(Body::builder().text(Self::content(&message.body)?).build())
                    .build(),
            )
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&self.source_address)
            .destination(Destination::builder().to_addresses(&message.to).build())
            .content(content)
            .send()
            .await
            .map_err(|err| {
                let err = DisplayErrorContext(err).to_string();

                error!(to = message.to.as_str(), error = err.as_str(); "Failed to send email through SES");

                OtpError::EmailDelivery(err)
            })?;

        info!(
            to = message.to.as_str(),
            message_id = output.message_id().unwrap_or_default();
            "Sent email through SES"
        );

        Ok(())
    }
}
