use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aws_cognito_otp::{EmailMessage, EmailSender, OtpError};

/// Records every message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl RecordingEmailSender {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), OtpError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Fails every delivery, counting the attempts.
#[derive(Debug, Default)]
pub struct FailingEmailSender {
    attempts: Mutex<usize>,
}

impl FailingEmailSender {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _message: &EmailMessage) -> Result<(), OtpError> {
        *self.attempts.lock().unwrap() += 1;
        Err(OtpError::EmailDelivery("Daily message quota exceeded".into()))
    }
}
