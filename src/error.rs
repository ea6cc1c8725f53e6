use thiserror::Error;

/// An error occurred while issuing a one-time passcode challenge.
///
/// Only the create phase can fail. Defining and verifying a challenge always
/// resolve to a decision, rejecting anything they do not recognise.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    /// A user attribute required to deliver the code was not present on the event.
    #[error("Missing user attribute: {0}")]
    MissingAttribute(String),

    /// The email containing the code could not be constructed.
    #[error("Invalid email template: {0}")]
    InvalidTemplate(String),

    /// The email containing the code could not be delivered.
    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),
}
