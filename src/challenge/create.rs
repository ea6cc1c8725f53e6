use std::collections::HashMap;

use log::info;

use crate::challenge::LoginCode;
use crate::constant::{EMAIL_ATTRIBUTE, SECRET_LOGIN_CODE};
use crate::email::{EmailSender, MessageTemplate};
use crate::event::{CreateAuthChallengeRequest, CreateAuthChallengeResponse};
use crate::OtpError;

/// Issues login codes (the `CreateAuthChallenge` trigger).
///
/// On the first round of an attempt a new code is generated and emailed to the user. On any
/// later round the code recorded in the last round's metadata is replayed, and no email is sent.
#[derive(Debug, Clone)]
pub struct ChallengeCreator<S: EmailSender> {
    sender: S,
    template: MessageTemplate,
}

impl<S: EmailSender> ChallengeCreator<S> {
    #[must_use]
    pub fn new(sender: S, template: MessageTemplate) -> Self {
        Self { sender, template }
    }

    /// Produce the challenge parameters for this round.
    ///
    /// ## Errors
    ///
    /// On the first round, returns an error if the user has no `email` attribute or if the
    /// email could not be delivered. The round fails and Cognito does not issue a challenge.
    pub async fn create(
        &self,
        request: &CreateAuthChallengeRequest,
    ) -> Result<CreateAuthChallengeResponse, OtpError> {
        let email = request.user_attributes.get(EMAIL_ATTRIBUTE);

        let code = match request.session.last() {
            None => {
                let email = email
                    .ok_or_else(|| OtpError::MissingAttribute(EMAIL_ATTRIBUTE.into()))?;

                let code = LoginCode::generate(&mut rand::rng());

                self.sender.send(&self.template.render(email, &code)).await?;

                info!(email = email.as_str(); "Sent login code");

                code
            }
            Some(previous) => {
                let code = LoginCode::from_metadata(previous.challenge_metadata.as_deref());

                info!(
                    session_length = request.session.len(),
                    invalid = code.is_invalid();
                    "Replaying login code from previous round"
                );

                code
            }
        };

        Ok(response(email, code))
    }
}

fn response(email: Option<&String>, code: LoginCode) -> CreateAuthChallengeResponse {
    let public_challenge_parameters = email
        .map(|email| HashMap::from([(EMAIL_ATTRIBUTE.to_string(), email.clone())]))
        .unwrap_or_default();

    let code = String::from(code);

    CreateAuthChallengeResponse {
        public_challenge_parameters,
        private_challenge_parameters: HashMap::from([(SECRET_LOGIN_CODE.to_string(), code.clone())]),
        challenge_metadata: Some(code),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::ChallengeCreator;
    use crate::email::{LogEmailSender, MessageTemplate};
    use crate::event::{ChallengeRecord, CreateAuthChallengeRequest};
    use crate::OtpError;

    fn request(email: Option<&str>, session: Vec<ChallengeRecord>) -> CreateAuthChallengeRequest {
        CreateAuthChallengeRequest {
            user_attributes: email
                .map(|email| HashMap::from([("email".to_string(), email.to_string())]))
                .unwrap_or_default(),
            session,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_round_issues_new_code() {
        let creator = ChallengeCreator::new(LogEmailSender, MessageTemplate::default());

        let response = creator
            .create(&request(Some("a@b.com"), vec![]))
            .await
            .expect("First round should succeed");

        let code = response
            .private_challenge_parameters
            .get("secretLoginCode")
            .expect("Code should be issued");

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(response.challenge_metadata.as_ref(), Some(code));
        assert_eq!(
            response.public_challenge_parameters,
            HashMap::from([("email".to_string(), "a@b.com".to_string())])
        );
    }

    #[tokio::test]
    async fn test_first_round_without_email_fails() {
        let creator = ChallengeCreator::new(LogEmailSender, MessageTemplate::default());

        assert_eq!(
            creator.create(&request(None, vec![])).await,
            Err(OtpError::MissingAttribute("email".into()))
        );
    }

    #[tokio::test]
    async fn test_replay_uses_last_round_metadata() {
        let creator = ChallengeCreator::new(LogEmailSender, MessageTemplate::default());

        let response = creator
            .create(&request(
                Some("a@b.com"),
                vec![
                    ChallengeRecord::new("CUSTOM_CHALLENGE", false, Some("111111")),
                    ChallengeRecord::new("CUSTOM_CHALLENGE", false, Some("222222")),
                ],
            ))
            .await
            .expect("Replay should succeed");

        assert_eq!(response.challenge_metadata.as_deref(), Some("222222"));
        assert_eq!(
            response.private_challenge_parameters.get("secretLoginCode").map(String::as_str),
            Some("222222")
        );
    }

    #[tokio::test]
    async fn test_replay_without_metadata_uses_sentinel() {
        let creator = ChallengeCreator::new(LogEmailSender, MessageTemplate::default());

        let response = creator
            .create(&request(
                None,
                vec![ChallengeRecord::new("CUSTOM_CHALLENGE", false, None)],
            ))
            .await
            .expect("Replay should succeed without an email attribute");

        assert_eq!(response.challenge_metadata.as_deref(), Some("INVALID"));
        assert!(response.public_challenge_parameters.is_empty());
    }
}
