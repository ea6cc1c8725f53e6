use std::collections::HashMap;

use aws_cognito_otp::event::{
    ChallengeRecord, CreateAuthChallengeRequest, DefineAuthChallengeRequest,
    VerifyAuthChallengeRequest,
};

pub mod flow;
pub mod sender;

pub const USER_EMAIL: &str = "a@b.com";

pub fn user_attributes() -> HashMap<String, String> {
    HashMap::from([
        ("email".to_string(), USER_EMAIL.to_string()),
        ("email_verified".to_string(), "true".to_string()),
    ])
}

pub fn define_request(session: &[ChallengeRecord]) -> DefineAuthChallengeRequest {
    DefineAuthChallengeRequest {
        user_attributes: user_attributes(),
        session: session.to_vec(),
        ..Default::default()
    }
}

pub fn create_request(session: &[ChallengeRecord]) -> CreateAuthChallengeRequest {
    CreateAuthChallengeRequest {
        user_attributes: user_attributes(),
        challenge_name: Some("CUSTOM_CHALLENGE".into()),
        session: session.to_vec(),
        ..Default::default()
    }
}

pub fn verify_request(
    private_challenge_parameters: HashMap<String, String>,
    answer: &str,
) -> VerifyAuthChallengeRequest {
    VerifyAuthChallengeRequest {
        user_attributes: user_attributes(),
        private_challenge_parameters,
        challenge_answer: Some(answer.into()),
        ..Default::default()
    }
}
