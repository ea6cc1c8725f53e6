use aws_cognito_otp::event::{ChallengeRecord, CreateAuthChallengeResponse, DefineAuthChallengeResponse};
use aws_cognito_otp::{define_auth_challenge, verify_auth_challenge, ChallengeCreator, EmailSender};

use crate::common;

/// The outcome of a login attempt, as Cognito would see it.
pub struct Attempt {
    pub created: CreateAuthChallengeResponse,
    pub session: Vec<ChallengeRecord>,
    pub outcome: DefineAuthChallengeResponse,
}

/// Drive one login attempt through define, create, verify and define again, in the order
/// Cognito invokes the triggers.
///
/// `answer` is given the issued code and returns what the user types in.
pub async fn login<S: EmailSender>(
    creator: &ChallengeCreator<S>,
    answer: impl FnOnce(&str) -> String,
) -> Attempt {
    let mut session = vec![];

    let response = define_auth_challenge(&common::define_request(&session));
    assert_eq!(response.challenge_name.as_deref(), Some("CUSTOM_CHALLENGE"));
    assert!(!response.issue_tokens && !response.fail_authentication);

    let created = creator
        .create(&common::create_request(&session))
        .await
        .expect("Creating the first challenge should succeed");

    let code = created
        .private_challenge_parameters
        .get("secretLoginCode")
        .expect("The code should be in the private challenge parameters")
        .clone();

    let verified = verify_auth_challenge(&common::verify_request(
        created.private_challenge_parameters.clone(),
        &answer(&code),
    ));

    session.push(ChallengeRecord {
        challenge_name: "CUSTOM_CHALLENGE".into(),
        challenge_result: verified.answer_correct,
        challenge_metadata: created.challenge_metadata.clone(),
    });

    let outcome = define_auth_challenge(&common::define_request(&session));

    Attempt {
        created,
        session,
        outcome,
    }
}
