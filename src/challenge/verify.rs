use log::info;

use crate::challenge::LoginCode;
use crate::constant::SECRET_LOGIN_CODE;
use crate::event::{VerifyAuthChallengeRequest, VerifyAuthChallengeResponse};

/// Check the user's answer against the issued code (the `VerifyAuthChallengeResponse` trigger).
///
/// Comparison is exact: no trimming and no case folding. A missing answer, a missing code, or
/// a code replayed from a corrupted round is never correct.
#[must_use]
pub fn verify_auth_challenge(request: &VerifyAuthChallengeRequest) -> VerifyAuthChallengeResponse {
    let expected = request
        .private_challenge_parameters
        .get(SECRET_LOGIN_CODE)
        .map(|code| LoginCode::from_metadata(Some(code.as_str())));

    let answer_correct = match (expected, request.challenge_answer.as_deref()) {
        (Some(expected), Some(answer)) => !expected.is_invalid() && expected.as_str() == answer,
        _ => false,
    };

    info!(answer_correct; "Verified auth challenge answer");

    VerifyAuthChallengeResponse { answer_correct }
}
