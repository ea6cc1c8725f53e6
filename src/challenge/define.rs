use log::info;

use crate::constant::CUSTOM_CHALLENGE;
use crate::event::{ChallengeRecord, DefineAuthChallengeRequest, DefineAuthChallengeResponse};

/// Where a login attempt stands, derived from the session history Cognito supplies.
///
/// Only one round of `CUSTOM_CHALLENGE` is ever permitted, so a single wrong answer ends
/// the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Cognito could not find the user.
    UserNotFound,

    /// No challenge has been issued yet.
    Fresh,

    /// Exactly one custom challenge has been answered.
    Answered { correct: bool },

    /// Any other history: more than one round, or a challenge this flow never issues.
    Unrecognized,
}

impl SessionState {
    #[must_use]
    pub fn classify(user_not_found: bool, session: &[ChallengeRecord]) -> Self {
        if user_not_found {
            return Self::UserNotFound;
        }

        match session {
            [] => Self::Fresh,
            [record] if record.challenge_name == CUSTOM_CHALLENGE => Self::Answered {
                correct: record.challenge_result,
            },
            _ => Self::Unrecognized,
        }
    }

    #[must_use]
    pub fn decide(self) -> Decision {
        match self {
            Self::UserNotFound => Decision::Reject { user_not_found: true },
            Self::Fresh => Decision::Issue,
            Self::Answered { correct: true } => Decision::Accept,
            Self::Answered { correct: false } => Decision::Reject { user_not_found: false },
            Self::Unrecognized => Decision::Reject { user_not_found: false },
        }
    }
}

/// What Cognito should do next in the login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Present a `CUSTOM_CHALLENGE` to the user.
    Issue,

    /// Issue tokens.
    Accept,

    /// Fail the attempt. The client sees the same generic failure whatever the reason.
    Reject { user_not_found: bool },
}

impl From<Decision> for DefineAuthChallengeResponse {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Issue => Self {
                challenge_name: Some(CUSTOM_CHALLENGE.into()),
                issue_tokens: false,
                fail_authentication: false,
                is_valid: None,
            },
            Decision::Accept => Self {
                challenge_name: None,
                issue_tokens: true,
                fail_authentication: false,
                is_valid: None,
            },
            Decision::Reject { user_not_found } => Self {
                challenge_name: None,
                issue_tokens: false,
                fail_authentication: true,
                is_valid: user_not_found.then_some(false),
            },
        }
    }
}

/// Decide the next step of a login attempt (the `DefineAuthChallenge` trigger).
///
/// This never fails. Any history which is not exactly "nothing yet" or "one answered custom
/// challenge" fails the attempt.
#[must_use]
pub fn define_auth_challenge(request: &DefineAuthChallengeRequest) -> DefineAuthChallengeResponse {
    let state = SessionState::classify(request.user_not_found, &request.session);
    let decision = state.decide();

    info!(
        session_length = request.session.len(),
        state:? = state,
        decision:? = decision;
        "Defined next auth challenge step"
    );

    decision.into()
}
