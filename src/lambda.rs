//! Adapters between the Lambda runtime and the three challenge phases.
//!
//! Each adapter takes the Cognito trigger event, runs the phase against its request, and
//! returns the same event with the response filled in.

use lambda_runtime::{Error, LambdaEvent};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::challenge::{define_auth_challenge, verify_auth_challenge, ChallengeCreator};
use crate::email::EmailSender;
use crate::event::{CreateAuthChallengeEvent, DefineAuthChallengeEvent, VerifyAuthChallengeEvent};

/// Install the global subscriber. `log` records emitted by the library are forwarded to it.
///
/// Timestamps are left to CloudWatch. The level is `INFO` unless overridden by `RUST_LOG`.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();
}

pub async fn define(
    event: LambdaEvent<DefineAuthChallengeEvent>,
) -> Result<DefineAuthChallengeEvent, Error> {
    let LambdaEvent { payload, context, .. } = event;

    let response = define_auth_challenge(&payload.request);

    info!(
        request_id = %context.request_id,
        issue_tokens = response.issue_tokens,
        fail_authentication = response.fail_authentication,
        "Handled define auth challenge"
    );

    Ok(payload.respond(response))
}

pub async fn create<S: EmailSender>(
    creator: &ChallengeCreator<S>,
    event: LambdaEvent<CreateAuthChallengeEvent>,
) -> Result<CreateAuthChallengeEvent, Error> {
    let LambdaEvent { payload, context, .. } = event;

    let response = creator
        .create(&payload.request)
        .await
        .inspect_err(|err| {
            error!(request_id = %context.request_id, %err, "Failed to create auth challenge");
        })?;

    info!(request_id = %context.request_id, "Handled create auth challenge");

    Ok(payload.respond(response))
}

pub async fn verify(
    event: LambdaEvent<VerifyAuthChallengeEvent>,
) -> Result<VerifyAuthChallengeEvent, Error> {
    let LambdaEvent { payload, context, .. } = event;

    let response = verify_auth_challenge(&payload.request);

    info!(
        request_id = %context.request_id,
        answer_correct = response.answer_correct,
        "Handled verify auth challenge"
    );

    Ok(payload.respond(response))
}
