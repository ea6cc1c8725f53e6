//! The JSON contract of the Cognito custom authentication triggers.
//!
//! Every trigger receives the same envelope, with a request and response body specific to the
//! phase of the challenge. The envelope is returned to Cognito unchanged apart from the response.
//!
//! For the full event structure see documentation: [Custom authentication challenge Lambda triggers](https://docs.aws.amazon.com/cognito/latest/developerguide/user-pool-lambda-challenge.html)

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A Cognito trigger event, generic over the request and response body of the phase.
///
/// The incoming `response` is ignored (Cognito sends it with every field `null`) and is
/// replaced using [`TriggerEvent::respond`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEvent<Req, Resp> {
    /// The version of the trigger event format, currently `1`.
    pub version: Option<String>,

    /// The event which invoked the trigger. For example: `DefineAuthChallenge_Authentication`.
    pub trigger_source: Option<String>,

    /// The AWS region of the user pool.
    pub region: Option<String>,

    /// The ID of the AWS Cognito User Pool, in the form `<region>_<pool id>`.
    pub user_pool_id: Option<String>,

    /// The username of the user attempting to log in.
    pub user_name: Option<String>,

    /// The client which started the login attempt.
    pub caller_context: Option<CallerContext>,

    /// The phase specific request, supplied by Cognito.
    pub request: Req,

    /// The phase specific response, written by the trigger.
    #[serde(default, skip_deserializing)]
    pub response: Resp,
}

impl<Req, Resp> TriggerEvent<Req, Resp> {
    /// Return the envelope with the response body replaced.
    #[must_use]
    pub fn respond(self, response: Resp) -> Self {
        Self { response, ..self }
    }
}

/// The client which started the login attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerContext {
    /// The version of the AWS SDK which made the request.
    pub aws_sdk_version: Option<String>,

    /// The ID of the user pool app client.
    pub client_id: Option<String>,
}

/// One completed challenge round of the current login attempt, as recorded by Cognito.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRecord {
    /// The challenge issued in this round. Only `CUSTOM_CHALLENGE` is issued by this flow.
    #[serde(default, deserialize_with = "null_as_default")]
    pub challenge_name: String,

    /// Whether the verify phase accepted the answer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub challenge_result: bool,

    /// The metadata returned by the create phase of this round. Carries the issued code.
    #[serde(default)]
    pub challenge_metadata: Option<String>,
}

impl ChallengeRecord {
    #[must_use]
    pub fn new(challenge_name: &str, challenge_result: bool, challenge_metadata: Option<&str>) -> Self {
        Self {
            challenge_name: challenge_name.into(),
            challenge_result,
            challenge_metadata: challenge_metadata.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefineAuthChallengeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_attributes: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub session: Vec<ChallengeRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<HashMap<String, String>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub user_not_found: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefineAuthChallengeResponse {
    /// The challenge to present next, if any.
    pub challenge_name: Option<String>,

    /// Whether the user has authenticated and should be issued tokens.
    pub issue_tokens: bool,

    /// Whether the login attempt has failed.
    pub fail_authentication: bool,

    /// Set to `false` when the user does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthChallengeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_attributes: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub session: Vec<ChallengeRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<HashMap<String, String>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub user_not_found: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthChallengeResponse {
    /// Returned to the client. Must never contain the code.
    pub public_challenge_parameters: HashMap<String, String>,

    /// Passed by Cognito to the verify phase only.
    pub private_challenge_parameters: HashMap<String, String>,

    /// Recorded by Cognito against this round and replayed in the session of later rounds.
    pub challenge_metadata: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAuthChallengeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_attributes: HashMap<String, String>,

    /// The parameters returned privately by the create phase. Non-string values are dropped.
    #[serde(default, deserialize_with = "string_values")]
    pub private_challenge_parameters: HashMap<String, String>,

    /// What the user typed in. Anything other than a string is treated as no answer.
    #[serde(default, deserialize_with = "string_or_none")]
    pub challenge_answer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<HashMap<String, String>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub user_not_found: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAuthChallengeResponse {
    /// Whether the answer matched the issued code.
    pub answer_correct: bool,
}

pub type DefineAuthChallengeEvent =
    TriggerEvent<DefineAuthChallengeRequest, DefineAuthChallengeResponse>;

pub type CreateAuthChallengeEvent =
    TriggerEvent<CreateAuthChallengeRequest, CreateAuthChallengeResponse>;

pub type VerifyAuthChallengeEvent =
    TriggerEvent<VerifyAuthChallengeRequest, VerifyAuthChallengeResponse>;

/// Keep a value only if it is a JSON string.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

/// Keep only the entries of a JSON object whose values are strings.
fn string_values<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(value) => Some((key, value)),
                _ => None,
            })
            .collect(),
        _ => HashMap::new(),
    })
}

/// Cognito sends `null` rather than omitting fields it has no value for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
