use std::fmt;

use rand::{CryptoRng, Rng};

use crate::constant::{CODE_MAX, CODE_MIN, INVALID_CODE};

pub use create::ChallengeCreator;
pub use define::{define_auth_challenge, Decision, SessionState};
pub use verify::verify_auth_challenge;

mod create;
mod define;
mod verify;

/// A one-time login code issued to a user during the create phase.
///
/// Freshly generated codes are always six decimal digits. A code replayed from a previous
/// round is whatever Cognito recorded as that round's metadata.
///
/// The `Debug` output is redacted, so a code can be included in logged structures without
/// leaking it.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCode(String);

impl LoginCode {
    /// Generate a new code, uniformly distributed over `100000..=999999`.
    pub fn generate<R: CryptoRng>(rng: &mut R) -> Self {
        Self(rng.random_range(CODE_MIN..=CODE_MAX).to_string())
    }

    /// Recover the code issued in a previous round from its challenge metadata.
    ///
    /// Missing or empty metadata yields the invalid sentinel, which never verifies.
    #[must_use]
    pub fn from_metadata(metadata: Option<&str>) -> Self {
        match metadata {
            Some(code) if !code.is_empty() => Self(code.into()),
            _ => Self::invalid(),
        }
    }

    #[must_use]
    pub fn invalid() -> Self {
        Self(INVALID_CODE.into())
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.0.is_empty() || self.0 == INVALID_CODE
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LoginCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoginCode(******)")
    }
}

impl fmt::Display for LoginCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LoginCode> for String {
    fn from(code: LoginCode) -> Self {
        code.0
    }
}
