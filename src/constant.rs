/// The challenge name Cognito uses for challenges issued by a custom auth Lambda.
pub const CUSTOM_CHALLENGE: &str = "CUSTOM_CHALLENGE";

/// The user attribute the login code is delivered to.
pub const EMAIL_ATTRIBUTE: &str = "email";

/// The private challenge parameter which carries the issued code to the verify phase.
pub const SECRET_LOGIN_CODE: &str = "secretLoginCode";

/// Replayed in place of a code when the previous round's metadata is missing, so
/// that an empty answer can never match an empty code.
pub const INVALID_CODE: &str = "INVALID";

/// Inclusive lower bound of a login code. Six digits, so codes never need padding.
pub const CODE_MIN: u32 = 100_000;

/// Inclusive upper bound of a login code.
pub const CODE_MAX: u32 = 999_999;

/// The application name shown in the email when none is configured.
pub const DEFAULT_APP_NAME: &str = "ASA Racing";

/// The expiry stated in the email when none is configured. Not enforced.
pub const DEFAULT_CODE_TTL_MINUTES: u32 = 5;
