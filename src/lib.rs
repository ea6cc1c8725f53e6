#![crate_name = "aws_cognito_otp"]

//! # AWS Cognito OTP
//!
//! Passwordless, one-time passcode (OTP) login for AWS Cognito, using the `CUSTOM_AUTH` flow.
//!
//! This includes the three [custom authentication challenge](https://docs.aws.amazon.com/cognito/latest/developerguide/user-pool-lambda-challenge.html)
//! triggers (`DefineAuthChallenge`, `CreateAuthChallenge` and `VerifyAuthChallengeResponse`), both
//! as plain functions and as AWS Lambda binaries.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! aws-cognito-otp = "0.1.0"
//! ```
//!
//! ### The flow
//!
//! Cognito drives the login attempt, passing the history of the attempt (the `session`) to every
//! trigger. Nothing is stored between invocations.
//!
//! 1. **Define** - with an empty session, a `CUSTOM_CHALLENGE` is issued.
//! 2. **Create** - a six digit code is generated and emailed to the user. The code is returned in
//!    the private challenge parameters and the challenge metadata, never in the public ones.
//! 3. **Verify** - the user's answer is compared with the code.
//! 4. **Define** - with one correctly answered challenge tokens are issued, otherwise the attempt
//!    fails. Only one attempt at the code is allowed.
//!
//! ### Defining and verifying challenges
//!
//! Both are pure functions of the request, and never fail.
//!
//! ```
//! use std::collections::HashMap;
//! use aws_cognito_otp::event::{ChallengeRecord, DefineAuthChallengeRequest, VerifyAuthChallengeRequest};
//! use aws_cognito_otp::{define_auth_challenge, verify_auth_challenge};
//!
//! // A new login attempt is always challenged.
//! let response = define_auth_challenge(&DefineAuthChallengeRequest::default());
//! assert_eq!(response.challenge_name.as_deref(), Some("CUSTOM_CHALLENGE"));
//!
//! // The answer must match the code exactly.
//! let response = verify_auth_challenge(&VerifyAuthChallengeRequest {
//!     private_challenge_parameters: HashMap::from([
//!         ("secretLoginCode".to_string(), "123456".to_string()),
//!     ]),
//!     challenge_answer: Some("123456".into()),
//!     ..Default::default()
//! });
//! assert!(response.answer_correct);
//!
//! // Once the challenge has been answered correctly, tokens are issued.
//! let response = define_auth_challenge(&DefineAuthChallengeRequest {
//!     session: vec![ChallengeRecord::new("CUSTOM_CHALLENGE", true, Some("123456"))],
//!     ..Default::default()
//! });
//! assert!(response.issue_tokens);
//! ```
//!
//! ### Creating challenges
//!
//! Creating a challenge sends an email, so needs an [`EmailSender`]. [`SesEmailSender`] delivers
//! through Amazon SES, and [`LogEmailSender`] only logs (for local development).
//!
//! ```no_run
//! use aws_cognito_otp::event::CreateAuthChallengeRequest;
//! use aws_cognito_otp::{ChallengeCreator, LogEmailSender, MessageTemplate, OtpError};
//!
//! # async fn create(request: CreateAuthChallengeRequest) -> Result<(), OtpError> {
//! let creator = ChallengeCreator::new(
//!     LogEmailSender,
//!
//!     // The name of the application and the expiry shown in the email.
//!     MessageTemplate::new("Example", 5),
//! );
//!
//! let response = creator.create(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Lambda
//!
//! With the `lambda` feature (enabled by default), three binaries are built:
//! `define-auth-challenge`, `create-auth-challenge` and `verify-auth-challenge`.
//!
//! The `create-auth-challenge` function is configured through the environment:
//!
//! | Variable | Description | Default |
//! |---|---|---|
//! | `OTP_SOURCE_ADDRESS` | Verified SES identity codes are sent from | (required) |
//! | `OTP_APP_NAME` | Application name shown in the email | `ASA Racing` |
//! | `OTP_CODE_TTL_MINUTES` | Expiry stated in the email | `5` |
//!
//! Its execution role needs `ses:SendEmail`. Logging is controlled with `RUST_LOG`.
//!
//! The code expiry is only stated in the email. It is not enforced.

pub use crate::challenge::{
    define_auth_challenge, verify_auth_challenge, ChallengeCreator, Decision, LoginCode,
    SessionState,
};
pub use crate::email::{EmailMessage, EmailSender, LogEmailSender, MessageTemplate};
pub use crate::error::OtpError;

#[cfg(feature = "lambda")]
pub use crate::config::Config;
#[cfg(feature = "lambda")]
pub use crate::email::SesEmailSender;

pub mod event;
#[cfg(feature = "lambda")]
pub mod lambda;

mod challenge;
#[cfg(feature = "lambda")]
mod config;
mod constant;
mod email;
mod error;
