use clap::{Arg, ArgMatches, Command};

use crate::constant::{DEFAULT_APP_NAME, DEFAULT_CODE_TTL_MINUTES};
use crate::email::MessageTemplate;

/// Configuration of the `create-auth-challenge` Lambda.
///
/// Every value can be passed as a flag, but in Lambda is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The verified SES identity login codes are sent from.
    pub source_address: String,

    /// The application name shown in the email.
    pub app_name: String,

    /// How long the email tells the user the code is valid for.
    pub code_ttl_minutes: u32,
}

impl Config {
    #[must_use]
    pub fn command() -> Command {
        Command::new("create-auth-challenge")
            .about("Issues one-time login codes for AWS Cognito custom authentication")
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                Arg::new("source-address")
                    .long("source-address")
                    .help("Verified SES address login codes are sent from")
                    .env("OTP_SOURCE_ADDRESS")
                    .required(true),
            )
            .arg(
                Arg::new("app-name")
                    .long("app-name")
                    .help("Application name shown in the email")
                    .env("OTP_APP_NAME")
                    .default_value(DEFAULT_APP_NAME),
            )
            .arg(
                Arg::new("code-ttl-minutes")
                    .long("code-ttl-minutes")
                    .help("Expiry stated in the email, in minutes")
                    .env("OTP_CODE_TTL_MINUTES")
                    .default_value(DEFAULT_CODE_TTL_MINUTES.to_string())
                    .value_parser(clap::value_parser!(u32).range(1..)),
            )
    }

    /// Read the configuration from the process arguments and environment.
    ///
    /// ## Errors
    ///
    /// Returns an error if a required value is missing or a value is invalid.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::command().try_get_matches().map(|matches| Self::from_matches(&matches))
    }

    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let string = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

        Self {
            source_address: string("source-address"),
            app_name: string("app-name"),
            code_ttl_minutes: matches
                .get_one::<u32>("code-ttl-minutes")
                .copied()
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn template(&self) -> MessageTemplate {
        MessageTemplate::new(&self.app_name, self.code_ttl_minutes)
    }
}
