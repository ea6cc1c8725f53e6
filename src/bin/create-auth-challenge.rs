use lambda_runtime::{run, service_fn, Error};

use aws_cognito_otp::{lambda, ChallengeCreator, Config, SesEmailSender};

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::init_tracing();

    let config = Config::from_env()?;

    tracing::info!(
        source_address = %config.source_address,
        code_ttl_minutes = config.code_ttl_minutes,
        "Loaded configuration"
    );

    // Built once per cold start and shared by every invocation.
    let creator = ChallengeCreator::new(
        SesEmailSender::from_env(&config.source_address).await,
        config.template(),
    );
    let creator = &creator;

    run(service_fn(move |event| lambda::create(creator, event))).await
}
