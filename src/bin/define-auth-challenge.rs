use lambda_runtime::{run, service_fn, Error};

use aws_cognito_otp::lambda;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::init_tracing();

    run(service_fn(lambda::define)).await
}
