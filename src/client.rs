//! S3 client construction from resolved settings.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::Client;

use crate::config::Settings;

/// Build the S3 client: explicit region, static credentials, and the SDK's
/// standard retries capped at five attempts.
pub async fn build(settings: &Settings) -> Client {
    let credentials = Credentials::new(
        settings.access_key_id.clone(),
        settings.secret_access_key.clone(),
        settings.session_token.clone(),
        None,
        "e-formulare-stats",
    );

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()))
        .credentials_provider(credentials)
        .retry_config(RetryConfig::standard().with_max_attempts(5))
        .load()
        .await;

    Client::new(&config)
}
