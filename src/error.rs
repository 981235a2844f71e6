//! Failure kinds that end a run.

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use thiserror::Error;

/// The two recognised ways a run can fail.
///
/// Credentials are checked before any network call; a listing failure aborts
/// the run with no partial report. Anything else propagates unhandled.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Fehlende AWS-Credentials: bitte über die Umgebung oder die .env setzen.")]
    MissingCredentials,

    #[error("Fehler beim Lesen des Buckets")]
    Listing(#[from] SdkError<ListObjectsV2Error>),
}
