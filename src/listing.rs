//! Lazy listing of every object in the bucket.
//!
//! One `ListObjectsV2` round trip per page of up to 1000 keys, following the
//! continuation token until the service reports the listing complete. The
//! iterator is finite and cannot be restarted.

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::types::Object;
use aws_sdk_s3::Client;

/// Keys requested per listing page.
const PAGE_SIZE: i32 = 1000;

/// One listed object, reduced to what classification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub key: String,
    pub size: u64,
}

impl From<Object> for ObjectRecord {
    fn from(object: Object) -> Self {
        ObjectRecord {
            key: object.key.unwrap_or_default(),
            // The SDK models size as Option<i64>; absent or negative is zero.
            size: object.size.unwrap_or_default().max(0) as u64,
        }
    }
}

#[derive(Clone, Copy)]
enum Pagination {
    NotStarted,
    MorePages,
    Exhausted,
}

/// Pull iterator over the bucket's full listing.
pub struct ObjectIter<'a> {
    client: &'a Client,
    bucket: &'a str,

    next_continuation_token: Option<String>,
    page: Vec<ObjectRecord>,
    pagination: Pagination,
}

impl<'a> ObjectIter<'a> {
    pub fn new(client: &'a Client, bucket: &'a str) -> ObjectIter<'a> {
        ObjectIter {
            client,
            bucket,
            next_continuation_token: None,
            page: Vec::new(),
            pagination: Pagination::NotStarted,
        }
    }

    /// Next object in listing order, or `None` once the bucket is exhausted.
    pub async fn next(&mut self) -> Result<Option<ObjectRecord>, SdkError<ListObjectsV2Error>> {
        match (self.page.pop(), self.pagination) {
            // The buffered page still has objects.
            (Some(record), _) => Ok(Some(record)),

            // Page drained and the service has (or may have) more.
            (None, Pagination::NotStarted | Pagination::MorePages) => {
                self.fetch().await?;
                Ok(self.page.pop())
            }

            // Page drained and the service reported the listing complete.
            (None, Pagination::Exhausted) => Ok(None),
        }
    }

    async fn fetch(&mut self) -> Result<(), SdkError<ListObjectsV2Error>> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(self.bucket)
            .max_keys(PAGE_SIZE)
            .set_continuation_token(self.next_continuation_token.to_owned())
            .send()
            .await?;

        self.next_continuation_token = output.next_continuation_token;
        self.pagination = if output.is_truncated.unwrap_or_default() {
            Pagination::MorePages
        } else {
            Pagination::Exhausted
        };

        self.page = output
            .contents
            .unwrap_or_default()
            .into_iter()
            .map(ObjectRecord::from)
            .collect();
        // Reversed so `pop()` emits objects in the order the service returned them.
        self.page.reverse();

        tracing::debug!(objects = self.page.len(), "fetched listing page");

        Ok(())
    }
}
