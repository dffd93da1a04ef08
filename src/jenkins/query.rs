use crate::jenkins::jenkins_endpoint::build_info::BuildInfoQuery;
use crate::jenkins::jenkins_endpoint::queue_item_info::QueueItemInfo;
use crate::jenkins::jenkins_endpoint::who_am_i::WhoAmI;
use crate::jenkins::jenkins_model::build_info::BuildInfo;
use crate::jenkins::jenkins_model::queue_item::QueueItem;
use crate::jenkins::jenkins_model::user::User;
use jenkins_sdk::client::AsyncClient;
use jenkins_sdk::{AsyncQuery, JenkinsError};

/// Response of a raw download, any status code included.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The Jenkins calls that the `jenkins_sdk` query traits cannot express:
/// reading a response header and fetching an absolute url without status checks.
#[async_trait::async_trait]
pub trait VerifierClient: AsyncClient + Send + Sync {
    /// Base URL of the Jenkins server, without trailing `/`.
    fn base_url(&self) -> &str;

    /// Sends a request and returns the `Location` header of the response, if any.
    async fn request_location(
        &self,
        method: &str,
        endpoint: &str,
    ) -> Result<Option<String>, JenkinsError>;

    /// Authenticated GET of an absolute url.
    async fn download(&self, url: &str) -> Result<RawResponse, JenkinsError>;
}

pub async fn query_who_am_i<C: VerifierClient>(client: &C) -> Result<User, JenkinsError> {
    AsyncQuery::query(&WhoAmI, client).await
}

pub async fn query_queue_item<C: VerifierClient>(
    client: &C,
    queue_id: u64,
) -> Result<QueueItem, JenkinsError> {
    AsyncQuery::query(&QueueItemInfo { queue_id }, client).await
}

pub async fn query_build_info<C: VerifierClient>(
    client: &C,
    job_name: &str,
    build_number: u32,
) -> Result<BuildInfo, JenkinsError> {
    AsyncQuery::query(
        &BuildInfoQuery {
            job_name: job_name.into(),
            build_number,
        },
        client,
    )
    .await
}
