pub const ARTIFACT_NAME: &str = "junittestresults.xml";
pub const EXPECTED_CONTENT: &str = "testAddition";

/// seconds between queue item checks
pub const QUEUE_POLL_INTERVAL: u64 = 2;
/// seconds between build status checks
pub const BUILD_POLL_INTERVAL: u64 = 5;

/// 30 minutes at the default interval
pub const QUEUE_POLL_LIMIT: u32 = 900;
/// 2 hours at the default interval
pub const BUILD_POLL_LIMIT: u32 = 1440;

/// seconds to establish a connection to jenkins
pub const HTTP_CONNECT_TIMEOUT: u64 = 10;
/// seconds for a whole request, artifact downloads included
pub const HTTP_REQUEST_TIMEOUT: u64 = 120;

pub const HTTP_ERROR_SNIPPET_LEN: usize = 100;
pub const CONTENT_SNIPPET_LEN: usize = 200;
