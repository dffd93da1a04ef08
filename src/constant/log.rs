pub const ERR_NEED_A_JENKINS_URL: &str = "Need a jenkins url (--url or JENKINS_URL).";
pub const ERR_NEED_A_JENKINS_USERNAME: &str = "Need your jenkins username (--user or JENKINS_USER).";
pub const ERR_NEED_A_JENKINS_API_TOKEN: &str =
    "Need your jenkins api token (--token or JENKINS_TOKEN).";
pub const ERR_MISSING_CONNECTION: &str = "Error: Missing connection details (URL, User, or Token).";
pub const ERR_JENKINS_CLIENT_BUILD_FAILED: &str = "Failed to create http client: {}";
pub const ERR_JENKINS_CLIENT_GET_CRUMB_FAILED: &str =
    "Failed to get crumb, continue without it. {}";
pub const ERR_HTTP_STATUS: &str = "HTTP Error {} at {}. Response: {}";
pub const ERR_UNEXPECTED: &str = "An unexpected error occurred: {}";

pub const STAGE_WAITING_QUEUE: &str = "waiting for a build number";
pub const STAGE_WAITING_BUILD: &str = "waiting for the build to complete";
pub const STAGE_TALKING_TO_JENKINS: &str = "talking to jenkins";

pub const CONNECTING_TO_JENKINS: &str = "Connecting to {} as {} (api token: {})";
pub const CONNECTED_AS: &str = "Connected to Jenkins as {} ({})";
pub const BANNER_LINE: &str = "=========================================";
pub const SUITE_STARTING: &str = "STARTING SEQUENTIAL INTEGRATION TESTS";
pub const SUITE_PASSED: &str = "ALL TESTS PASSED SUCCESSFULLY";

pub const TRIGGERING_BUILD: &str = "1. [ACTION] Triggering build for job: {}";
pub const BUILD_QUEUED: &str = "   -> Job queued. Queue ID: {}";
pub const WAITING_BUILD_NUMBER: &str = "   -> Waiting for build to generate a build number...";
pub const BUILD_STARTED: &str = "   -> Build started. Build Number: {}";
pub const QUEUE_POLL_ERROR: &str = "   -> Error checking queue: {}";

pub const WAITING_BUILD_COMPLETE: &str = "2. [ACTION] Waiting for Build #{} to complete...";
pub const WAITING_BUILD_PROGRESS: &str = "   -> Build #{} of {} in progress...(last check at {})";
pub const BUILD_POLL_ERROR: &str = "   -> Polling error: {}";
pub const BUILD_FINISHED: &str = "   -> Build finished. Result: {}";
pub const BUILD_SUCCESS_PASS: &str = "   -> [PASS] Basic Build Success";

pub const ARTIFACT_CHECK_TITLE: &str = "3. [TEST] Artifact Generation Check";
pub const ARTIFACT_LOOKING_FOR: &str = "   -> Looking for artifact: '{}'";
pub const ARTIFACT_NONE_ARCHIVED: &str = "   -> [DEBUG] Jenkins reports 0 artifacts archived.";
pub const ARTIFACT_FOUND_COUNT: &str = "   -> [DEBUG] Found {} artifact(s):";
pub const ARTIFACT_LIST_ENTRY: &str = "      - FileName: '{}' | RelativePath: '{}'";
pub const ARTIFACT_PASS: &str = "   -> [PASS] Artifact '{}' was generated successfully.";
pub const ARTIFACT_FAIL: &str = "   -> [FAIL] Artifact '{}' NOT found in build.";
pub const ARTIFACT_FETCH_ERROR: &str = "   -> [ERROR] Failed to fetch artifacts: {}";

pub const CONTENT_CHECK_TITLE: &str = "4. [TEST] Artifact Content Access Check";
pub const CONTENT_DOWNLOADING: &str = "   -> Downloading artifact to verify content...";
pub const CONTENT_FETCHING_URL: &str = "   -> Fetching URL: {}";
pub const CONTENT_HTTP_FAIL: &str = "   -> [FAIL] HTTP Error {}. Response: {}";
pub const CONTENT_FOUND_TEXT: &str = "   -> Found expected text: '{}'";
pub const CONTENT_PASS: &str = "   -> [PASS] Content verification successful.";
pub const CONTENT_TEXT_MISSING: &str = "   -> [FAIL] Text '{}' NOT found.";
pub const CONTENT_SNIPPET: &str = "   -> Actual Content Snippet: {}...";
pub const CONTENT_DOWNLOAD_ERROR: &str = "   -> [ERROR] Failed to download artifact: {}";
