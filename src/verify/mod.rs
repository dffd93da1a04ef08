pub mod artifact_check;
pub mod harness_config;

use crate::constant::log::*;
use crate::jenkins::build::request_build;
use crate::jenkins::query::{query_who_am_i, VerifierClient};
use crate::jenkins::watch::{wait_for_build_number, wait_for_completion};
use crate::pretty_log::{colored_println, ThemeColor};
use crate::verifier_error::VerifierError;
use crate::verify::artifact_check::{verify_artifact_content, verify_artifact_exists};
use crate::verify::harness_config::HarnessConfig;
use formatx::formatx;
use std::io::Stdout;
use tokio_util::sync::CancellationToken;

/// # run integration suite
///
/// identity -> trigger -> queue -> completion -> artifact exists -> artifact content.
///
/// Stops at the first failing stage.
pub async fn run_integration_suite<C: VerifierClient>(
    stdout: &mut Stdout,
    client: &C,
    job_name: &str,
    config: &HarnessConfig,
    cancel: &CancellationToken,
) -> Result<(), VerifierError> {
    let user = query_who_am_i(client).await?;
    colored_println(
        stdout,
        ThemeColor::Success,
        &formatx!(CONNECTED_AS, &user.full_name, &user.id).unwrap_or_default(),
    );
    colored_println(stdout, ThemeColor::Main, BANNER_LINE);
    colored_println(stdout, ThemeColor::Main, SUITE_STARTING);
    colored_println(stdout, ThemeColor::Main, BANNER_LINE);

    let queue_id = request_build(stdout, client, job_name).await?;
    let build_number =
        wait_for_build_number(stdout, client, queue_id, &config.queue_poll, cancel).await?;
    let result = wait_for_completion(
        stdout,
        client,
        job_name,
        build_number,
        &config.build_poll,
        cancel,
    )
    .await?;

    if !result.is_success() {
        return Err(VerifierError::BuildNotSuccessful {
            build_number,
            result,
        });
    }
    colored_println(stdout, ThemeColor::Success, BUILD_SUCCESS_PASS);

    let artifact = verify_artifact_exists(
        stdout,
        client,
        job_name,
        build_number,
        &config.artifact_name,
    )
    .await?
    .ok_or_else(|| VerifierError::ArtifactMissing {
        artifact_name: config.artifact_name.clone(),
    })?;

    if !verify_artifact_content(
        stdout,
        client,
        job_name,
        build_number,
        &artifact.relative_path,
        &config.expected_content,
    )
    .await
    {
        return Err(VerifierError::ArtifactContentIncorrect {
            artifact_path: artifact.relative_path,
        });
    }

    colored_println(stdout, ThemeColor::Main, "");
    colored_println(stdout, ThemeColor::Success, BANNER_LINE);
    colored_println(stdout, ThemeColor::Success, SUITE_PASSED);
    colored_println(stdout, ThemeColor::Success, BANNER_LINE);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jenkins::jenkins_endpoint::build_info::BuildInfoQuery;
    use crate::jenkins::jenkins_endpoint::build_job::BuildJob;
    use crate::jenkins::jenkins_endpoint::queue_item_info::QueueItemInfo;
    use crate::jenkins::jenkins_endpoint::who_am_i::WhoAmI;
    use crate::jenkins::jenkins_model::build_result::BuildResult;
    use crate::jenkins::mock_client::MockJenkinsClient;
    use crate::verify::harness_config::PollPolicy;
    use std::time::Duration;

    const URL: &str = "http://localhost:8080/";
    const ARTIFACT_URL: &str =
        "http://localhost:8080/job/demo/7/artifact/matlabTestArtifacts/junittestresults.xml";
    const ARTIFACTS_JSON: &str = r#"[{"fileName":"junittestresults.xml","relativePath":"matlabTestArtifacts/junittestresults.xml"}]"#;

    fn test_config() -> HarnessConfig {
        HarnessConfig {
            queue_poll: PollPolicy::new(Duration::from_millis(1), Some(10)),
            build_poll: PollPolicy::new(Duration::from_millis(1), Some(10)),
            ..HarnessConfig::default()
        }
    }

    fn build_info_query() -> BuildInfoQuery {
        BuildInfoQuery {
            job_name: "demo".to_string(),
            build_number: 7,
        }
    }

    /// demo is queued as item 12, becomes build #7 and finishes with `result`.
    fn demo_server(result: &str) -> MockJenkinsClient {
        MockJenkinsClient::new(URL)
            .respond(&WhoAmI, r#"{"id":"admin","fullName":"Jenkins Admin"}"#)
            .location(Some("http://localhost:8080/queue/item/12/"))
            .respond(&QueueItemInfo { queue_id: 12 }, r#"{"id":12}"#)
            .respond(
                &QueueItemInfo { queue_id: 12 },
                r#"{"id":12,"cancelled":false,"executable":{"number":7}}"#,
            )
            .respond(
                &build_info_query(),
                r#"{"building":true,"result":null,"artifacts":[]}"#,
            )
            .respond(
                &build_info_query(),
                &format!(
                    r#"{{"building":false,"result":{},"artifacts":{}}}"#,
                    result, ARTIFACTS_JSON
                ),
            )
    }

    #[tokio::test]
    async fn test_end_to_end_pass() {
        let client = demo_server(r#""SUCCESS""#).download(
            ARTIFACT_URL,
            200,
            r#"<testsuites><testcase name="testAddition" classname="TestMath"/></testsuites>"#,
        );

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        assert!(result.is_ok(), "{:?}", result);
        assert_eq!(client.call_count(&BuildJob { job_name: "demo".to_string() }), 1);
        assert_eq!(
            client.calls().last().cloned(),
            Some(format!("GET {}", ARTIFACT_URL))
        );
    }

    #[tokio::test]
    async fn test_failed_build_stops_before_artifact_checks() {
        let client = demo_server(r#""FAILURE""#);

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        assert!(matches!(
            result,
            Err(VerifierError::BuildNotSuccessful {
                build_number: 7,
                result: BuildResult::Failure
            })
        ));
        // two polls while waiting, none for the artifact check
        assert_eq!(client.call_count(&build_info_query()), 2);
        assert!(!client.calls().iter().any(|c| c.contains("/artifact/")));
    }

    #[tokio::test]
    async fn test_null_result_is_not_success() {
        let client = demo_server("null");

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        assert!(matches!(
            result,
            Err(VerifierError::BuildNotSuccessful {
                result: BuildResult::Unknown,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_missing_artifact() {
        let client = demo_server(r#""SUCCESS""#);
        let config = HarnessConfig {
            artifact_name: "coverage.xml".to_string(),
            ..test_config()
        };

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &config,
            &CancellationToken::new(),
        )
        .await;

        match result {
            Err(VerifierError::ArtifactMissing { artifact_name }) => {
                assert_eq!(artifact_name, "coverage.xml")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_content() {
        let client = demo_server(r#""SUCCESS""#).download(ARTIFACT_URL, 200, "<testsuites/>");

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        match result {
            Err(VerifierError::ArtifactContentIncorrect { artifact_path }) => {
                assert_eq!(artifact_path, "matlabTestArtifacts/junittestresults.xml")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancelled_queue_item() {
        let client = MockJenkinsClient::new(URL)
            .respond(&WhoAmI, r#"{"id":"admin","fullName":"Jenkins Admin"}"#)
            .location(Some("http://localhost:8080/queue/item/12/"))
            .respond(
                &QueueItemInfo { queue_id: 12 },
                r#"{"id":12,"cancelled":true}"#,
            );

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        assert!(matches!(
            result,
            Err(VerifierError::QueueItemCancelled { queue_id: 12 })
        ));
        assert_eq!(client.call_count(&build_info_query()), 0);
    }

    #[tokio::test]
    async fn test_missing_queue_location() {
        let client = MockJenkinsClient::new(URL)
            .respond(&WhoAmI, r#"{"id":"admin","fullName":"Jenkins Admin"}"#)
            .location(None);

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        assert!(matches!(
            result,
            Err(VerifierError::QueueLocationMissing { .. })
        ));
    }

    #[tokio::test]
    async fn test_identity_failure_is_fatal() {
        let client = MockJenkinsClient::new(URL).fail(&WhoAmI, "HTTP Error 401");

        let result = run_integration_suite(
            &mut std::io::stdout(),
            &client,
            "demo",
            &test_config(),
            &CancellationToken::new(),
        )
        .await;

        assert!(matches!(result, Err(VerifierError::JenkinsError(_))));
        assert_eq!(client.calls().len(), 1);
    }
}
