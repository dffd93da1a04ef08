use crate::constant::log::*;
use crate::constant::util::get_snippet;
use crate::default_config;
use crate::jenkins::jenkins_model::artifact::Artifact;
use crate::jenkins::query::{query_build_info, VerifierClient};
use crate::jenkins::util::get_artifact_url;
use crate::pretty_log::{colored_println, ThemeColor};
use formatx::formatx;
use jenkins_sdk::JenkinsError;
use std::io::Stdout;

/// # verify artifact exists
///
/// Fetch the finished build once and look for an artifact whose file name or relative path
/// contains `artifact_name`. Every archived artifact is listed on the way.
///
/// ### Returns
///
/// the first matching artifact, `Ok(None)` if there is none.
pub async fn verify_artifact_exists<C: VerifierClient>(
    stdout: &mut Stdout,
    client: &C,
    job_name: &str,
    build_number: u32,
    artifact_name: &str,
) -> Result<Option<Artifact>, JenkinsError> {
    colored_println(stdout, ThemeColor::Main, "");
    colored_println(stdout, ThemeColor::Main, ARTIFACT_CHECK_TITLE);
    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(ARTIFACT_LOOKING_FOR, artifact_name).unwrap_or_default(),
    );

    let info = query_build_info(client, job_name, build_number)
        .await
        .inspect_err(|e| {
            colored_println(
                stdout,
                ThemeColor::Error,
                &formatx!(ARTIFACT_FETCH_ERROR, e.to_string()).unwrap_or_default(),
            );
        })?;

    if info.artifacts.is_empty() {
        colored_println(stdout, ThemeColor::Second, ARTIFACT_NONE_ARCHIVED);
    } else {
        colored_println(
            stdout,
            ThemeColor::Second,
            &formatx!(ARTIFACT_FOUND_COUNT, info.artifacts.len()).unwrap_or_default(),
        );
        for a in &info.artifacts {
            colored_println(
                stdout,
                ThemeColor::Second,
                &formatx!(ARTIFACT_LIST_ENTRY, &a.file_name, &a.relative_path)
                    .unwrap_or_default(),
            );
        }
    }

    match info.find_artifact(artifact_name) {
        Some(artifact) => {
            colored_println(
                stdout,
                ThemeColor::Success,
                &formatx!(ARTIFACT_PASS, artifact_name).unwrap_or_default(),
            );
            Ok(Some(artifact.clone()))
        }
        None => {
            colored_println(
                stdout,
                ThemeColor::Error,
                &formatx!(ARTIFACT_FAIL, artifact_name).unwrap_or_default(),
            );
            Ok(None)
        }
    }
}

/// # verify artifact content
///
/// Download the artifact once and check it contains `expected_text`.
///
/// A non-200 status, a missing text or a failed download all count as a failed check.
pub async fn verify_artifact_content<C: VerifierClient>(
    stdout: &mut Stdout,
    client: &C,
    job_name: &str,
    build_number: u32,
    artifact_path: &str,
    expected_text: &str,
) -> bool {
    colored_println(stdout, ThemeColor::Main, "");
    colored_println(stdout, ThemeColor::Main, CONTENT_CHECK_TITLE);
    colored_println(stdout, ThemeColor::Main, CONTENT_DOWNLOADING);

    let artifact_url = get_artifact_url(client.base_url(), job_name, build_number, artifact_path);
    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(CONTENT_FETCHING_URL, &artifact_url).unwrap_or_default(),
    );

    let response = match client.download(&artifact_url).await {
        Ok(response) => response,
        Err(e) => {
            colored_println(
                stdout,
                ThemeColor::Error,
                &formatx!(CONTENT_DOWNLOAD_ERROR, e.to_string()).unwrap_or_default(),
            );
            return false;
        }
    };

    if response.status != 200 {
        colored_println(
            stdout,
            ThemeColor::Error,
            &formatx!(
                CONTENT_HTTP_FAIL,
                response.status,
                get_snippet(&response.body, default_config::HTTP_ERROR_SNIPPET_LEN)
            )
            .unwrap_or_default(),
        );
        return false;
    }

    if response.body.contains(expected_text) {
        colored_println(
            stdout,
            ThemeColor::Second,
            &formatx!(CONTENT_FOUND_TEXT, expected_text).unwrap_or_default(),
        );
        colored_println(stdout, ThemeColor::Success, CONTENT_PASS);
        true
    } else {
        colored_println(
            stdout,
            ThemeColor::Error,
            &formatx!(CONTENT_TEXT_MISSING, expected_text).unwrap_or_default(),
        );
        colored_println(
            stdout,
            ThemeColor::Second,
            &formatx!(
                CONTENT_SNIPPET,
                get_snippet(&response.body, default_config::CONTENT_SNIPPET_LEN)
            )
            .unwrap_or_default(),
        );
        false
    }
}
