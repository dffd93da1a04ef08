use crate::constant::log::*;
use crate::constant::util::{get_hidden_sensitive_string, SensitiveMode};
use crate::jenkins::verifier_jenkins_client::VerifierJenkinsClient;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::verifier_error::VerifierError;
use crate::verify::harness_config::HarnessConfig;
use crate::verify::run_integration_suite;
use formatx::formatx;
use std::io::Stdout;
use tokio_util::sync::CancellationToken;

/// Validated connection details of the Jenkins server.
#[derive(Debug, PartialEq)]
pub struct JenkinsConnection {
    pub url: String,
    pub username: String,
    pub api_token: String,
}

fn non_empty(val: Option<String>) -> Option<String> {
    val.filter(|v| !v.trim().is_empty())
}

/// # resolve connection
///
/// Every value is required, a blank value counts as missing.
/// Credentials are kept as given, only the url is trimmed.
/// The url must be an absolute http(s) url, a trailing `/` is dropped.
pub fn resolve_connection(
    url: Option<String>,
    username: Option<String>,
    api_token: Option<String>,
) -> Result<JenkinsConnection, VerifierError> {
    let url = non_empty(url)
        .map(|v| v.trim().to_string())
        .ok_or(VerifierError::MissingConnection(ERR_NEED_A_JENKINS_URL))?;
    let username =
        non_empty(username).ok_or(VerifierError::MissingConnection(ERR_NEED_A_JENKINS_USERNAME))?;
    let api_token = non_empty(api_token)
        .ok_or(VerifierError::MissingConnection(ERR_NEED_A_JENKINS_API_TOKEN))?;

    match url::Url::parse(&url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {}
        _ => return Err(VerifierError::InvalidUrl(url)),
    }

    Ok(JenkinsConnection {
        url: url.trim_end_matches('/').to_string(),
        username,
        api_token,
    })
}

/// # cli do verify
///
/// Connect to Jenkins and run the whole integration suite against `job_name`.
///
/// `cancel` also interrupts an in-flight request, not only the poll sleeps.
pub async fn cli_do_verify(
    stdout: &mut Stdout,
    connection: JenkinsConnection,
    job_name: &str,
    config: HarnessConfig,
    cancel: CancellationToken,
) -> Result<(), VerifierError> {
    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(
            CONNECTING_TO_JENKINS,
            &connection.url,
            &connection.username,
            get_hidden_sensitive_string(&connection.api_token, SensitiveMode::Normal(4))
        )
        .unwrap_or_default(),
    );

    let verify = async {
        let mut client = VerifierJenkinsClient::new(
            &connection.url,
            &connection.username,
            &connection.api_token,
        )?;
        if let Err(e) = client.attach_crumb().await {
            colored_println(
                stdout,
                ThemeColor::Warn,
                &formatx!(ERR_JENKINS_CLIENT_GET_CRUMB_FAILED, e.to_string()).unwrap_or_default(),
            );
        }

        run_integration_suite(stdout, &client, job_name, &config, &cancel).await
    };

    // a poll stage reports its own cancellation, so it wins when both are ready
    tokio::select! {
        biased;
        result = verify => result,
        _ = cancel.cancelled() => Err(VerifierError::Cancelled {
            stage: STAGE_TALKING_TO_JENKINS,
        }),
    }
}
