use crate::constant::log::*;
use crate::jenkins::jenkins_endpoint::build_job::BuildJob;
use crate::jenkins::query::VerifierClient;
use crate::jenkins::util::parse_queue_id;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::verifier_error::VerifierError;
use formatx::formatx;
use jenkins_sdk::Endpoint;
use std::io::Stdout;

/// # request build
///
/// Enqueue a build of `job_name` and return its queue id.
///
/// No retry, any failure here is fatal for the run.
pub async fn request_build<C: VerifierClient>(
    stdout: &mut Stdout,
    client: &C,
    job_name: &str,
) -> Result<u64, VerifierError> {
    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(TRIGGERING_BUILD, job_name).unwrap_or_default(),
    );

    let endpoint = BuildJob {
        job_name: job_name.to_string(),
    };
    let location = client
        .request_location(endpoint.method(), &endpoint.endpoint())
        .await?;

    let queue_id = location
        .as_deref()
        .and_then(parse_queue_id)
        .ok_or_else(|| VerifierError::QueueLocationMissing {
            job_name: job_name.to_string(),
        })?;

    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(BUILD_QUEUED, queue_id).unwrap_or_default(),
    );

    Ok(queue_id)
}
