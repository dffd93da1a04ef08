use crate::constant::log::*;
use crate::jenkins::jenkins_model::build_result::BuildResult;
use crate::jenkins::query::{query_build_info, query_queue_item, VerifierClient};
use crate::pretty_log::{colored_println, ProgressLine, ThemeColor};
use crate::verify::harness_config::PollPolicy;
use crate::verifier_error::VerifierError;
use chrono::Local;
use formatx::formatx;
use std::io::Stdout;
use tokio_util::sync::CancellationToken;

/// # wait for build number
///
/// Poll the queue item until Jenkins assigns it a build.
///
/// ### Returns
///
/// the assigned build number.
/// `Err(QueueItemCancelled)` if the item was cancelled before it left the queue.
/// Fetch errors are printed and retried until `policy` gives up.
pub async fn wait_for_build_number<C: VerifierClient>(
    stdout: &mut Stdout,
    client: &C,
    queue_id: u64,
    policy: &PollPolicy,
    cancel: &CancellationToken,
) -> Result<u32, VerifierError> {
    colored_println(stdout, ThemeColor::Main, WAITING_BUILD_NUMBER);

    let mut attempts = 0;
    loop {
        attempts += 1;

        match query_queue_item(client, queue_id).await {
            Ok(item) => {
                if let Some(build_number) = item.build_number() {
                    colored_println(
                        stdout,
                        ThemeColor::Second,
                        &formatx!(BUILD_STARTED, build_number).unwrap_or_default(),
                    );
                    return Ok(build_number);
                }

                if item.cancelled {
                    return Err(VerifierError::QueueItemCancelled { queue_id });
                }
            }
            Err(e) => {
                colored_println(
                    stdout,
                    ThemeColor::Warn,
                    &formatx!(QUEUE_POLL_ERROR, e.to_string()).unwrap_or_default(),
                );
            }
        }

        policy.pause(attempts, STAGE_WAITING_QUEUE, cancel).await?;
    }
}

/// # wait for completion
///
/// Poll the build until it is no longer building.
///
/// ### Returns
///
/// the terminal result of the build, whatever it is.
pub async fn wait_for_completion<C: VerifierClient>(
    stdout: &mut Stdout,
    client: &C,
    job_name: &str,
    build_number: u32,
    policy: &PollPolicy,
    cancel: &CancellationToken,
) -> Result<BuildResult, VerifierError> {
    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(WAITING_BUILD_COMPLETE, build_number).unwrap_or_default(),
    );

    let mut progress = ProgressLine::new();
    let mut attempts = 0;
    loop {
        attempts += 1;

        match query_build_info(client, job_name, build_number).await {
            Ok(info) if !info.building => {
                colored_println(
                    stdout,
                    if info.result.is_success() {
                        ThemeColor::Success
                    } else {
                        ThemeColor::Error
                    },
                    &formatx!(BUILD_FINISHED, info.result).unwrap_or_default(),
                );
                return Ok(info.result);
            }
            Ok(_) => {
                progress.update(
                    stdout,
                    ThemeColor::Warn,
                    &formatx!(
                        WAITING_BUILD_PROGRESS,
                        build_number,
                        job_name,
                        Local::now().format("%Y-%m-%d %H:%M:%S")
                    )
                    .unwrap_or_default(),
                );
            }
            Err(e) => {
                progress.detach();
                colored_println(
                    stdout,
                    ThemeColor::Warn,
                    &formatx!(BUILD_POLL_ERROR, e.to_string()).unwrap_or_default(),
                );
            }
        }

        policy.pause(attempts, STAGE_WAITING_BUILD, cancel).await?;
    }
}
