use crate::constant::log::*;
use crate::jenkins::jenkins_model::build_result::BuildResult;
use crate::pretty_log::{colored_println, ThemeColor};
use formatx::formatx;
use jenkins_sdk::JenkinsError;
use std::io::Stdout;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifierError {
    #[error(transparent)]
    JenkinsError(#[from] JenkinsError),

    #[error("{msg}", msg = ERR_MISSING_CONNECTION)]
    MissingConnection(&'static str),

    #[error("Invalid jenkins url: {0}")]
    InvalidUrl(String),

    #[error("Jenkins accepted the build of {job_name} but returned no queue location.")]
    QueueLocationMissing { job_name: String },

    #[error("Build was cancelled in the queue (queue id {queue_id}).")]
    QueueItemCancelled { queue_id: u64 },

    #[error("Gave up {stage} after {attempts} attempts.")]
    PollLimitReached { stage: &'static str, attempts: u32 },

    #[error("Cancelled while {stage}.")]
    Cancelled { stage: &'static str },

    #[error("[CRITICAL FAIL] Build #{build_number} failed with status {result}. Stopping tests.")]
    BuildNotSuccessful { build_number: u32, result: BuildResult },

    #[error("[CRITICAL FAIL] Artifact generation failed ({artifact_name} not found). Stopping tests.")]
    ArtifactMissing { artifact_name: String },

    #[error("[CRITICAL FAIL] Artifact content is incorrect ({artifact_path}).")]
    ArtifactContentIncorrect { artifact_path: String },
}

impl VerifierError {
    pub fn colored_println(&self, stdout: &mut Stdout) {
        let msg = match self {
            VerifierError::JenkinsError(e) => {
                formatx!(ERR_UNEXPECTED, e.to_string()).unwrap_or_default()
            }
            VerifierError::MissingConnection(detail) => format!("{}\n{}", self, detail),
            _ => self.to_string(),
        };
        colored_println(stdout, ThemeColor::Error, &msg);
    }
}
