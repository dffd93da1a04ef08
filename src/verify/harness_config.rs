use crate::default_config;
use crate::verifier_error::VerifierError;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Fixed interval between polls, optionally bounded by an attempt count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PollPolicy {
    pub interval: Duration,

    /// `None` polls until the server reports a terminal state.
    pub max_attempts: Option<u32>,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// # pause
    ///
    /// Sleep before the next attempt.
    ///
    /// ### Arguments
    ///
    /// * `attempts`: attempts done so far.
    /// * `stage`: what is being waited for, used in the error.
    /// * `cancel`: interrupts the sleep.
    pub async fn pause(
        &self,
        attempts: u32,
        stage: &'static str,
        cancel: &CancellationToken,
    ) -> Result<(), VerifierError> {
        if self.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(VerifierError::PollLimitReached { stage, attempts });
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(VerifierError::Cancelled { stage }),
            _ = tokio::time::sleep(self.interval) => Ok(()),
        }
    }
}

/// Everything the verification run needs besides the client and the job name.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Matched as a substring of the artifact file name or relative path.
    pub artifact_name: String,

    /// Substring the downloaded artifact must contain.
    pub expected_content: String,

    pub queue_poll: PollPolicy,

    pub build_poll: PollPolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            artifact_name: default_config::ARTIFACT_NAME.to_string(),
            expected_content: default_config::EXPECTED_CONTENT.to_string(),
            queue_poll: PollPolicy::new(
                Duration::from_secs(default_config::QUEUE_POLL_INTERVAL),
                Some(default_config::QUEUE_POLL_LIMIT),
            ),
            build_poll: PollPolicy::new(
                Duration::from_secs(default_config::BUILD_POLL_INTERVAL),
                Some(default_config::BUILD_POLL_LIMIT),
            ),
        }
    }
}

impl HarnessConfig {
    /// Override the attempt limits. `None` keeps the current limit.
    pub fn with_poll_limits(mut self, queue: Option<u32>, build: Option<u32>) -> Self {
        if queue.is_some() {
            self.queue_poll.max_attempts = queue;
        }
        if build.is_some() {
            self.build_poll.max_attempts = build;
        }
        self
    }

    /// Poll until the server reports a terminal state, however long it takes.
    pub fn without_poll_limit(mut self) -> Self {
        self.queue_poll.max_attempts = None;
        self.build_poll.max_attempts = None;
        self
    }
}
