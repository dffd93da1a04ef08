/// Endpoint for enqueueing a build of a job without parameters.
///
/// Jenkins answers with `201 Created` and a `Location` header pointing at the queue item.
pub struct BuildJob {
    /// Name of the Jenkins job.
    pub job_name: String,
}

impl jenkins_sdk::Endpoint for BuildJob {
    /// HTTP method used (POST).
    fn method(&self) -> &str {
        "POST"
    }

    fn endpoint(&self) -> String {
        format!("job/{}/build", self.job_name)
    }
}
