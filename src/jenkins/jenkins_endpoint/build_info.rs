/// Endpoint for retrieving the state and archived artifacts of a build.
pub struct BuildInfoQuery {
    /// Name of the Jenkins job.
    pub job_name: String,

    /// Build number of the Jenkins run.
    pub build_number: u32,
}

impl jenkins_sdk::Endpoint for BuildInfoQuery {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    /// API path for retrieving build status and artifacts.
    fn endpoint(&self) -> String {
        format!(
            "job/{}/{}/api/json?tree=building,result,artifacts[fileName,relativePath]",
            self.job_name, self.build_number
        )
    }
}
