pub fn get_jenkins_workflow_run_url(
    jenkins_url: &str,
    job_name: &str,
    build_number: u32,
) -> String {
    format!(
        "{}/job/{}/{}",
        jenkins_url.trim_end_matches('/'),
        job_name,
        build_number
    )
}

pub fn get_artifact_url(
    jenkins_url: &str,
    job_name: &str,
    build_number: u32,
    relative_path: &str,
) -> String {
    format!(
        "{}/artifact/{}",
        get_jenkins_workflow_run_url(jenkins_url, job_name, build_number),
        relative_path
    )
}

/// # parse queue id
///
/// from the `Location` header returned when a build is enqueued, like:
///
/// - "http://example.jenkins.com/queue/item/123/"
/// - "http://example.jenkins.com/jenkins/queue/item/123"
pub fn parse_queue_id(location: &str) -> Option<u64> {
    let mut segments = location.trim_end_matches('/').rsplit('/');
    let id = segments.next()?.parse::<u64>().ok()?;

    match (segments.next(), segments.next()) {
        (Some("item"), Some("queue")) => Some(id),
        _ => None,
    }
}
