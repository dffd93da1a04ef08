pub mod build;
pub mod jenkins_endpoint;
pub mod jenkins_model;
#[cfg(test)]
pub mod mock_client;
pub mod query;
pub mod util;
pub mod verifier_jenkins_client;
pub mod watch;
