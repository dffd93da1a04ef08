/// Endpoint for the user the client is authenticated as.
pub struct WhoAmI;

impl jenkins_sdk::Endpoint for WhoAmI {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        "me/api/json?tree=id,fullName".to_string()
    }
}
