/// Endpoint for retrieving a queue item.
pub struct QueueItemInfo {
    pub queue_id: u64,
}

impl jenkins_sdk::Endpoint for QueueItemInfo {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("queue/item/{}/api/json", self.queue_id)
    }
}
