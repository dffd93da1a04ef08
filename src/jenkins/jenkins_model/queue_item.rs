use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct QueueItem {
    #[serde(default)]
    pub cancelled: bool,

    pub executable: Option<QueueExecutable>,
}

#[derive(Deserialize, Debug)]
pub struct QueueExecutable {
    pub number: u32,
}

impl QueueItem {
    pub fn build_number(&self) -> Option<u32> {
        self.executable.as_ref().map(|e| e.number)
    }
}
