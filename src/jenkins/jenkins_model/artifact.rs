use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Artifact {
    #[serde(rename = "fileName")]
    pub file_name: String,

    #[serde(rename = "relativePath")]
    pub relative_path: String,
}

impl Artifact {
    /// Case-sensitive substring match against the file name or the relative path.
    ///
    /// `"results.xml"` also matches `"junit-results.xml"`.
    pub fn is_match(&self, target: &str) -> bool {
        self.file_name.contains(target) || self.relative_path.contains(target)
    }
}
