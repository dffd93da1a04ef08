use serde::Deserialize;
use std::fmt::Display;

/// Terminal result of a Jenkins build.
///
/// `null` (still running, or never recorded) and any value this tool does not know about
/// both land in [`BuildResult::Unknown`].
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub enum BuildResult {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
    #[serde(rename = "UNSTABLE")]
    Unstable,
    #[serde(rename = "ABORTED")]
    Aborted,
    #[serde(rename = "NOT_BUILT")]
    NotBuilt,
    #[serde(other)]
    #[default]
    Unknown,
}

impl BuildResult {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildResult::Success)
    }
}

impl Display for BuildResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            BuildResult::Success => "SUCCESS",
            BuildResult::Failure => "FAILURE",
            BuildResult::Unstable => "UNSTABLE",
            BuildResult::Aborted => "ABORTED",
            BuildResult::NotBuilt => "NOT_BUILT",
            BuildResult::Unknown => "UNKNOWN",
        };
        write!(f, "{}", str)
    }
}

pub(crate) fn deserialize_build_result<'de, D>(deserializer: D) -> Result<BuildResult, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<BuildResult>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
