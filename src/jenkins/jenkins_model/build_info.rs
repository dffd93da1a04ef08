use crate::jenkins::jenkins_model::artifact::Artifact;
use crate::jenkins::jenkins_model::build_result::{deserialize_build_result, BuildResult};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct BuildInfo {
    pub building: bool,

    #[serde(default, deserialize_with = "deserialize_build_result")]
    pub result: BuildResult,

    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl BuildInfo {
    pub fn find_artifact(&self, target: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.is_match(target))
    }
}
