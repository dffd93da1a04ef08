use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct User {
    pub id: String,

    #[serde(rename = "fullName")]
    pub full_name: String,
}
