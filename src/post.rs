use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Post {
  pub(crate) body: String,
  pub(crate) id: u64,
  pub(crate) title: String,
  #[serde(rename = "userId")]
  pub(crate) user_id: u64,
}
