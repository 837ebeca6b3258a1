#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchPosts { request_id: u64, user_id: u64 },
  FetchUsers,
}
