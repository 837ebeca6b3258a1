use super::*;

pub(crate) enum Event {
  Posts {
    request_id: u64,
    result: Result<Vec<PostBlock>>,
  },
  Users {
    result: Result<Vec<User>>,
  },
}
