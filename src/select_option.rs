use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SelectOption {
  pub(crate) label: String,
  pub(crate) value: u64,
}

impl SelectOption {
  /// One option per user, in fetch order. An empty roster yields `None`
  /// rather than an empty menu.
  pub(crate) fn from_users(users: &[User]) -> Option<Vec<SelectOption>> {
    if users.is_empty() {
      return None;
    }

    Some(
      users
        .iter()
        .map(|user| SelectOption {
          label: user.name.clone(),
          value: user.id,
        })
        .collect(),
    )
  }
}
