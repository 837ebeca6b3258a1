use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentBlock {
  pub(crate) body: String,
  pub(crate) email: String,
  pub(crate) name: String,
}

impl CommentBlock {
  pub(crate) fn from_comments(
    comments: Vec<Comment>,
  ) -> Option<Vec<CommentBlock>> {
    if comments.is_empty() {
      return None;
    }

    Some(
      comments
        .into_iter()
        .map(|comment| CommentBlock {
          body: comment.body,
          email: comment.email,
          name: comment.name,
        })
        .collect(),
    )
  }

  pub(crate) fn source_line(&self) -> String {
    format!("From: {}", self.email)
  }
}
