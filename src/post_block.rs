use super::*;

/// A fully assembled post: content, author attribution, and the post's
/// comment section, which starts hidden. The block owns its toggle state
/// directly, so no lookup by rendered output is ever needed.
#[derive(Clone, Debug)]
pub(crate) struct PostBlock {
  pub(crate) author_line: String,
  pub(crate) body: String,
  pub(crate) catch_phrase: Option<String>,
  pub(crate) comments: Vec<CommentBlock>,
  pub(crate) comments_visible: bool,
  pub(crate) id: u64,
  pub(crate) title: String,
}

impl PostBlock {
  /// A missing author does not drop the post; it falls back to an
  /// `unknown` attribution with no catchphrase.
  pub(crate) fn assemble(
    post: Post,
    author: Option<User>,
    comments: Vec<Comment>,
  ) -> Self {
    let (author_line, catch_phrase) = match author {
      Some(author) => (
        format!("Author: {} with {}", author.name, author.company.name),
        Some(author.company.catch_phrase),
      ),
      None => ("Author: unknown".to_string(), None),
    };

    Self {
      author_line,
      body: post.body,
      catch_phrase,
      comments: CommentBlock::from_comments(comments).unwrap_or_default(),
      comments_visible: false,
      id: post.id,
      title: post.title,
    }
  }

  pub(crate) fn button_label(&self) -> &'static str {
    if self.comments_visible {
      HIDE_COMMENTS_LABEL
    } else {
      SHOW_COMMENTS_LABEL
    }
  }

  pub(crate) fn id_line(&self) -> String {
    format!("Post ID: {}", self.id)
  }

  pub(crate) fn toggle(&mut self) -> bool {
    self.comments_visible = !self.comments_visible;
    self.comments_visible
  }
}
