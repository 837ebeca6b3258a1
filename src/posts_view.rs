use super::*;

/// The rebuilt post content for one employee. Each refresh replaces the
/// whole view, so at most one block per post id ever exists.
#[derive(Default)]
pub(crate) struct PostsView {
  blocks: Vec<PostBlock>,
  offset: usize,
  selected: usize,
}

impl PostsView {
  pub(crate) fn blocks(&self) -> &[PostBlock] {
    &self.blocks
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.blocks.len()
  }

  pub(crate) fn new(blocks: Vec<PostBlock>) -> Self {
    Self {
      blocks,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.blocks.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.set_selected(self.selected.saturating_add(step));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.set_selected(self.selected.saturating_sub(step));
  }

  pub(crate) fn select_last(&mut self) {
    if !self.blocks.is_empty() {
      self.set_selected(self.blocks.len().saturating_sub(1));
    }
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.blocks.is_empty() {
      None
    } else {
      Some(self.selected.min(self.blocks.len().saturating_sub(1)))
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.blocks.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.blocks.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.blocks.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.blocks.len().saturating_sub(1));
    }
  }

  /// Flips the comment section of the block with the given post id.
  /// Returns the new visibility, or `None` when no block matches.
  pub(crate) fn toggle(&mut self, post_id: u64) -> Option<bool> {
    self
      .blocks
      .iter_mut()
      .find(|block| block.id == post_id)
      .map(PostBlock::toggle)
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(index) = self.selected_index()
      && let Some(id) = self.blocks.get(index).map(|block| block.id)
    {
      self.toggle(id);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_block(id: u64, comments: Vec<Comment>) -> PostBlock {
    PostBlock::assemble(
      Post {
        body: format!("body {id}"),
        id,
        title: format!("title {id}"),
        user_id: 1,
      },
      None,
      comments,
    )
  }

  fn sample_comment(name: &str) -> Comment {
    Comment {
      body: "comment body".to_string(),
      email: "commenter@example.com".to_string(),
      name: name.to_string(),
    }
  }

  #[test]
  fn refresh_fixture_builds_one_block_per_post() {
    let view = PostsView::new(vec![
      sample_block(1, vec![sample_comment("a"), sample_comment("b")]),
      sample_block(2, vec![sample_comment("c")]),
    ]);

    assert_eq!(view.len(), 2);

    for (block, id) in view.blocks().iter().zip([1, 2]) {
      assert_eq!(block.id, id);
      assert!(!block.comments_visible);
      assert_eq!(block.button_label(), SHOW_COMMENTS_LABEL);
    }

    assert_eq!(view.blocks()[0].comments.len(), 2);
    assert_eq!(view.blocks()[1].comments.len(), 1);
  }

  #[test]
  fn toggle_by_id_flips_only_the_matching_block() {
    let mut view = PostsView::new(vec![
      sample_block(1, vec![sample_comment("a")]),
      sample_block(2, vec![sample_comment("b")]),
    ]);

    assert_eq!(view.toggle(2), Some(true));
    assert!(!view.blocks()[0].comments_visible);
    assert!(view.blocks()[1].comments_visible);

    assert_eq!(view.toggle(2), Some(false));
    assert!(!view.blocks()[1].comments_visible);
  }

  #[test]
  fn toggle_unknown_id_is_a_noop() {
    let mut view = PostsView::new(vec![sample_block(1, Vec::new())]);

    assert_eq!(view.toggle(99), None);
    assert!(!view.blocks()[0].comments_visible);
  }

  #[test]
  fn toggle_selected_targets_the_current_block() {
    let mut view = PostsView::new(vec![
      sample_block(1, Vec::new()),
      sample_block(2, Vec::new()),
    ]);

    view.select_next();
    view.toggle_selected();

    assert!(!view.blocks()[0].comments_visible);
    assert!(view.blocks()[1].comments_visible);
  }

  #[test]
  fn selection_is_clamped_and_pages_stay_in_bounds() {
    let mut view = PostsView::new(vec![
      sample_block(1, Vec::new()),
      sample_block(2, Vec::new()),
      sample_block(3, Vec::new()),
    ]);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.page_up(10);
    assert_eq!(view.selected_index(), Some(0));

    view.page_down(3);
    assert_eq!(view.selected_index(), Some(2));
  }

  #[test]
  fn empty_view_has_no_selection() {
    let view = PostsView::default();

    assert!(view.is_empty());
    assert_eq!(view.selected_index(), None);
  }
}
