use super::*;

/// The selection control. While a refresh is in flight the menu is
/// disabled and selection changes are ignored.
#[derive(Default)]
pub(crate) struct MenuView {
  disabled: bool,
  offset: usize,
  options: Vec<SelectOption>,
  selected: usize,
}

impl MenuView {
  pub(crate) fn is_disabled(&self) -> bool {
    self.disabled
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.options.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.options.len()
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.options.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn options(&self) -> &[SelectOption] {
    &self.options
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.options.is_empty() {
      None
    } else {
      Some(self.selected.min(self.options.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_option(&self) -> Option<&SelectOption> {
    self
      .selected_index()
      .and_then(|index| self.options.get(index))
  }

  pub(crate) fn set_disabled(&mut self, disabled: bool) {
    self.disabled = disabled;
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.options.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.options.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_options(&mut self, options: Vec<SelectOption>) {
    self.options = options;
    self.offset = 0;
    self.selected = 0;
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.options.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.options.len().saturating_sub(1));
    }
  }
}
