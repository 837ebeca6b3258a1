use super::*;

pub(crate) struct State {
  help: HelpView,
  list_height: usize,
  menu: MenuView,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_refresh: Option<PendingRefresh>,
  transient_message: Option<TransientMessage>,
  users_loading: bool,
}

impl State {
  fn close_posts(&mut self) {
    self.mode = Mode::Menu;

    if !self.help.is_visible() {
      self.message = MENU_STATUS.into();
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::ClosePosts => self.close_posts(),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::NextEmployee => self.switch_employee(1),
      Command::None => {}
      Command::PageDown => self.menu_page_down(),
      Command::PageUp => self.menu_page_up(),
      Command::PreviousEmployee => self.switch_employee(-1),
      Command::Quit => should_exit = true,
      Command::SelectFirst => self.menu_select(0),
      Command::SelectLast => {
        self.menu_select(self.menu.len().saturating_sub(1));
      }
      Command::SelectNext => {
        if !self.menu.is_disabled() {
          self.menu.select_next();
        }
      }
      Command::SelectPrevious => {
        if !self.menu.is_disabled() {
          self.menu.select_previous();
        }
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::SubmitSelection => self.submit_selection(),
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Posts { request_id, result } => {
        let Some(pending) = self.pending_refresh.as_ref() else {
          return;
        };

        // A superseded refresh; drop the response.
        if pending.request_id != request_id {
          return;
        }

        let Some(pending) = self.pending_refresh.take() else {
          return;
        };

        // Teardown precedes any rebuild, success or failure.
        self.mode = Mode::Posts(PostsView::default());

        match result {
          Ok(blocks) => {
            self.mode = Mode::Posts(PostsView::new(blocks));

            if !self.help.is_visible() {
              self.message = POSTS_STATUS.into();
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.message = POSTS_STATUS.into();

              self.set_transient_message(format!(
                "Could not load posts for employee {}: {}",
                pending.user_id,
                truncate(&error.to_string(), 80)
              ));
            }
          }
        }

        self.menu.set_disabled(false);
      }
      Event::Users { result } => {
        self.users_loading = false;

        match result {
          Ok(users) => {
            self
              .menu
              .set_options(SelectOption::from_users(&users).unwrap_or_default());

            if !self.help.is_visible() {
              self.message = MENU_STATUS.into();
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.message = MENU_STATUS.into();

              self.set_transient_message(format!(
                "Could not load employees: {}",
                truncate(&error.to_string(), 80)
              ));
            }
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn menu(&self) -> &MenuView {
    &self.menu
  }

  fn menu_page_down(&mut self) {
    let current = self.menu.selected_index().unwrap_or(0);
    self.menu_select(current.saturating_add(self.page_jump()));
  }

  fn menu_page_up(&mut self) {
    let current = self.menu.selected_index().unwrap_or(0);
    self.menu_select(current.saturating_sub(self.page_jump()));
  }

  fn menu_select(&mut self, index: usize) {
    if !self.menu.is_disabled() {
      self.menu.set_selected(index);
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new() -> Self {
    Self {
      help: HelpView::new(),
      list_height: 0,
      menu: MenuView::default(),
      message: LOADING_EMPLOYEES_STATUS.into(),
      mode: Mode::Menu,
      next_request_id: 0,
      pending_effects: vec![Effect::FetchUsers],
      pending_refresh: None,
      transient_message: None,
      users_loading: true,
    }
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_menu_offset(&mut self, offset: usize) {
    self.menu.set_offset(offset);
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_refresh(&mut self, user_id: u64) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.menu.set_disabled(true);

    self.pending_refresh = Some(PendingRefresh {
      request_id,
      user_id,
    });

    if !self.help.is_visible() {
      self.message = LOADING_POSTS_STATUS.into();
    }

    self.pending_effects.push(Effect::FetchPosts {
      request_id,
      user_id,
    });
  }

  fn submit_selection(&mut self) {
    if self.menu.is_disabled() {
      return;
    }

    let Some(option) = self.menu.selected_option() else {
      return;
    };

    self.start_refresh(option.value);
  }

  fn switch_employee(&mut self, direction: isize) {
    if self.menu.is_disabled() {
      return;
    }

    let Some(current) = self.menu.selected_index() else {
      return;
    };

    let target = if direction >= 0 {
      current.saturating_add(1).min(self.menu.len().saturating_sub(1))
    } else {
      current.saturating_sub(1)
    };

    if target == current {
      return;
    }

    self.menu.set_selected(target);

    if let Some(option) = self.menu.selected_option() {
      self.start_refresh(option.value);
    }
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn users_loading(&self) -> bool {
    self.users_loading
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::user::Company};

  fn sample_users() -> Vec<User> {
    vec![
      User {
        company: Company {
          catch_phrase: "Multi-layered client-server neural-net".to_string(),
          name: "Romaguera-Crona".to_string(),
        },
        id: 1,
        name: "Leanne Graham".to_string(),
      },
      User {
        company: Company {
          catch_phrase: "Proactive didactic contingency".to_string(),
          name: "Deckow-Crist".to_string(),
        },
        id: 2,
        name: "Ervin Howell".to_string(),
      },
    ]
  }

  fn sample_blocks() -> Vec<PostBlock> {
    [1, 2]
      .into_iter()
      .map(|id| {
        PostBlock::assemble(
          Post {
            body: format!("body {id}"),
            id,
            title: format!("title {id}"),
            user_id: 1,
          },
          None,
          Vec::new(),
        )
      })
      .collect()
  }

  fn populated_state() -> State {
    let mut state = State::new();

    state.take_pending_effects();

    state.handle_event(Event::Users {
      result: Ok(sample_users()),
    });

    state
  }

  #[test]
  fn new_state_queues_the_initial_users_fetch() {
    let mut state = State::new();

    assert_eq!(state.message(), LOADING_EMPLOYEES_STATUS);
    assert!(state.users_loading());

    assert_eq!(state.take_pending_effects(), vec![Effect::FetchUsers]);
    assert!(state.take_pending_effects().is_empty());
  }

  #[test]
  fn users_event_populates_one_option_per_user() {
    let state = populated_state();

    let options = state.menu().options();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].value, 1);
    assert_eq!(options[0].label, "Leanne Graham");
    assert_eq!(options[1].value, 2);
    assert_eq!(options[1].label, "Ervin Howell");

    assert_eq!(state.message(), MENU_STATUS);
  }

  #[test]
  fn users_event_failure_sets_a_transient_message() {
    let mut state = State::new();
    state.take_pending_effects();

    state.handle_event(Event::Users {
      result: Err(anyhow::anyhow!("connection refused")),
    });

    assert!(state.menu().is_empty());
    assert!(
      state.message().starts_with("Could not load employees:"),
      "unexpected message: {}",
      state.message()
    );
  }

  #[test]
  fn submit_selection_disables_menu_and_emits_fetch() {
    let mut state = populated_state();

    let dispatch = state.dispatch_command(Command::SubmitSelection);

    assert!(!dispatch.should_exit);

    assert_eq!(
      dispatch.effects,
      vec![Effect::FetchPosts {
        request_id: 0,
        user_id: 1,
      }]
    );

    assert!(state.menu().is_disabled());
    assert_eq!(state.message(), LOADING_POSTS_STATUS);
  }

  #[test]
  fn submit_while_refresh_pending_is_a_noop() {
    let mut state = populated_state();

    state.dispatch_command(Command::SubmitSelection);

    let dispatch = state.dispatch_command(Command::SubmitSelection);

    assert!(dispatch.effects.is_empty());
  }

  #[test]
  fn posts_event_rebuilds_view_and_reenables_menu() {
    let mut state = populated_state();

    state.dispatch_command(Command::SubmitSelection);

    state.handle_event(Event::Posts {
      request_id: 0,
      result: Ok(sample_blocks()),
    });

    assert!(!state.menu().is_disabled());
    assert_eq!(state.message(), POSTS_STATUS);

    match state.mode_mut() {
      Mode::Posts(view) => assert_eq!(view.len(), 2),
      Mode::Menu => panic!("expected posts mode after refresh"),
    }
  }

  #[test]
  fn posts_event_failure_still_tears_down_and_reenables() {
    let mut state = populated_state();

    state.dispatch_command(Command::SubmitSelection);

    state.handle_event(Event::Posts {
      request_id: 0,
      result: Ok(sample_blocks()),
    });

    state.dispatch_command(Command::SubmitSelection);

    state.handle_event(Event::Posts {
      request_id: 1,
      result: Err(anyhow::anyhow!("503 service unavailable")),
    });

    assert!(!state.menu().is_disabled());

    assert!(
      state.message().starts_with("Could not load posts"),
      "unexpected message: {}",
      state.message()
    );

    match state.mode_mut() {
      Mode::Posts(view) => assert!(view.is_empty()),
      Mode::Menu => panic!("teardown should leave the posts view in place"),
    }
  }

  #[test]
  fn zero_posts_refresh_leaves_an_empty_view() {
    let mut state = populated_state();

    state.dispatch_command(Command::SubmitSelection);

    state.handle_event(Event::Posts {
      request_id: 0,
      result: Ok(Vec::new()),
    });

    match state.mode_mut() {
      Mode::Posts(view) => assert!(view.is_empty()),
      Mode::Menu => panic!("expected posts mode after refresh"),
    }
  }

  #[test]
  fn stale_posts_event_is_dropped() {
    let mut state = populated_state();

    state.dispatch_command(Command::SubmitSelection);

    state.handle_event(Event::Posts {
      request_id: 99,
      result: Ok(sample_blocks()),
    });

    assert!(state.menu().is_disabled());
    assert!(matches!(state.mode_mut(), Mode::Menu));
  }

  #[test]
  fn next_employee_moves_selection_and_refreshes() {
    let mut state = populated_state();

    let dispatch = state.dispatch_command(Command::NextEmployee);

    assert_eq!(state.menu().selected_index(), Some(1));

    assert_eq!(
      dispatch.effects,
      vec![Effect::FetchPosts {
        request_id: 0,
        user_id: 2,
      }]
    );
  }

  #[test]
  fn previous_employee_at_first_entry_does_not_refresh() {
    let mut state = populated_state();

    let dispatch = state.dispatch_command(Command::PreviousEmployee);

    assert_eq!(state.menu().selected_index(), Some(0));
    assert!(dispatch.effects.is_empty());
  }

  #[test]
  fn menu_navigation_is_ignored_while_disabled() {
    let mut state = populated_state();

    state.dispatch_command(Command::SubmitSelection);
    state.dispatch_command(Command::SelectNext);

    assert_eq!(state.menu().selected_index(), Some(0));
  }
}
