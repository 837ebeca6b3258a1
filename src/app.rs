use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize);

    let selected_tab = match self.state.mode_mut() {
      Mode::Menu => 0,
      Mode::Posts(_) => 1,
    };

    let tab_titles: Vec<Line> = ["employees", "posts"]
      .iter()
      .map(|label| Line::from(label.to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(selected_tab)
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    let users_loading = self.state.users_loading();

    let (list_items, selected_index, offset) =
      if let Mode::Posts(view) = self.state.mode_mut() {
        let list_items: Vec<ListItem> = if view.is_empty() {
          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw(NO_POSTS_TEXT),
          ]))]
        } else {
          view
            .blocks()
            .iter()
            .map(|block| Self::post_list_item(block, layout[1].width))
            .collect()
        };

        (list_items, view.selected_index(), view.offset())
      } else {
        let menu = self.state.menu();

        let list_items: Vec<ListItem> = if menu.is_empty() {
          let text = if users_loading {
            LOADING_EMPLOYEES_STATUS
          } else {
            "No employees to show."
          };

          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw(text),
          ]))]
        } else {
          let style = if menu.is_disabled() {
            Style::default().fg(Color::DarkGray)
          } else {
            Style::default().fg(Color::White)
          };

          menu
            .options()
            .iter()
            .map(|option| {
              ListItem::new(vec![
                Line::from(vec![
                  Span::raw(BASE_INDENT),
                  Span::styled(option.label.clone(), style),
                ]),
                Line::from(Span::raw(BASE_INDENT)),
              ])
            })
            .collect()
        };

        (list_items, menu.selected_index(), menu.offset())
      };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    let rendered_offset = list_state.offset();

    if let Mode::Posts(view) = self.state.mode_mut() {
      view.set_offset(rendered_offset);
    } else {
      self.state.set_menu_offset(rendered_offset);
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPosts {
        request_id,
        user_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::Posts {
            request_id,
            result: client.load_post_blocks(user_id).await,
          });
        });
      }
      Effect::FetchUsers => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::Users {
            result: client.fetch_users().await,
          });
        });
      }
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(),
    }
  }

  fn post_list_item(block: &PostBlock, available_width: u16) -> ListItem {
    let indent = BASE_INDENT;
    let prefix_width = indent.chars().count();

    let max_width = available_width as usize;
    let wrap_width = max_width.saturating_sub(prefix_width).max(1);

    let mut lines = vec![Line::from(vec![
      Span::raw(indent),
      Span::styled(
        block.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
      ),
    ])];

    for line in wrap_text(&block.body, wrap_width) {
      lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(line, Style::default().fg(Color::Gray)),
      ]));
    }

    let mut details = vec![block.id_line(), block.author_line.clone()];

    if let Some(catch_phrase) = &block.catch_phrase {
      details.push(catch_phrase.clone());
    }

    for detail in details {
      lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(vec![
      Span::raw(indent),
      Span::styled(
        format!("[{}]", block.button_label()),
        Style::default().fg(Color::Cyan),
      ),
    ]));

    if block.comments_visible {
      let comment_indent = format!("{indent}  ");
      let comment_wrap_width = max_width
        .saturating_sub(comment_indent.chars().count())
        .max(1);

      if block.comments.is_empty() {
        lines.push(Line::from(vec![
          Span::raw(comment_indent.clone()),
          Span::styled("No comments.", Style::default().fg(Color::DarkGray)),
        ]));
      }

      for comment in &block.comments {
        lines.push(Line::from(vec![
          Span::raw(comment_indent.clone()),
          Span::styled(
            comment.name.clone(),
            Style::default().fg(Color::White),
          ),
        ]));

        for line in wrap_text(&comment.body, comment_wrap_width) {
          lines.push(Line::from(vec![
            Span::raw(comment_indent.clone()),
            Span::styled(line, Style::default().fg(Color::Gray)),
          ]));
        }

        lines.push(Line::from(vec![
          Span::raw(comment_indent.clone()),
          Span::styled(
            comment.source_line(),
            Style::default().fg(Color::DarkGray),
          ),
        ]));
      }
    }

    lines.push(Line::from(Span::raw(indent)));

    ListItem::new(lines)
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.take_pending_effects() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }

      self.process_pending_events();
    }

    Ok(())
  }
}
