use {
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_block::CommentBlock,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  futures::stream::{self, StreamExt},
  help_view::HelpView,
  menu_view::MenuView,
  mode::Mode,
  pending_refresh::PendingRefresh,
  post::Post,
  post_block::PostBlock,
  posts_view::PostsView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  select_option::SelectOption,
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, IsTerminal, Stdout},
    process,
    string::String,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  user::User,
  utils::{truncate, wrap_text},
};

mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_block;
mod effect;
mod event;
mod help_view;
mod menu_view;
mod mode;
mod pending_refresh;
mod post;
mod post_block;
mod posts_view;
mod select_option;
mod state;
mod transient_message;
mod user;
mod utils;

const MENU_STATUS: &str =
  "↑/k up • ↓/j down • enter load posts • q/esc quit • ? help";

const POSTS_STATUS: &str = "↑/k up • ↓/j down • ←/h previous employee • →/l next employee • enter toggle comments • esc back";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_EMPLOYEES_STATUS: &str = "Loading employees...";
const LOADING_POSTS_STATUS: &str = "Loading posts...";

const NO_POSTS_TEXT: &str = "Select an Employee to display their posts.";

const SHOW_COMMENTS_LABEL: &str = "Show Comments";
const HIDE_COMMENTS_LABEL: &str = "Hide Comments";

const BASE_INDENT: &str = " ";

const TRANSIENT_MESSAGE_DURATION: Duration = Duration::from_secs(3);

const HELP_TEXT: &str = "\
Employees:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first employee
  end     jump to last employee
  enter   load the selected employee's posts
  q       quit bulletin
  esc     close help or quit from the menu
  ?       toggle this help

Posts:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ← / h   switch to the previous employee
  → / l   switch to the next employee
  enter   show or hide the selected post's comments
  esc     return to the employee menu
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let client = Client::default();

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
