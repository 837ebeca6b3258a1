#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  ClosePosts,
  HideHelp,
  NextEmployee,
  None,
  PageDown,
  PageUp,
  PreviousEmployee,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  SubmitSelection,
}
