/// An in-flight refresh. Responses carrying any other request id are
/// superseded and dropped on arrival.
pub(crate) struct PendingRefresh {
  pub(crate) request_id: u64,
  pub(crate) user_id: u64,
}
