use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  pub(crate) body: String,
  pub(crate) email: String,
  pub(crate) name: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn comment_deserializes_from_wire_format() {
    let comment: Comment = serde_json::from_str(
      r#"{
        "postId": 1,
        "id": 2,
        "name": "quo vero reiciendis",
        "email": "Jayne_Kuhic@sydney.com",
        "body": "est natus enim nihil est dolore"
      }"#,
    )
    .expect("comment fixture deserializes");

    assert_eq!(comment.name, "quo vero reiciendis");
    assert_eq!(comment.email, "Jayne_Kuhic@sydney.com");
    assert_eq!(comment.body, "est natus enim nihil est dolore");
  }
}
