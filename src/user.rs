use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Company {
  #[serde(rename = "catchPhrase")]
  pub(crate) catch_phrase: String,
  pub(crate) name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct User {
  pub(crate) company: Company,
  pub(crate) id: u64,
  pub(crate) name: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn user_deserializes_from_wire_format() {
    let user: User = serde_json::from_str(
      r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "company": {
          "name": "Romaguera-Crona",
          "catchPhrase": "Multi-layered client-server neural-net",
          "bs": "harness real-time e-markets"
        }
      }"#,
    )
    .expect("user fixture deserializes");

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.company.name, "Romaguera-Crona");

    assert_eq!(
      user.company.catch_phrase,
      "Multi-layered client-server neural-net"
    );
  }
}
