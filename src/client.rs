use {
  super::*,
  anyhow::{Context, ensure},
};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      base_url: env::var("BULLETIN_API_URL")
        .unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string()),
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

  pub(crate) async fn fetch_post_comments(
    &self,
    post_id: u64,
  ) -> Result<Vec<Comment>> {
    ensure!(post_id != 0, "missing post id");

    Ok(
      self
        .client
        .get(format!("{}/posts/{post_id}/comments", self.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?,
    )
  }

  pub(crate) async fn fetch_user(&self, user_id: u64) -> Result<User> {
    ensure!(user_id != 0, "missing user id");

    Ok(
      self
        .client
        .get(format!("{}/users/{user_id}", self.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?,
    )
  }

  pub(crate) async fn fetch_user_posts(
    &self,
    user_id: u64,
  ) -> Result<Vec<Post>> {
    ensure!(user_id != 0, "missing user id");

    Ok(
      self
        .client
        .get(format!("{}/posts?userId={user_id}", self.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?,
    )
  }

  pub(crate) async fn fetch_users(&self) -> Result<Vec<User>> {
    Ok(
      self
        .client
        .get(format!("{}/users", self.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?,
    )
  }

  /// Fetches the user's posts, then fans out the per-post author and
  /// comment lookups with bounded concurrency. A post whose author
  /// lookup fails is kept with a placeholder attribution, and a failed
  /// comment lookup leaves that post's section empty.
  pub(crate) async fn load_post_blocks(
    &self,
    user_id: u64,
  ) -> Result<Vec<PostBlock>> {
    let posts = self
      .fetch_user_posts(user_id)
      .await
      .with_context(|| format!("failed to load posts for user {user_id}"))?;

    let blocks = stream::iter(posts.into_iter().map(|post| {
      let client = self.clone();

      async move {
        let (author, comments) = tokio::join!(
          client.fetch_user(post.user_id),
          client.fetch_post_comments(post.id),
        );

        PostBlock::assemble(post, author.ok(), comments.unwrap_or_default())
      }
    }))
    .buffered(8)
    .collect::<Vec<_>>()
    .await;

    Ok(blocks)
  }
}
