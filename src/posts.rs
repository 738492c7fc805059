// Post operations. Same pass-through shape as the forum operations; the
// backend routes deletion through a DELETE with the post as the body rather
// than an id in the path.

use crate::client::ForumClient;
use crate::model::{NewPost, Post};

impl ForumClient {
    /// Fetch every post across all forums. `GET /posts`
    pub async fn list_posts(&self) -> reqwest::Result<Vec<Post>> {
        self.get_json("/posts").await
    }

    /// Fetch one post by id. `GET /posts/{id}`
    pub async fn get_post(&self, id: i32) -> reqwest::Result<Post> {
        self.get_json(&format!("/posts/{id}")).await
    }

    /// Fetch the posts of a forum. `GET /forums/{id}/posts`
    pub async fn posts_for_forum(&self, id: i32) -> reqwest::Result<Vec<Post>> {
        self.get_json(&format!("/forums/{id}/posts")).await
    }

    /// Create a post. `POST /posts`; the backend answers 201 with an empty
    /// body, so there is no created post to return.
    pub async fn create_post(&self, post: &NewPost) -> reqwest::Result<()> {
        self.post_json_no_content("/posts", post).await
    }

    /// Delete a post. `DELETE /posts` with the post as the body.
    pub async fn delete_post(&self, post: &Post) -> reqwest::Result<()> {
        self.delete_json("/posts", post).await
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
