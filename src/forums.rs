// Forum operations: the five calls the forum UI makes against the backend.
//
// Each operation is a direct pass-through. The id is interpolated into the
// path, the payload is serialized verbatim, and the decoded response comes
// back unmodified.

use crate::client::ForumClient;
use crate::model::{Forum, ModeratorAssignment, NewForum, User};

impl ForumClient {
    /// Fetch every forum. `GET /forums`
    pub async fn list_forums(&self) -> reqwest::Result<Vec<Forum>> {
        self.get_json("/forums").await
    }

    /// Fetch one forum by id. `GET /forums/{id}`
    pub async fn get_forum(&self, id: i32) -> reqwest::Result<Forum> {
        self.get_json(&format!("/forums/{id}")).await
    }

    /// Fetch the moderators of a forum. `GET /forums/{id}/mods`
    pub async fn get_moderators(&self, id: i32) -> reqwest::Result<Vec<User>> {
        self.get_json(&format!("/forums/{id}/mods")).await
    }

    /// Create a forum. `POST /forums`
    pub async fn create_forum(&self, forum: &NewForum) -> reqwest::Result<Forum> {
        self.post_json("/forums", forum).await
    }

    /// Grant a user moderator rights on a forum. `POST /forums/{id}/mods`
    pub async fn promote_user_to_mod(
        &self,
        id: i32,
        user: &User,
    ) -> reqwest::Result<ModeratorAssignment> {
        self.post_json(&format!("/forums/{id}/mods"), user).await
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
