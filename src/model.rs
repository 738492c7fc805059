// Wire types for the forum backend's JSON API.
//
// The backend serializes bean properties in camelCase and timestamps as
// zone-less `LocalDateTime` strings, hence the `NaiveDateTime` fields. No
// shape validation happens here; whatever the backend sends is what callers
// get.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A discussion board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub last_interaction: Option<NaiveDateTime>,
}

/// Payload for creating a forum. The backend assigns the id and makes the
/// caller the first moderator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewForum {
    pub name: String,
}

/// A forum user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
}

/// Response of a moderator promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeratorAssignment {
    pub user: User,
}

/// A post within a forum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub forum_id: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub forum_id: i32,
    pub title: String,
    pub description: String,
}
