//! # Posts, reactions and access types
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Post`] | A post as listed by the feed or a profile. Counters default to zero, the viewer's reaction to none and the access type to public when the server omits them. |
//! | [`AccessType`] | Per-post visibility: public, friends-only, private. Ordered by openness for sorting. |
//! | [`Reaction`] | Like or dislike. |
//! | [`ReactionSummary`] | Counters returned after reacting to a post. |
//! | [`PostDraft`] | Form contents for a new post, sent as multipart. |
//! | [`ImageFile`] | An image picked by the user (post image or avatar). |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    #[default]
    Public,
    Friends,
    Private,
}

impl AccessType {
    pub const ALL: [AccessType; 3] = [AccessType::Public, AccessType::Friends, AccessType::Private];

    /// Wire value, also used as the `accessType` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Public => "public",
            AccessType::Friends => "friends",
            AccessType::Private => "private",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccessType::Public => "Public",
            AccessType::Friends => "Friends only",
            AccessType::Private => "Private",
        }
    }

    /// Sort key: most open first.
    pub fn rank(&self) -> u8 {
        match self {
            AccessType::Public => 0,
            AccessType::Friends => 1,
            AccessType::Private => 2,
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessType::Public),
            "friends" => Ok(AccessType::Friends),
            "private" => Ok(AccessType::Private),
            other => Err(format!("Unknown access type: {other}")),
        }
    }
}

/// A viewer's reaction to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }
}

/// A post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub was_edited: bool,
    #[serde(default, deserialize_with = "super::null_default")]
    pub like_count: u32,
    #[serde(default, deserialize_with = "super::null_default")]
    pub dislike_count: u32,
    #[serde(default)]
    pub viewer_reaction: Option<Reaction>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub access_type: AccessType,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Post {
    /// Replace the reaction counters with the server's view after reacting.
    pub fn apply_reaction(&mut self, summary: &ReactionSummary) {
        self.like_count = summary.like_count;
        self.dislike_count = summary.dislike_count;
        self.viewer_reaction = summary.viewer_reaction;
    }
}

/// Reaction counters for one post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionSummary {
    #[serde(default, deserialize_with = "super::null_default")]
    pub like_count: u32,
    #[serde(default, deserialize_with = "super::null_default")]
    pub dislike_count: u32,
    #[serde(default)]
    pub viewer_reaction: Option<Reaction>,
}

/// An image picked from the user's device.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    pub fn mime(&self) -> Option<&'static str> {
        let ext = self.file_name.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "avif" => Some("image/avif"),
            "svg" => Some("image/svg+xml"),
            _ => None,
        }
    }
}

/// Contents of the "create post" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub access_type: AccessType,
    pub image: Option<ImageFile>,
}

impl PostDraft {
    /// Both text fields must be filled in before anything is sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Please fill in both title and description".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_default() {
        let post: Post = serde_json::from_value(json!({
            "id": 3,
            "title": "Hello",
            "description": "First post",
            "created_at": "2024-05-01T10:00:00.000Z",
            "viewer_reaction": null
        }))
        .unwrap();
        assert_eq!(post.like_count, 0);
        assert_eq!(post.dislike_count, 0);
        assert_eq!(post.viewer_reaction, None);
        assert_eq!(post.access_type, AccessType::Public);
        assert!(!post.was_edited);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "description": "d",
            "created_at": "2024-05-02T08:30:00Z",
            "was_edited": null,
            "like_count": null,
            "dislike_count": null,
            "access_type": null
        }))
        .unwrap();
        assert_eq!(post.like_count, 0);
        assert_eq!(post.dislike_count, 0);
        assert_eq!(post.access_type, AccessType::Public);
        assert!(!post.was_edited);

        let summary: ReactionSummary = serde_json::from_value(json!({
            "like_count": null,
            "dislike_count": 2,
            "viewer_reaction": null
        }))
        .unwrap();
        assert_eq!(summary.like_count, 0);
        assert_eq!(summary.dislike_count, 2);
    }

    #[test]
    fn test_full_post() {
        let post: Post = serde_json::from_value(json!({
            "id": 4,
            "title": "Trip",
            "description": "Photos",
            "created_at": "2024-05-02T08:30:00Z",
            "was_edited": true,
            "like_count": 5,
            "dislike_count": 1,
            "viewer_reaction": "like",
            "access_type": "friends",
            "author_name": "bob",
            "image_url": "/uploads/posts/4.png"
        }))
        .unwrap();
        assert_eq!(post.viewer_reaction, Some(Reaction::Like));
        assert_eq!(post.access_type, AccessType::Friends);
        assert_eq!(post.author_name.as_deref(), Some("bob"));
    }

    #[test]
    fn test_rejects_malformed_post() {
        // missing created_at
        assert!(serde_json::from_value::<Post>(
            json!({"id": 1, "title": "t", "description": "d"})
        )
        .is_err());
        // negative counter
        assert!(serde_json::from_value::<Post>(json!({
            "id": 1, "title": "t", "description": "d",
            "created_at": "2024-05-02T08:30:00Z", "like_count": -1
        }))
        .is_err());
        // unknown access type
        assert!(serde_json::from_value::<Post>(json!({
            "id": 1, "title": "t", "description": "d",
            "created_at": "2024-05-02T08:30:00Z", "access_type": "secret"
        }))
        .is_err());
    }

    #[test]
    fn test_access_type_parse_and_rank() {
        assert_eq!("friends".parse::<AccessType>(), Ok(AccessType::Friends));
        assert!("open".parse::<AccessType>().is_err());
        assert!(AccessType::Public.rank() < AccessType::Friends.rank());
        assert!(AccessType::Friends.rank() < AccessType::Private.rank());
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = PostDraft {
            title: "Title".into(),
            description: "  ".into(),
            ..PostDraft::default()
        };
        assert!(draft.validate().is_err());
        draft.description = "Body".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(ImageFile::new("me.PNG", vec![]).mime(), Some("image/png"));
        assert_eq!(ImageFile::new("a.jpeg", vec![]).mime(), Some("image/jpeg"));
        assert_eq!(ImageFile::new("notes.txt", vec![]).mime(), None);
    }
}
