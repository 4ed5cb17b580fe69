use serde::Deserialize;
use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ImageFile, Post, PostDraft, Reaction, ReactionSummary};
use crate::session::SessionStore;
use crate::transport::{ApiRequest, FormPart, Transport};

#[derive(Deserialize)]
struct IconResponse {
    #[serde(default, rename = "iconUrl")]
    icon_url: Option<String>,
}

/// Multipart field carrying an uploaded image.
const IMAGE_FIELD: &str = "image";

fn image_part(image: &ImageFile) -> FormPart {
    FormPart::File {
        name: IMAGE_FIELD.to_string(),
        file_name: image.file_name.clone(),
        mime: image.mime().map(str::to_string),
        bytes: image.bytes.clone(),
    }
}

impl<T: Transport> ApiClient<T> {
    /// Every post the viewer may see.
    pub async fn list_posts(&self, session: &SessionStore) -> Result<Vec<Post>, ApiError> {
        let request = self.authorize(session, ApiRequest::get("/api/posts"))?;
        self.fetch_list(request, "posts", "Failed to load posts").await
    }

    /// Posts written by `username` that the viewer may see.
    pub async fn user_posts(
        &self,
        session: &SessionStore,
        username: &str,
    ) -> Result<Vec<Post>, ApiError> {
        let request = self.authorize(session, ApiRequest::get("/api/posts").segment(username))?;
        self.fetch_list(request, "posts", "Failed to load posts").await
    }

    /// Publish a new post. The draft is validated before anything is sent.
    pub async fn create_post(
        &self,
        session: &SessionStore,
        draft: &PostDraft,
    ) -> Result<(), ApiError> {
        draft.validate().map_err(ApiError::Invalid)?;

        let mut parts = vec![
            FormPart::text("title", draft.title.trim()),
            FormPart::text("description", draft.description.trim()),
            FormPart::text("accessType", draft.access_type.as_str()),
        ];
        if let Some(image) = &draft.image {
            parts.push(image_part(image));
        }

        let request = ApiRequest::post("/api/posts/create").multipart(parts);
        let request = self.authorize(session, request)?;
        self.call(request, "Failed to create post").await?;
        Ok(())
    }

    pub async fn delete_post(&self, session: &SessionStore, post_id: i64) -> Result<(), ApiError> {
        let request = self.authorize(session, ApiRequest::delete("/api/posts").segment(post_id))?;
        self.call(request, "Failed to delete post").await?;
        Ok(())
    }

    /// Set the viewer's reaction on a post; returns the updated counters.
    pub async fn react(
        &self,
        session: &SessionStore,
        post_id: i64,
        reaction: Reaction,
    ) -> Result<ReactionSummary, ApiError> {
        let request = self.authorize(
            session,
            ApiRequest::post("/api/posts")
                .segment(post_id)
                .segment("reaction")
                .json(json!({ "reaction": reaction.as_str() })),
        )?;
        self.fetch(request, "Failed to save reaction").await
    }

    /// Server-relative URL of `username`'s avatar, if one was uploaded.
    /// Public: no token is sent.
    pub async fn avatar_url(&self, username: &str) -> Result<Option<String>, ApiError> {
        let request = ApiRequest::get("/api/icon").segment(username);
        let body: IconResponse = self.fetch(request, "Failed to load avatar").await?;
        Ok(body.icon_url.filter(|url| !url.is_empty()))
    }

    /// Replace the signed-in user's avatar.
    pub async fn upload_avatar(
        &self,
        session: &SessionStore,
        image: &ImageFile,
    ) -> Result<(), ApiError> {
        let request = self.authorize(
            session,
            ApiRequest::post("/api/icon/load").multipart(vec![image_part(image)]),
        )?;
        self.call(request, "Failed to upload avatar").await?;
        Ok(())
    }
}
