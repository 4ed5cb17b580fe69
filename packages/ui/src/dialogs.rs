//! Modal forms for publishing a post and replacing the avatar.

use std::str::FromStr;

use api::{AccessType, ImageFile, PostDraft};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label, ModalOverlay};
use crate::session::{use_api, use_session};

/// Read the first picked file into an [`ImageFile`].
async fn picked_image(evt: &FormEvent) -> Option<ImageFile> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;
    Some(ImageFile::new(name, bytes))
}

#[component]
pub fn CreatePostDialog(on_created: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let client = use_api();
    let session = use_session();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut access_type = use_signal(AccessType::default);
    let mut image = use_signal(|| Option::<ImageFile>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let draft = PostDraft {
                title: title(),
                description: description(),
                access_type: access_type(),
                image: image(),
            };
            if let Err(message) = draft.validate() {
                error.set(Some(message));
                return;
            }

            error.set(None);
            saving.set(true);
            let snapshot = session.peek().clone();
            match client.create_post(&snapshot, &draft).await {
                Ok(()) => {
                    tracing::info!(title = %draft.title, "post published");
                    on_created.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let picked_name = image.read().as_ref().map(|img| img.file_name.clone());

    rsx! {
        ModalOverlay {
            title: "New post",
            on_close: move |_| on_close.call(()),
            form {
                class: "dialog-form",
                onsubmit: handle_submit,

                ErrorBanner { message: error() }

                div {
                    class: "field",
                    Label { html_for: "post-title", "Title" }
                    Input {
                        id: "post-title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "post-description", "Description" }
                    textarea {
                        id: "post-description",
                        class: "input",
                        rows: 4,
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "post-access", "Who can see this" }
                    select {
                        id: "post-access",
                        class: "input",
                        value: access_type().as_str(),
                        onchange: move |evt| {
                            if let Ok(access) = AccessType::from_str(&evt.value()) {
                                access_type.set(access);
                            }
                        },
                        for access in AccessType::ALL {
                            option { key: "{access}", value: access.as_str(), {access.label()} }
                        }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "post-image", "Image (optional)" }
                    input {
                        id: "post-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| async move {
                            image.set(picked_image(&evt).await);
                        },
                    }
                    if let Some(name) = picked_name {
                        span { class: "field__hint", "{name}" }
                    }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Publishing..." } else { "Publish" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
pub fn UploadAvatarDialog(on_uploaded: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let client = use_api();
    let session = use_session();
    let mut image = use_signal(|| Option::<ImageFile>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let handle_upload = move |_| {
        let client = client.clone();
        spawn(async move {
            let Some(file) = image() else {
                error.set(Some("Choose an image first".to_string()));
                return;
            };
            error.set(None);
            uploading.set(true);
            let snapshot = session.peek().clone();
            match client.upload_avatar(&snapshot, &file).await {
                Ok(()) => on_uploaded.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            uploading.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            title: "Change avatar",
            on_close: move |_| on_close.call(()),
            div {
                class: "dialog-form",
                ErrorBanner { message: error() }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt: FormEvent| async move {
                        image.set(picked_image(&evt).await);
                    },
                }
                div {
                    class: "dialog-actions",
                    Button {
                        disabled: uploading() || image.read().is_none(),
                        onclick: handle_upload,
                        if uploading() { "Uploading..." } else { "Upload" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
