//! Section Config Editor
//!
//! Load / edit / save / reset for a section's singleton config document.
//! `canonical` is the last copy the server confirmed; `draft` is what the
//! form edits and survives failed saves.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::ApiClient;
use crate::busy::BusyGuard;
use crate::error::{AppError, AppResult};

pub trait ConfigDocument: Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Whether the public section renders at all
    fn is_active(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigEndpoints {
    /// `GET` reads, `PUT` replaces
    pub path: &'static str,
    /// `POST` restores defaults
    pub reset: &'static str,
}

/// Initial fetch state; `Failed` is terminal until the user retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone)]
pub struct ConfigEditor<C: ConfigDocument> {
    api: ApiClient,
    endpoints: ConfigEndpoints,
    canonical: RwSignal<Option<C>>,
    draft: RwSignal<Option<C>>,
    state: RwSignal<LoadState>,
    busy: RwSignal<bool>,
}

impl<C: ConfigDocument> ConfigEditor<C> {
    pub fn new(api: ApiClient, endpoints: ConfigEndpoints) -> Self {
        Self {
            api,
            endpoints,
            canonical: RwSignal::new(None),
            draft: RwSignal::new(None),
            state: RwSignal::new(LoadState::Loading),
            busy: RwSignal::new(false),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn draft(&self) -> Option<C> {
        self.draft.get()
    }

    pub fn canonical(&self) -> Option<C> {
        self.canonical.get()
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.with(|d| self.canonical.with(|c| d != c))
    }

    // ========================
    // Local edits
    // ========================

    pub fn edit(&self, f: impl FnOnce(&mut C)) {
        self.draft.update(|d| {
            if let Some(doc) = d.as_mut() {
                f(doc);
            }
        });
    }

    /// Throw away unsaved edits
    pub fn discard(&self) {
        self.draft.set(self.canonical.get_untracked());
    }

    // ========================
    // Server round-trips
    // ========================

    pub async fn load(&self) -> AppResult<C> {
        self.state.set(LoadState::Loading);
        match self.api.get::<C>(self.endpoints.path).await {
            Ok(doc) => {
                self.accept(doc.clone());
                let _ = self.state.try_set(LoadState::Ready);
                Ok(doc)
            }
            Err(e) => {
                log::error!("loading {} failed: {}", self.endpoints.path, e);
                let _ = self.state.try_set(LoadState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Replace the whole document on the server
    pub async fn save(&self, doc: C) -> AppResult<C> {
        if !self.api.session().is_authenticated() {
            return Err(AppError::PermissionDenied);
        }
        let _busy = BusyGuard::acquire(self.busy)?;

        let saved: C = self.api.put(self.endpoints.path, &doc).await?;
        log::info!("saved {}", self.endpoints.path);
        self.accept(saved.clone());
        Ok(saved)
    }

    pub async fn save_draft(&self) -> AppResult<C> {
        let doc = self
            .draft
            .get_untracked()
            .ok_or_else(|| AppError::validation("Nothing to save yet"))?;
        self.save(doc).await
    }

    /// Ask the backend for its defaults; call only after the user confirmed
    pub async fn reset(&self) -> AppResult<C> {
        if !self.api.session().is_authenticated() {
            return Err(AppError::PermissionDenied);
        }
        let _busy = BusyGuard::acquire(self.busy)?;

        let fresh: C = self.api.post(self.endpoints.reset, &serde_json::json!({})).await?;
        log::info!("reset {} to defaults", self.endpoints.path);
        self.accept(fresh.clone());
        Ok(fresh)
    }

    fn accept(&self, doc: C) {
        let _ = self.canonical.try_set(Some(doc.clone()));
        let _ = self.draft.try_set(Some(doc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::models::{StudioConfig, Theme};
    use crate::sections::studio;
    use crate::testing::{signed_in_client, signed_out_client, FakeBackend};
    use serde_json::json;

    fn config_json(title: &str) -> serde_json::Value {
        json!({"title": title, "subtitle": "", "isActive": true, "autoPlayDuration": 5, "theme": "dark"})
    }

    async fn loaded(backend: &FakeBackend) -> ConfigEditor<StudioConfig> {
        let (client, _nav) = signed_in_client(backend);
        let editor = ConfigEditor::new(client, studio::CONFIG);
        backend.respond_json(json!({"success": true, "data": config_json("Showcase")}));
        editor.load().await.unwrap();
        editor
    }

    #[tokio::test]
    async fn test_load_failure_is_terminal_state() {
        let backend = FakeBackend::new();
        let (client, _nav) = signed_in_client(&backend);
        let editor: ConfigEditor<StudioConfig> = ConfigEditor::new(client, studio::CONFIG);
        backend.respond(503, "");

        assert!(editor.load().await.is_err());
        assert_eq!(editor.state.get_untracked(), LoadState::Failed("Request failed with status 503".into()));
        assert!(editor.draft.get_untracked().is_none());
    }

    #[tokio::test]
    async fn test_edit_marks_dirty_and_discard_restores() {
        let backend = FakeBackend::new();
        let editor = loaded(&backend).await;
        assert_eq!(editor.state.get_untracked(), LoadState::Ready);

        editor.edit(|c| c.theme = Theme::Neon);
        assert!(editor.draft.get_untracked() != editor.canonical.get_untracked());

        editor.discard();
        assert_eq!(editor.draft.get_untracked(), editor.canonical.get_untracked());
    }

    #[tokio::test]
    async fn test_save_sends_full_document() {
        let backend = FakeBackend::new();
        let editor = loaded(&backend).await;
        editor.edit(|c| c.title = "New Title".into());
        backend.respond_json(json!({"success": true, "data": config_json("New Title")}));

        let saved = editor.save_draft().await.unwrap();

        assert_eq!(saved.title, "New Title");
        assert_eq!(backend.requests()[1].method, Method::Put);
        assert_eq!(backend.request_body(1)["autoPlayDuration"], 5);
        assert_eq!(editor.canonical.get_untracked().unwrap().title, "New Title");
    }

    #[tokio::test]
    async fn test_failed_save_keeps_working_draft() {
        let backend = FakeBackend::new();
        let editor = loaded(&backend).await;
        editor.edit(|c| c.subtitle = "unsaved".into());
        backend.fail("offline");

        assert!(editor.save_draft().await.is_err());
        assert_eq!(editor.draft.get_untracked().unwrap().subtitle, "unsaved");
        assert_eq!(editor.canonical.get_untracked().unwrap().subtitle, "");
    }

    #[tokio::test]
    async fn test_save_without_session_fails_fast() {
        let backend = FakeBackend::new();
        let (client, _nav) = signed_out_client(&backend);
        let editor: ConfigEditor<StudioConfig> = ConfigEditor::new(client, studio::CONFIG);

        let err = editor.save(StudioConfig::default()).await.unwrap_err();
        assert_eq!(err, AppError::PermissionDenied);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_reset_replaces_with_server_defaults() {
        let backend = FakeBackend::new();
        let editor = loaded(&backend).await;
        editor.edit(|c| c.title = "Scratch".into());
        backend.respond_json(json!({"success": true, "data": config_json("Studio Showcase")}));

        editor.reset().await.unwrap();

        let sent = &backend.requests()[1];
        assert_eq!(sent.method, Method::Post);
        assert!(sent.url.ends_with("/studio/config/reset"));
        assert_eq!(editor.draft.get_untracked().unwrap().title, "Studio Showcase");
    }
}
