//! Ordered Collection Store
//!
//! Keeps a section's ordered item list in step with the backend. Local state
//! changes only after the server confirms, except reorder which applies
//! optimistically and rolls back on failure.

mod ordered_list;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::busy::BusyGuard;
use crate::error::{AppError, AppResult};
use crate::models::ReorderRequest;

pub use ordered_list::{Direction, OrderedItem, OrderedList};

/// REST paths of one ordered section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionEndpoints {
    /// `GET` lists, `POST` creates
    pub base: &'static str,
    pub reorder: &'static str,
}

impl CollectionEndpoints {
    pub fn item(&self, id: &str) -> String {
        format!("{}/{}", self.base, id)
    }
}

#[derive(Clone)]
pub struct CollectionStore<T: OrderedItem> {
    api: ApiClient,
    endpoints: CollectionEndpoints,
    list: RwSignal<OrderedList<T>>,
    busy: RwSignal<bool>,
}

impl<T: OrderedItem> CollectionStore<T> {
    pub fn new(api: ApiClient, endpoints: CollectionEndpoints) -> Self {
        Self {
            api,
            endpoints,
            list: RwSignal::new(OrderedList::default()),
            busy: RwSignal::new(false),
        }
    }

    // ========================
    // Reads (tracked unless noted)
    // ========================

    pub fn items(&self) -> Vec<T> {
        self.list.with(|l| l.items().to_vec())
    }

    pub fn visible_items(&self) -> Vec<T> {
        self.list.with(|l| l.visible())
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> OrderedList<T> {
        self.list.get_untracked()
    }

    // ========================
    // Operations
    // ========================

    /// Replace the local list with the backend's, sorted by `order`
    pub async fn load(&self) -> AppResult<()> {
        let items: Vec<T> = self.api.get(self.endpoints.base).await?;
        log::debug!("loaded {} items from {}", items.len(), self.endpoints.base);
        let _ = self.list.try_set(OrderedList::from_unsorted(items));
        Ok(())
    }

    /// Create a new item; the server assigns `id` and `order`
    pub async fn add(&self, draft: T) -> AppResult<T> {
        draft.validate()?;
        let _busy = BusyGuard::acquire(self.busy)?;

        let mut body = serde_json::to_value(&draft)?;
        if let Some(fields) = body.as_object_mut() {
            fields.remove("id");
            fields.remove("order");
        }

        let created: T = self.api.post(self.endpoints.base, &body).await?;
        log::info!("created {} in {}", created.id(), self.endpoints.base);
        let _ = self.list.try_update(|l| l.insert(created.clone()));
        Ok(created)
    }

    /// Save an edited copy of an existing item; the server's reply wins
    pub async fn update(&self, id: &str, patch: T) -> AppResult<T> {
        if !self.list.with_untracked(|l| l.contains(id)) {
            return Err(AppError::NotFound(id.to_string()));
        }
        patch.validate()?;
        let _busy = BusyGuard::acquire(self.busy)?;

        let saved: T = self.api.put(&self.endpoints.item(id), &patch).await?;
        if let Some(Err(e)) = self.list.try_update(|l| l.replace(saved.clone())) {
            // deleted elsewhere while the request was out
            log::warn!("updated item {} vanished locally: {}", id, e);
            return Err(e);
        }
        Ok(saved)
    }

    /// Delete after confirmation; the row leaves the list only once the server agrees
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        if !self.list.with_untracked(|l| l.contains(id)) {
            return Err(AppError::NotFound(id.to_string()));
        }
        let _busy = BusyGuard::acquire(self.busy)?;

        self.api.delete(&self.endpoints.item(id)).await?;
        log::info!("deleted {} from {}", id, self.endpoints.base);
        let _ = self.list.try_update(|l| l.remove(id));
        Ok(())
    }

    /// Move one step up or down. `Ok(false)` when already at that edge or
    /// tied with the neighbour.
    pub async fn reorder(&self, id: &str, direction: Direction) -> AppResult<bool> {
        let snapshot = self.list.get_untracked();
        let mut next = snapshot.clone();
        let Some(orders) = next.swap_with_neighbor(id, direction)? else {
            return Ok(false);
        };
        let _busy = BusyGuard::acquire(self.busy)?;

        self.list.set(next);
        match self.api.post_ack(self.endpoints.reorder, &ReorderRequest { orders }).await {
            Ok(()) => Ok(true),
            Err(e) => {
                log::warn!("reorder of {} failed, restoring previous order: {}", id, e);
                let _ = self.list.try_set(snapshot);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::models::StudioVideo;
    use crate::sections::studio;
    use crate::testing::{signed_in_client, signed_out_client, FakeBackend};
    use serde_json::json;

    fn store(backend: &FakeBackend) -> CollectionStore<StudioVideo> {
        let (client, _nav) = signed_in_client(backend);
        CollectionStore::new(client, studio::ENDPOINTS)
    }

    fn row(id: &str, order: i32) -> serde_json::Value {
        json!({"id": id, "title": format!("Clip {id}"), "videoUrl": format!("{id}.mp4"), "order": order, "isActive": true})
    }

    async fn loaded(backend: &FakeBackend, rows: Vec<serde_json::Value>) -> CollectionStore<StudioVideo> {
        let store = store(backend);
        backend.respond_json(json!({"success": true, "data": rows}));
        store.load().await.unwrap();
        store
    }

    fn ids(store: &CollectionStore<StudioVideo>) -> Vec<String> {
        store.snapshot().ids()
    }

    #[tokio::test]
    async fn test_load_sorts_by_order() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("c", 9), row("a", 1), row("b", 4)]).await;
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_add_without_title_never_hits_network() {
        let backend = FakeBackend::new();
        let store = store(&backend);

        let draft = StudioVideo { video_url: "x.mp4".into(), ..Default::default() };
        let err = store.add(draft).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_without_media_never_hits_network() {
        let backend = FakeBackend::new();
        let store = store(&backend);

        let draft = StudioVideo { title: "Rock crawler".into(), ..Default::default() };
        assert!(matches!(store.add(draft).await, Err(AppError::Validation(_))));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_inserts_server_record_in_order() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("a", 0), row("c", 2)]).await;
        backend.respond_json(json!({"success": true, "data": row("b", 1)}));

        let draft = StudioVideo { id: "ignored".into(), title: "Clip b".into(), video_url: "b.mp4".into(), order: 99, ..Default::default() };
        let created = store.add(draft).await.unwrap();

        assert_eq!(created.id, "b");
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        let body = backend.request_body(1);
        assert!(body.get("id").is_none());
        assert!(body.get("order").is_none());
        assert_eq!(body["title"], "Clip b");
    }

    #[tokio::test]
    async fn test_add_failure_leaves_list_untouched() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("a", 0)]).await;
        backend.fail("offline");

        let draft = StudioVideo { title: "New".into(), video_url: "n.mp4".into(), ..Default::default() };
        assert!(matches!(store.add(draft).await, Err(AppError::Network(_))));
        assert_eq!(ids(&store), vec!["a"]);
        assert!(!store.busy.get_untracked());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("a", 0)]).await;

        let patch = StudioVideo { id: "ghost".into(), title: "x".into(), video_url: "x".into(), ..Default::default() };
        let err = store.update("ghost", patch).await.unwrap_err();

        assert_eq!(err, AppError::NotFound("ghost".into()));
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_update_takes_server_copy() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("a", 0), row("b", 1)]).await;
        let mut canonical = row("a", 0);
        canonical["title"] = json!("Trimmed Title");
        backend.respond_json(json!({"success": true, "data": canonical}));

        let mut patch = store.snapshot().get("a").cloned().unwrap();
        patch.title = "  Trimmed Title  ".into();
        store.update("a", patch).await.unwrap();

        assert_eq!(store.snapshot().get("a").unwrap().title, "Trimmed Title");
        let sent = &backend.requests()[1];
        assert_eq!(sent.method, Method::Put);
        assert!(sent.url.ends_with("/studio/videos/a"));
    }

    #[tokio::test]
    async fn test_remove_success_and_failure() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("a", 0), row("b", 1)]).await;

        backend.respond(500, r#"{"success":false,"message":"locked"}"#);
        let err = store.remove("a").await.unwrap_err();
        assert_eq!(err.to_string(), "locked");
        assert_eq!(ids(&store), vec!["a", "b"]);

        backend.respond_json(json!({"success": true}));
        store.remove("a").await.unwrap();
        assert_eq!(ids(&store), vec!["b"]);
    }

    #[tokio::test]
    async fn test_reorder_persists_both_pairs() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("A", 0), row("B", 1), row("C", 2)]).await;
        backend.respond_json(json!({"success": true}));

        assert!(store.reorder("B", Direction::Up).await.unwrap());

        assert_eq!(ids(&store), vec!["B", "A", "C"]);
        let sent = &backend.requests()[1];
        assert!(sent.url.ends_with("/studio/videos/reorder"));
        assert_eq!(
            backend.request_body(1),
            json!({"orders": [{"id": "A", "order": 1}, {"id": "B", "order": 0}]})
        );
    }

    #[tokio::test]
    async fn test_reorder_at_edges_sends_nothing() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("A", 0), row("B", 1)]).await;

        assert!(!store.reorder("A", Direction::Up).await.unwrap());
        assert!(!store.reorder("B", Direction::Down).await.unwrap());
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(ids(&store), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_reorder_between_tied_orders_sends_nothing() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("A", 0), row("B", 0), row("C", 1)]).await;

        assert!(!store.reorder("B", Direction::Up).await.unwrap());
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(ids(&store), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_reorder_round_trip() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("A", 0), row("B", 1), row("C", 2)]).await;
        let before = store.snapshot();
        backend.respond_json(json!({"success": true}));
        backend.respond_json(json!({"success": true}));

        store.reorder("C", Direction::Up).await.unwrap();
        store.reorder("C", Direction::Down).await.unwrap();

        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_reorder_failure_rolls_back() {
        let backend = FakeBackend::new();
        let store = loaded(&backend, vec![row("A", 0), row("B", 1), row("C", 2)]).await;
        let before = store.snapshot();
        backend.fail("timeout");

        assert!(store.reorder("C", Direction::Up).await.is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_mutations_need_a_session() {
        let backend = FakeBackend::new();
        let (client, _nav) = signed_out_client(&backend);
        let store: CollectionStore<StudioVideo> = CollectionStore::new(client, studio::ENDPOINTS);

        let draft = StudioVideo { title: "T".into(), video_url: "v".into(), ..Default::default() };
        assert_eq!(store.add(draft).await.unwrap_err(), AppError::PermissionDenied);
        assert!(backend.requests().is_empty());
    }
}
