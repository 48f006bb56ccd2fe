//! Ordered List
//!
//! Local copy of a section's items, always kept sorted by `order`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::OrderEntry;

/// An entity whose display position is a persisted integer
pub trait OrderedItem: Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    fn id(&self) -> &str;
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
    fn is_active(&self) -> bool;
    fn title(&self) -> &str;
    /// Video / image URL the item cannot exist without
    fn media_url(&self) -> &str;

    /// Checks run before anything is sent to the backend
    fn validate(&self) -> AppResult<()> {
        if self.title().trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if self.media_url().trim().is_empty() {
            return Err(AppError::validation("Video URL is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: OrderedItem> OrderedList<T> {
    /// Sort whatever the backend returned; equal orders keep arrival order
    pub fn from_unsorted(items: Vec<T>) -> Self {
        let mut list = Self { items };
        list.sort();
        list
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Active items in display order
    pub fn visible(&self) -> Vec<T> {
        self.items.iter().filter(|i| i.is_active()).cloned().collect()
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|i| i.id().to_string()).collect()
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sort();
    }

    /// Swap in the server's copy of an existing item
    pub fn replace(&mut self, item: T) -> AppResult<()> {
        let idx = self
            .position(item.id())
            .ok_or_else(|| AppError::NotFound(item.id().to_string()))?;
        self.items[idx] = item;
        self.sort();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() != before
    }

    /// Exchange `order` values with the neighbour in `direction`.
    ///
    /// Returns the two changed `(id, order)` pairs in pre-swap position
    /// order, or `None` when the item already sits at that edge or shares
    /// its `order` with the neighbour.
    pub fn swap_with_neighbor(&mut self, id: &str, direction: Direction) -> AppResult<Option<Vec<OrderEntry>>> {
        let idx = self.position(id).ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let neighbor = match direction {
            Direction::Up if idx > 0 => idx - 1,
            Direction::Down if idx + 1 < self.items.len() => idx + 1,
            _ => return Ok(None),
        };

        let (first, second) = (idx.min(neighbor), idx.max(neighbor));
        let first_order = self.items[first].order();
        let second_order = self.items[second].order();
        if first_order == second_order {
            log::debug!("{} ties with its neighbour at order {}, nothing to swap", id, first_order);
            return Ok(None);
        }
        self.items[first].set_order(second_order);
        self.items[second].set_order(first_order);

        let batch = vec![
            OrderEntry { id: self.items[first].id().to_string(), order: second_order },
            OrderEntry { id: self.items[second].id().to_string(), order: first_order },
        ];

        self.sort();
        Ok(Some(batch))
    }

    fn sort(&mut self) {
        // stable: ties keep insertion order
        self.items.sort_by_key(|i| i.order());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudioVideo;

    fn video(id: &str, order: i32) -> StudioVideo {
        StudioVideo {
            id: id.to_string(),
            title: format!("Video {}", id),
            video_url: format!("https://cdn.test/{}.mp4", id),
            order,
            is_active: true,
            ..Default::default()
        }
    }

    fn orders(list: &OrderedList<StudioVideo>) -> Vec<(String, i32)> {
        list.items().iter().map(|v| (v.id.clone(), v.order)).collect()
    }

    #[test]
    fn test_from_unsorted_sorts_and_keeps_ties_stable() {
        let list = OrderedList::from_unsorted(vec![video("c", 2), video("x", 1), video("a", 0), video("y", 1)]);
        assert_eq!(list.ids(), vec!["a", "x", "y", "c"]);
    }

    #[test]
    fn test_swap_up_concrete_scenario() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 0), video("B", 1), video("C", 2)]);

        let batch = list.swap_with_neighbor("B", Direction::Up).unwrap().unwrap();

        assert_eq!(orders(&list), vec![("B".into(), 0), ("A".into(), 1), ("C".into(), 2)]);
        assert_eq!(
            batch,
            vec![OrderEntry { id: "A".into(), order: 1 }, OrderEntry { id: "B".into(), order: 0 }]
        );
    }

    #[test]
    fn test_swap_at_edges_is_noop() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 0), video("B", 1), video("C", 2)]);
        let before = list.clone();

        assert_eq!(list.swap_with_neighbor("A", Direction::Up).unwrap(), None);
        assert_eq!(list.swap_with_neighbor("C", Direction::Down).unwrap(), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_swap_between_tied_orders_is_noop() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 0), video("B", 0), video("C", 1)]);
        let before = list.clone();

        assert_eq!(list.swap_with_neighbor("B", Direction::Up).unwrap(), None);
        assert_eq!(list.swap_with_neighbor("A", Direction::Down).unwrap(), None);
        assert_eq!(list, before);

        // the distinct neighbour still swaps
        assert!(list.swap_with_neighbor("B", Direction::Down).unwrap().is_some());
        assert_eq!(list.ids(), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_up_then_down_restores_sequence() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 10), video("B", 20), video("C", 35)]);
        let before = list.clone();

        list.swap_with_neighbor("C", Direction::Up).unwrap();
        assert_eq!(list.ids(), vec!["A", "C", "B"]);
        list.swap_with_neighbor("C", Direction::Down).unwrap();

        assert_eq!(list, before);
    }

    #[test]
    fn test_swap_keeps_non_contiguous_values() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 3), video("B", 7)]);
        list.swap_with_neighbor("A", Direction::Down).unwrap();
        assert_eq!(orders(&list), vec![("B".into(), 3), ("A".into(), 7)]);
    }

    #[test]
    fn test_swap_unknown_id() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 0)]);
        let err = list.swap_with_neighbor("zzz", Direction::Up).unwrap_err();
        assert_eq!(err, AppError::NotFound("zzz".into()));
    }

    #[test]
    fn test_replace_resorts_and_rejects_unknown() {
        let mut list = OrderedList::from_unsorted(vec![video("A", 0), video("B", 1)]);
        list.replace(video("A", 5)).unwrap();
        assert_eq!(list.ids(), vec!["B", "A"]);
        assert!(matches!(list.replace(video("Q", 0)), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_visible_skips_inactive() {
        let mut hidden = video("B", 1);
        hidden.is_active = false;
        let list = OrderedList::from_unsorted(vec![video("A", 0), hidden, video("C", 2)]);
        let visible: Vec<String> = list.visible().into_iter().map(|v| v.id).collect();
        assert_eq!(visible, vec!["A", "C"]);
    }

    #[test]
    fn test_default_validation() {
        let mut v = video("A", 0);
        assert!(v.validate().is_ok());
        v.title = "   ".into();
        assert_eq!(v.validate(), Err(AppError::validation("Title is required")));
        v.title = "ok".into();
        v.video_url.clear();
        assert_eq!(v.validate(), Err(AppError::validation("Video URL is required")));
    }
}
