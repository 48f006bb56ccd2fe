//! Storefront Sections
//!
//! Endpoint sets, item schemas and the public visibility rule for the
//! Studio Showcase, Trending and Contact sections.

pub mod contact;
pub mod studio;
pub mod trending;

use crate::collection::OrderedItem;
use crate::config_editor::ConfigDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    /// Free text that is expected to hold a number
    Number,
    Toggle,
    /// One of a fixed set of values
    Choice(&'static [&'static str]),
}

/// One editable field of an admin form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Form schema of an ordered item, drives the generic admin screen
pub trait ItemSchema: OrderedItem {
    const NOUN: &'static str;
    const FIELDS: &'static [FieldSpec];

    /// Blank draft for the "add" form
    fn blank() -> Self;
    fn field(&self, key: &str) -> String;
    fn set_field(&mut self, key: &str, value: String);

    fn thumbnail(&self) -> &str;
}

/// Form schema of a section's config document
pub trait ConfigSchema: ConfigDocument {
    const FIELDS: &'static [FieldSpec];

    fn field(&self, key: &str) -> String;
    fn set_field(&mut self, key: &str, value: String);
}

/// Theme picker shared by the two video sections
pub(crate) const THEME_FIELD: FieldSpec =
    FieldSpec::new("theme", "Theme", FieldKind::Choice(&["dark", "light", "neon"]));

/// What a public section shows: nothing when the config is missing or
/// switched off, otherwise the active items in order
pub fn showcase<C, T>(config: Option<&C>, items: &[T]) -> Option<Vec<T>>
where
    C: ConfigDocument,
    T: OrderedItem,
{
    let config = config?;
    if !config.is_active() {
        return None;
    }
    let visible: Vec<T> = items.iter().filter(|i| i.is_active()).cloned().collect();
    if visible.is_empty() {
        None
    } else {
        Some(visible)
    }
}

pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "on" | "1")
}

/// Whole-number field; anything unparsable leaves the old value alone
pub(crate) fn parse_count(value: &str, current: u32) -> u32 {
    match value.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            log::debug!("ignoring non-numeric input {:?}", value);
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StudioConfig, StudioVideo};

    fn clip(id: &str, active: bool) -> StudioVideo {
        StudioVideo { id: id.into(), title: id.into(), video_url: "v".into(), is_active: active, ..Default::default() }
    }

    #[test]
    fn test_inactive_config_renders_nothing() {
        let config = StudioConfig { is_active: false, ..Default::default() };
        let items = vec![clip("a", true), clip("b", true)];
        assert_eq!(showcase(Some(&config), &items), None);
    }

    #[test]
    fn test_missing_config_renders_nothing() {
        assert_eq!(showcase::<StudioConfig, _>(None, &[clip("a", true)]), None);
    }

    #[test]
    fn test_active_config_filters_inactive_items() {
        let config = StudioConfig::default();
        let shown = showcase(Some(&config), &[clip("a", true), clip("b", false)]).unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "a");

        assert_eq!(showcase(Some(&config), &[clip("b", false)]), None);
    }

    #[test]
    fn test_parse_count_keeps_old_value_on_garbage() {
        assert_eq!(parse_count(" 12 ", 3), 12);
        assert_eq!(parse_count("twelve", 3), 3);
        assert_eq!(parse_count("-1", 3), 3);
    }
}
