//! Studio Showcase section

use super::{parse_bool, parse_count, ConfigSchema, FieldKind, FieldSpec, ItemSchema, THEME_FIELD};
use crate::collection::{CollectionEndpoints, OrderedItem};
use crate::config_editor::{ConfigDocument, ConfigEndpoints};
use crate::models::{StudioConfig, StudioVideo, Theme};

pub const ENDPOINTS: CollectionEndpoints = CollectionEndpoints {
    base: "/studio/videos",
    reorder: "/studio/videos/reorder",
};

pub const CONFIG: ConfigEndpoints = ConfigEndpoints {
    path: "/studio/config",
    reset: "/studio/config/reset",
};

impl OrderedItem for StudioVideo {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn media_url(&self) -> &str {
        &self.video_url
    }
}

impl ItemSchema for StudioVideo {
    const NOUN: &'static str = "video";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("videoUrl", "Video URL", FieldKind::Url).required(),
        FieldSpec::new("thumbnailUrl", "Thumbnail URL", FieldKind::Url),
        FieldSpec::new("category", "Category", FieldKind::Text),
        FieldSpec::new("description", "Description", FieldKind::TextArea),
        FieldSpec::new("isActive", "Visible on storefront", FieldKind::Toggle),
    ];

    fn blank() -> Self {
        StudioVideo { is_active: true, ..Default::default() }
    }

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "videoUrl" => self.video_url.clone(),
            "thumbnailUrl" => self.thumbnail_url.clone(),
            "category" => self.category.clone(),
            "description" => self.description.clone(),
            "isActive" => self.is_active.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "videoUrl" => self.video_url = value,
            "thumbnailUrl" => self.thumbnail_url = value,
            "category" => self.category = value,
            "description" => self.description = value,
            "isActive" => self.is_active = parse_bool(&value),
            _ => log::warn!("unknown studio field {}", key),
        }
    }

    fn thumbnail(&self) -> &str {
        &self.thumbnail_url
    }
}

impl ConfigDocument for StudioConfig {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl ConfigSchema for StudioConfig {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Section title", FieldKind::Text),
        FieldSpec::new("subtitle", "Subtitle", FieldKind::Text),
        FieldSpec::new("autoPlayDuration", "Seconds per slide", FieldKind::Number),
        THEME_FIELD,
        FieldSpec::new("isActive", "Show on storefront", FieldKind::Toggle),
    ];

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "subtitle" => self.subtitle.clone(),
            "autoPlayDuration" => self.auto_play_duration.to_string(),
            "theme" => self.theme.as_str().to_string(),
            "isActive" => self.is_active.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "subtitle" => self.subtitle = value,
            "autoPlayDuration" => self.auto_play_duration = parse_count(&value, self.auto_play_duration),
            "theme" => self.theme = Theme::from_slug(&value),
            "isActive" => self.is_active = parse_bool(&value),
            _ => log::warn!("unknown studio config field {}", key),
        }
    }
}

impl StudioConfig {
    /// Slide duration in milliseconds, at least one second
    pub fn slide_millis(&self) -> u32 {
        self.auto_play_duration.max(1).saturating_mul(1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_roundtrip_through_schema() {
        let mut v = StudioVideo::blank();
        assert!(v.is_active);
        v.set_field("title", "Night Drift".into());
        v.set_field("videoUrl", "https://cdn.test/n.mp4".into());
        v.set_field("isActive", "false".into());

        assert_eq!(v.field("title"), "Night Drift");
        assert!(!v.is_active);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_required_fields_match_validation() {
        let required: Vec<&str> = StudioVideo::FIELDS.iter().filter(|f| f.required).map(|f| f.key).collect();
        assert_eq!(required, vec!["title", "videoUrl"]);
    }

    #[test]
    fn test_config_fields_edit_in_place() {
        let mut cfg = StudioConfig::default();
        cfg.set_field("theme", "neon".into());
        cfg.set_field("autoPlayDuration", "9".into());
        cfg.set_field("autoPlayDuration", "soon".into());

        assert_eq!(cfg.theme, Theme::Neon);
        assert_eq!(cfg.field("autoPlayDuration"), "9");
    }

    #[test]
    fn test_slide_millis_has_floor() {
        let cfg = StudioConfig { auto_play_duration: 0, ..Default::default() };
        assert_eq!(cfg.slide_millis(), 1_000);
        let cfg = StudioConfig { auto_play_duration: 8, ..Default::default() };
        assert_eq!(cfg.slide_millis(), 8_000);
    }
}
