//! Trending ("Hot Drops") section

use super::{parse_bool, parse_count, ConfigSchema, FieldKind, FieldSpec, ItemSchema, THEME_FIELD};
use crate::collection::{CollectionEndpoints, OrderedItem};
use crate::config_editor::{ConfigDocument, ConfigEndpoints};
use crate::models::{Theme, TrendingConfig, TrendingVideo};

pub const ENDPOINTS: CollectionEndpoints = CollectionEndpoints {
    base: "/trending",
    reorder: "/trending/reorder",
};

pub const CONFIG: ConfigEndpoints = ConfigEndpoints {
    path: "/trending/config",
    reset: "/trending/reset",
};

impl OrderedItem for TrendingVideo {
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

impl ItemSchema for TrendingVideo {
    const NOUN: &'static str = "drop";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("videoUrl", "Video URL", FieldKind::Url).required(),
        FieldSpec::new("thumbnailUrl", "Thumbnail URL", FieldKind::Url),
        FieldSpec::new("category", "Category", FieldKind::Text),
        FieldSpec::new("rating", "Rating", FieldKind::Number),
        FieldSpec::new("views", "Views", FieldKind::Text),
        FieldSpec::new("badge", "Badge", FieldKind::Text),
        FieldSpec::new("isActive", "Visible on storefront", FieldKind::Toggle),
    ];

    fn blank() -> Self {
        TrendingVideo { is_active: true, ..Default::default() }
    }

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "videoUrl" => self.video_url.clone(),
            "thumbnailUrl" => self.thumbnail_url.clone(),
            "category" => self.category.clone(),
            "rating" => self.rating.clone(),
            "views" => self.views.clone(),
            "badge" => self.badge.clone(),
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
            "rating" => self.rating = value,
            "views" => self.views = value,
            "badge" => self.badge = value,
            "isActive" => self.is_active = parse_bool(&value),
            _ => log::warn!("unknown trending field {}", key),
        }
    }

    fn thumbnail(&self) -> &str {
        &self.thumbnail_url
    }
}

impl ConfigDocument for TrendingConfig {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl ConfigSchema for TrendingConfig {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Section title", FieldKind::Text),
        FieldSpec::new("subtitle", "Subtitle", FieldKind::Text),
        FieldSpec::new("maxItems", "Max items (0 = all)", FieldKind::Number),
        THEME_FIELD,
        FieldSpec::new("isActive", "Show on storefront", FieldKind::Toggle),
    ];

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "subtitle" => self.subtitle.clone(),
            "maxItems" => self.max_items.to_string(),
            "theme" => self.theme.as_str().to_string(),
            "isActive" => self.is_active.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "subtitle" => self.subtitle = value,
            "maxItems" => self.max_items = parse_count(&value, self.max_items),
            "theme" => self.theme = Theme::from_slug(&value),
            "isActive" => self.is_active = parse_bool(&value),
            _ => log::warn!("unknown trending config field {}", key),
        }
    }
}

impl TrendingConfig {
    /// Cap applied to the public grid; zero means no cap
    pub fn limit<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.max_items > 0 {
            items.truncate(self.max_items as usize);
        }
        items
    }
}
