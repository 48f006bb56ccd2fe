//! Frontend Models
//!
//! Data structures matching backend payloads (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Response wrapper used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One `(id, order)` pair of a reorder batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub id: String,
    pub order: i32,
}

/// Body of `POST /{section}/reorder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub orders: Vec<OrderEntry>,
}

/// Visual theme shared by section configs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Neon,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Neon => "neon",
        }
    }

    pub fn from_slug(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "neon" => Theme::Neon,
            _ => Theme::Dark,
        }
    }
}

fn default_true() -> bool {
    true
}

// ========================
// Section Items
// ========================

/// Studio Showcase carousel entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioVideo {
    #[serde(alias = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Trending ("Hot Drops") grid entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    #[serde(alias = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// Free text as stored by the backend, e.g. "9.5"
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TrendingVideo {
    /// Numeric rating when the stored text parses as one
    pub fn rating_value(&self) -> Option<f32> {
        self.rating.trim().parse::<f32>().ok().filter(|r| r.is_finite())
    }
}

// ========================
// Section Configs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Seconds each slide stays on screen
    #[serde(default = "default_auto_play")]
    pub auto_play_duration: u32,
    #[serde(default)]
    pub theme: Theme,
}

fn default_auto_play() -> u32 {
    6
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Studio Showcase".to_string(),
            subtitle: String::new(),
            is_active: true,
            auto_play_duration: default_auto_play(),
            theme: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_max_items")]
    pub max_items: u32,
    #[serde(default)]
    pub theme: Theme,
}

fn default_max_items() -> u32 {
    8
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            title: "Hot Drops".to_string(),
            subtitle: String::new(),
            is_active: true,
            max_items: default_max_items(),
            theme: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub business_hours: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            title: "Get in touch".to_string(),
            email: String::new(),
            phone: String::new(),
            whatsapp: String::new(),
            address: String::new(),
            business_hours: String::new(),
            instagram: String::new(),
            is_active: true,
        }
    }
}

// ========================
// Auth
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Bearer token plus the profile it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
