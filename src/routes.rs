//! Page Routing
//!
//! Hash-based pages (`#/category/rc-cars`). The `Navigator` trait is the
//! seam the API client uses to send the user to `/login`.

use leptos::prelude::*;

pub const LOGIN_PATH: &str = "/login";

/// Admin screen tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Studio,
    Trending,
    Contact,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Studio, AdminTab::Trending, AdminTab::Contact];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminTab::Studio => "studio",
            AdminTab::Trending => "trending",
            AdminTab::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Studio => "Studio Showcase",
            AdminTab::Trending => "Hot Drops",
            AdminTab::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    /// `None` lists every category
    Category(Option<String>),
    Product(String),
    Login,
    Admin(AdminTab),
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Page::Home,
            ["shop"] => Page::Category(None),
            ["category", slug] => Page::Category(Some(slug.to_string())),
            ["product", id] => Page::Product(id.to_string()),
            ["login"] => Page::Login,
            ["admin"] => Page::Admin(AdminTab::Studio),
            ["admin", tab] => AdminTab::ALL
                .into_iter()
                .find(|t| t.slug() == *tab)
                .map(Page::Admin)
                .unwrap_or(Page::NotFound),
            _ => Page::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Category(None) => "/shop".to_string(),
            Page::Category(Some(slug)) => format!("/category/{}", slug),
            Page::Product(id) => format!("/product/{}", id),
            Page::Login => LOGIN_PATH.to_string(),
            Page::Admin(tab) => format!("/admin/{}", tab.slug()),
            Page::NotFound => "/404".to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Page::Admin(_))
    }
}

/// Something that can move the user to another page
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Drives the `Page` signal and mirrors it into `location.hash`
#[derive(Clone, Copy)]
pub struct HashNavigator {
    page: RwSignal<Page>,
}

impl HashNavigator {
    pub fn new(page: RwSignal<Page>) -> Self {
        Self { page }
    }

    /// Page for the hash the browser was opened with
    pub fn current_page() -> Page {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Page::from_path(&hash))
            .unwrap_or(Page::Home)
    }

    /// Switch pages; a no-op when already there, so the hash echo of our
    /// own navigation does not rebuild the page
    pub fn show(&self, page: Page) {
        self.page.maybe_update(|current| {
            if *current == page {
                false
            } else {
                *current = page;
                true
            }
        });
    }
}

impl Navigator for HashNavigator {
    fn navigate(&self, path: &str) {
        let page = Page::from_path(path);
        log::debug!("navigate {} -> {:?}", path, page);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&page.to_path());
        }
        self.show(page);
    }
}
