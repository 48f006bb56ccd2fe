//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, ReqwestTransport};
use crate::config_editor::ConfigEditor;
use crate::models::ContactInfo;
use crate::routes::{HashNavigator, Navigator, Page};
use crate::sections::contact;
use crate::session::{CredentialStore, LocalStorageStore, MemoryStore, Session};
use crate::settings::AppSettings;
use crate::status::StatusBanner;

/// App-wide services and signals provided via context
#[derive(Clone)]
pub struct AppContext {
    /// The one HTTP client; carries the session and the 401 policy
    pub api: ApiClient,
    pub status: StatusBanner,
    pub settings: AppSettings,
    /// Current page, driven by `location.hash`
    pub page: RwSignal<Page>,
    /// Contact modal visibility
    pub contact_open: RwSignal<bool>,
    /// Contact details, shared by the public modal and the admin tab
    pub contact: ConfigEditor<ContactInfo>,
    navigator: HashNavigator,
}

impl AppContext {
    pub fn new(settings: AppSettings) -> Self {
        let page = RwSignal::new(HashNavigator::current_page());
        let navigator = HashNavigator::new(page);
        let store: Arc<dyn CredentialStore> = if LocalStorageStore::is_available() {
            Arc::new(LocalStorageStore)
        } else {
            log::warn!("localStorage unavailable, sign-in lasts until reload");
            Arc::new(MemoryStore::default())
        };
        let session = Session::restore(store);
        let api = ApiClient::new(
            &settings.api_base_url,
            Arc::new(ReqwestTransport::new()),
            session,
            Arc::new(navigator),
        );
        let contact = ConfigEditor::new(api.clone(), contact::CONFIG);
        Self {
            api,
            contact,
            status: StatusBanner::new(settings.status_timeout_ms),
            settings,
            page,
            contact_open: RwSignal::new(false),
            navigator,
        }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn go(&self, page: Page) {
        self.navigator.navigate(&page.to_path());
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
