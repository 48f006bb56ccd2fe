//! UI Components
//!
//! Storefront pages, admin screens and the shared widgets they use.

mod admin_shell;
mod category_page;
mod collection_admin;
mod config_form;
mod confirm_modal;
mod contact_modal;
mod error_view;
mod field_input;
mod home_page;
mod login_page;
mod nav_bar;
mod product_card;
mod product_page;
mod section_admin;
mod status_banner;
mod studio_showcase;
mod trending_grid;

pub use admin_shell::AdminShell;
pub use category_page::CategoryPage;
pub use collection_admin::CollectionAdmin;
pub use config_form::ConfigForm;
pub(crate) use confirm_modal::can_dismiss;
pub use confirm_modal::ConfirmModal;
pub use contact_modal::ContactModal;
pub use error_view::{ErrorView, Loading, NotFound};
pub use field_input::FieldInput;
pub use home_page::HomePage;
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
pub use product_card::ProductCard;
pub use product_page::ProductPage;
pub use section_admin::{ContactAdmin, StudioAdmin, TrendingAdmin};
pub use status_banner::StatusBannerView;
pub use studio_showcase::StudioShowcase;
pub use trending_grid::TrendingGrid;
