//! Home Page
//!
//! Hero, Studio Showcase, Hot Drops and category tiles. The two backend
//! sections fail quietly: a broken section just isn't rendered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{CatalogQuery, CATEGORIES, PRODUCTS};
use crate::collection::CollectionStore;
use crate::components::{ProductCard, StudioShowcase, TrendingGrid};
use crate::config_editor::ConfigEditor;
use crate::context::use_app;
use crate::models::{StudioConfig, StudioVideo, TrendingConfig, TrendingVideo};
use crate::sections::{studio, trending};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();

    let studio_videos = CollectionStore::<StudioVideo>::new(ctx.api.clone(), studio::ENDPOINTS);
    let studio_config = ConfigEditor::<StudioConfig>::new(ctx.api.clone(), studio::CONFIG);
    let trending_videos = CollectionStore::<TrendingVideo>::new(ctx.api.clone(), trending::ENDPOINTS);
    let trending_config = ConfigEditor::<TrendingConfig>::new(ctx.api.clone(), trending::CONFIG);

    {
        let (sv, sc, tv, tc) = (studio_videos.clone(), studio_config.clone(), trending_videos.clone(), trending_config.clone());
        spawn_local(async move {
            if let Err(e) = sc.load().await {
                log::warn!("studio config unavailable: {}", e);
                return;
            }
            if let Err(e) = sv.load().await {
                log::warn!("studio videos unavailable: {}", e);
            }
        });
        spawn_local(async move {
            if let Err(e) = tc.load().await {
                log::warn!("trending config unavailable: {}", e);
                return;
            }
            if let Err(e) = tv.load().await {
                log::warn!("trending videos unavailable: {}", e);
            }
        });
    }

    let featured = CatalogQuery::default().apply(PRODUCTS).into_iter().take(4).collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Built for speed. Collected for life."</h1>
                <p>"RC racers, crawlers, drones and shelf-grade die-cast."</p>
                <a class="btn primary" href="#/shop">"Shop the garage"</a>
            </section>

            <StudioShowcase
                config=Signal::derive(move || studio_config.canonical())
                items=Signal::derive(move || studio_videos.visible_items())
            />

            <section class="category-tiles">
                {CATEGORIES.iter().map(|c| view! {
                    <a class="category-tile" href=format!("#/category/{}", c.slug)>
                        <h3>{c.name}</h3>
                        <p>{c.blurb}</p>
                    </a>
                }).collect_view()}
            </section>

            <TrendingGrid
                config=Signal::derive(move || trending_config.canonical())
                items=Signal::derive(move || trending_videos.visible_items())
            />

            <section class="featured-products">
                <h2>"Featured"</h2>
                <div class="product-grid">
                    {featured.into_iter().map(|p| view! { <ProductCard product=p /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
