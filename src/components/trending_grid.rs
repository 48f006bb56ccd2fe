//! Trending Grid Component
//!
//! "Hot Drops" video grid. Renders nothing when the section is switched off.

use leptos::prelude::*;

use crate::models::{TrendingConfig, TrendingVideo};
use crate::sections::showcase;

#[component]
fn TrendingCard(video: TrendingVideo) -> impl IntoView {
    let (playing, set_playing) = signal(false);
    let rating = video.rating_value().map(|r| format!("★ {:.1}", r)).unwrap_or_else(|| video.rating.clone());
    let has_badge = !video.badge.trim().is_empty();

    view! {
        <article
            class="trending-card"
            on:mouseenter=move |_| set_playing.set(true)
            on:mouseleave=move |_| set_playing.set(false)
        >
            <div class="trending-media">
                {
                    let video_url = video.video_url.clone();
                    let thumbnail = video.thumbnail_url.clone();
                    move || if playing.get() {
                        view! {
                            <video class="trending-video" src=video_url.clone() autoplay=true muted=true></video>
                        }.into_any()
                    } else {
                        view! { <img class="trending-thumb" src=thumbnail.clone() alt="" /> }.into_any()
                    }
                }
                <Show when=move || has_badge>
                    <span class="trending-badge">{video.badge.clone()}</span>
                </Show>
            </div>
            <div class="trending-info">
                <span class="trending-category">{video.category.clone()}</span>
                <h3 class="trending-title">{video.title.clone()}</h3>
                <div class="trending-meta">
                    <span class="trending-rating">{rating}</span>
                    <span class="trending-views">{video.views.clone()}</span>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn TrendingGrid(
    #[prop(into)] config: Signal<Option<TrendingConfig>>,
    #[prop(into)] items: Signal<Vec<TrendingVideo>>,
) -> impl IntoView {
    let cards = Memo::new(move |_| {
        config.with(|c| {
            items.with(|all| showcase(c.as_ref(), all).map(|shown| match c {
                Some(cfg) => cfg.limit(shown),
                None => shown,
            }))
        })
    });

    view! {
        {move || cards.get().map(|cards| view! {
            <section class=move || {
                let theme = config.with(|c| c.as_ref().map(|c| c.theme.as_str()).unwrap_or("dark"));
                format!("trending-section theme-{}", theme)
            }>
                <header class="section-header">
                    <h2>{move || config.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default())}</h2>
                    <p class="section-subtitle">
                        {move || config.with(|c| c.as_ref().map(|c| c.subtitle.clone()).unwrap_or_default())}
                    </p>
                </header>
                <div class="trending-grid">
                    {cards.into_iter().map(|video| view! { <TrendingCard video=video /> }).collect_view()}
                </div>
            </section>
        })}
    }
}
