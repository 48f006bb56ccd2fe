//! Studio Showcase Component
//!
//! Auto-advancing video carousel with a progress bar. Renders nothing when
//! the section is switched off or has no active videos.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::carousel::Carousel;
use crate::context::use_app;
use crate::models::{StudioConfig, StudioVideo};
use crate::sections::showcase;

fn page_visible() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| !d.hidden())
        .unwrap_or(true)
}

#[component]
pub fn StudioShowcase(
    #[prop(into)] config: Signal<Option<StudioConfig>>,
    #[prop(into)] items: Signal<Vec<StudioVideo>>,
) -> impl IntoView {
    let tick_ms = use_app().settings.carousel_tick_ms;

    let slides = Memo::new(move |_| {
        config.with(|c| items.with(|all| showcase(c.as_ref(), all))).unwrap_or_default()
    });
    let carousel = RwSignal::new(Carousel::new(0, 6_000));

    // keep slide count and duration in step with the data
    Effect::new(move |_| {
        let len = slides.with(|s| s.len());
        let slide_ms = config.with(|c| c.as_ref().map(|c| c.slide_millis()).unwrap_or(6_000));
        carousel.update(|c| {
            c.resize(len);
            c.set_slide_ms(slide_ms);
        });
    });

    // fixed-interval clock; stops when the component goes away
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        spawn_local(async move {
            while running.load(Ordering::Relaxed) {
                TimeoutFuture::new(tick_ms).await;
                let visible = page_visible();
                if carousel.try_update(|c| c.tick(tick_ms, visible)).is_none() {
                    break;
                }
            }
        });
    }
    on_cleanup(move || running.store(false, Ordering::Relaxed));

    let current = move || {
        let idx = carousel.with(|c| c.index());
        slides.with(|s| s.get(idx).cloned())
    };

    view! {
        <Show when=move || !slides.with(|s| s.is_empty())>
            <section class=move || {
                let theme = config.with(|c| c.as_ref().map(|c| c.theme.as_str()).unwrap_or("dark"));
                format!("studio-showcase theme-{}", theme)
            }>
                <header class="section-header">
                    <h2>{move || config.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default())}</h2>
                    <p class="section-subtitle">
                        {move || config.with(|c| c.as_ref().map(|c| c.subtitle.clone()).unwrap_or_default())}
                    </p>
                </header>

                <div
                    class=move || if carousel.with(|c| c.is_paused()) { "carousel paused" } else { "carousel" }
                    on:mouseenter=move |_| carousel.update(|c| c.set_paused(true))
                    on:mouseleave=move |_| carousel.update(|c| c.set_paused(false))
                >
                    {move || current().map(|video| view! {
                        <div class="carousel-slide">
                            <video
                                class="carousel-video"
                                src=video.video_url.clone()
                                poster=video.thumbnail_url.clone()
                                autoplay=true
                                muted=true
                                playsinline=true
                            ></video>
                            <div class="carousel-caption">
                                <span class="carousel-category">{video.category.clone()}</span>
                                <h3>{video.title.clone()}</h3>
                                <p>{video.description.clone()}</p>
                            </div>
                        </div>
                    })}

                    <Show when=move || carousel.with(|c| c.len() > 1)>
                        <button class="carousel-nav prev" on:click=move |_| carousel.update(|c| c.prev())>"‹"</button>
                        <button class="carousel-nav next" on:click=move |_| carousel.update(|c| c.next())>"›"</button>
                    </Show>

                    <div class="carousel-progress">
                        <div
                            class="carousel-progress-bar"
                            style=move || format!("width: {:.1}%;", carousel.with(|c| c.progress()) * 100.0)
                        ></div>
                    </div>
                </div>

                <div class="carousel-dots">
                    {move || (0..slides.with(|s| s.len())).map(|i| view! {
                        <button
                            class=move || if carousel.with(|c| c.index()) == i { "dot active" } else { "dot" }
                            on:click=move |_| carousel.update(|c| c.go_to(i))
                        ></button>
                    }).collect_view()}
                </div>
            </section>
        </Show>
    }
}
