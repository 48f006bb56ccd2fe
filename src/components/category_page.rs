//! Category Page
//!
//! Product grid with category, search, price and stock filters.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{self, parse_price, CatalogQuery, CatalogQueryStoreFields, SortKey, CATEGORIES, PRODUCTS};
use crate::components::ProductCard;

#[component]
pub fn CategoryPage(slug: Option<String>) -> impl IntoView {
    let heading = slug
        .as_deref()
        .and_then(catalog::category)
        .map(|c| (c.name.to_string(), c.blurb.to_string()))
        .unwrap_or_else(|| ("All products".to_string(), "Everything in the garage".to_string()));

    let query = Store::new(CatalogQuery::for_category(slug));

    let results = move || query.with(|q| q.apply(PRODUCTS));

    view! {
        <div class="category-page">
            <header class="page-header">
                <h1>{heading.0}</h1>
                <p>{heading.1}</p>
            </header>

            <div class="category-layout">
                <aside class="filters">
                    <label class="filter">
                        <span>"Search"</span>
                        <input
                            type="search"
                            placeholder="Name or description..."
                            prop:value=move || query.search().get()
                            on:input=move |ev| *query.search().write() = event_target_value(&ev)
                        />
                    </label>

                    <label class="filter">
                        <span>"Category"</span>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            *query.category().write() = (!value.is_empty()).then_some(value);
                        }>
                            <option value="" selected=move || query.category().get().is_none()>"All"</option>
                            {CATEGORIES.iter().map(|c| {
                                let slug = c.slug;
                                view! {
                                    <option
                                        value=slug
                                        selected=move || query.category().get().as_deref() == Some(slug)
                                    >
                                        {c.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>

                    <div class="filter price-range">
                        <span>"Price"</span>
                        <input
                            type="text"
                            placeholder="Min $"
                            on:change=move |ev| *query.min_price_cents().write() = parse_price(&event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Max $"
                            on:change=move |ev| *query.max_price_cents().write() = parse_price(&event_target_value(&ev))
                        />
                    </div>

                    <label class="filter checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || query.in_stock_only().get()
                            on:change=move |ev| *query.in_stock_only().write() = event_target_checked(&ev)
                        />
                        <span>"In stock only"</span>
                    </label>

                    <label class="filter">
                        <span>"Sort by"</span>
                        <select on:change=move |ev| *query.sort().write() = SortKey::from_slug(&event_target_value(&ev))>
                            {SortKey::ALL.into_iter().map(|key| view! {
                                <option value=key.slug() selected=move || query.sort().get() == key>
                                    {key.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                </aside>

                <section class="results">
                    <p class="result-count">{move || format!("{} products", results().len())}</p>
                    {move || {
                        let hits = results();
                        if hits.is_empty() {
                            view! { <div class="empty-state">"No products match these filters."</div> }.into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {hits.into_iter().map(|p| view! { <ProductCard product=p /> }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
