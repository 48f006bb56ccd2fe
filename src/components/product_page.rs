//! Product Page

use leptos::prelude::*;

use crate::catalog::{self, Product};
use crate::components::{NotFound, ProductCard};
use crate::context::use_app;
use crate::routes::Page;

#[component]
pub fn ProductPage(id: String) -> impl IntoView {
    match catalog::product(&id) {
        Some(product) => view! { <ProductDetail product=product /> }.into_any(),
        None => {
            log::info!("unknown product {}", id);
            view! { <NotFound /> }.into_any()
        }
    }
}

/// Quantity picker value kept within `1..=stock`
fn clamp_quantity(quantity: u32, stock: u32) -> u32 {
    quantity.clamp(1, stock.max(1))
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let ctx = use_app();
    let contact_open = ctx.contact_open;
    let (quantity, set_quantity) = signal(1u32);

    let category = catalog::category(product.category);
    let related = catalog::related(product, 4);
    let has_related = !related.is_empty();

    view! {
        <div class="product-page">
            <nav class="breadcrumbs">
                <a href="#/">"Home"</a>
                " / "
                {category.map(|c| view! {
                    <a href=format!("#{}", Page::Category(Some(c.slug.to_string())).to_path())>{c.name}</a>
                })}
                " / "
                <span>{product.name}</span>
            </nav>

            <div class="product-detail">
                <div class="product-gallery">
                    <img src=product.image alt=product.name />
                </div>
                <div class="product-summary">
                    <h1>{product.name}</h1>
                    <div class="product-meta">
                        <span class="product-scale">{product.scale}</span>
                        <span class="product-rating">{format!("★ {:.1}", product.rating)}</span>
                        {product.is_new.then(|| view! { <span class="product-badge">"New"</span> })}
                    </div>
                    <p class="product-price">{product.price_label()}</p>
                    <p class="product-description">{product.description}</p>
                    <ul class="product-features">
                        {product.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                    </ul>

                    {if product.in_stock() {
                        let stock = product.stock;
                        view! {
                            <div class="purchase-row">
                                <div class="quantity">
                                    <button
                                        disabled=move || quantity.get() <= 1
                                        on:click=move |_| set_quantity.update(|q| *q = clamp_quantity(q.saturating_sub(1), stock))
                                    >"−"</button>
                                    <span>{move || quantity.get()}</span>
                                    <button
                                        disabled=move || quantity.get() >= stock
                                        on:click=move |_| set_quantity.update(|q| *q = clamp_quantity(*q + 1, stock))
                                    >"+"</button>
                                </div>
                                <span class="stock-note">{format!("{} in stock", product.stock)}</span>
                            </div>
                        }.into_any()
                    } else {
                        view! { <p class="stock-note sold-out">"Sold out"</p> }.into_any()
                    }}

                    <button class="btn primary" on:click=move |_| contact_open.set(true)>
                        "Ask about this"
                    </button>
                </div>
            </div>

            <Show when=move || has_related>
                <section class="related-products">
                    <h2>"You might also like"</h2>
                    <div class="product-grid">
                        {related.iter().map(|p| view! { <ProductCard product=*p /> }).collect_view()}
                    </div>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_stays_within_stock() {
        assert_eq!(clamp_quantity(0, 5), 1);
        assert_eq!(clamp_quantity(3, 5), 3);
        assert_eq!(clamp_quantity(6, 5), 5);
        // sold out still shows a quantity of one
        assert_eq!(clamp_quantity(2, 0), 1);
    }
}
