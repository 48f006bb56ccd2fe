//! Product Card Component

use leptos::prelude::*;

use crate::catalog::Product;
use crate::routes::Page;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let href = format!("#{}", Page::Product(product.id.to_string()).to_path());

    view! {
        <a class="product-card" href=href>
            <div class="product-image">
                <img src=product.image alt=product.name />
                {product.is_new.then(|| view! { <span class="product-badge">"New"</span> })}
                {(!product.in_stock()).then(|| view! { <span class="product-badge sold-out">"Sold out"</span> })}
            </div>
            <div class="product-info">
                <h3 class="product-name">{product.name}</h3>
                <div class="product-meta">
                    <span class="product-scale">{product.scale}</span>
                    <span class="product-rating">{format!("★ {:.1}", product.rating)}</span>
                </div>
                <span class="product-price">{product.price_label()}</span>
            </div>
        </a>
    }
}
