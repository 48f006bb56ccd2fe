//! Product Catalog
//!
//! Static product listings for category and product pages, plus the
//! filter/sort query the category page binds its controls to.

use reactive_stores::Store;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price_cents: u32,
    pub scale: &'static str,
    pub rating: f32,
    pub stock: u32,
    pub image: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub is_new: bool,
    /// Lower is shown first under "featured"
    pub featured_rank: u32,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_price(self.price_cents)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub static CATEGORIES: &[Category] = &[
    Category { slug: "rc-cars", name: "RC Cars", blurb: "On-road racers and drift machines" },
    Category { slug: "monster-trucks", name: "Monster Trucks", blurb: "Big tyres, bigger jumps" },
    Category { slug: "crawlers", name: "Rock Crawlers", blurb: "Slow, precise, unstoppable" },
    Category { slug: "die-cast", name: "Die-cast Collectibles", blurb: "Shelf-grade scale replicas" },
    Category { slug: "drones", name: "Drones", blurb: "FPV and camera quads" },
];

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "p-101",
        name: "Velocity GT Drift Car",
        category: "rc-cars",
        price_cents: 18_999,
        scale: "1:10",
        rating: 4.7,
        stock: 12,
        image: "/img/products/velocity-gt.jpg",
        description: "Brushless drift chassis with gyro-assisted steering and LED underglow.",
        features: &["Brushless 3300KV motor", "2.4GHz radio", "Active gyro"],
        is_new: true,
        featured_rank: 1,
    },
    Product {
        id: "p-102",
        name: "Apex Touring Racer",
        category: "rc-cars",
        price_cents: 12_950,
        scale: "1:10",
        rating: 4.4,
        stock: 5,
        image: "/img/products/apex-touring.jpg",
        description: "Shaft-driven 4WD touring car tuned for asphalt and carpet tracks.",
        features: &["4WD shaft drive", "Oil-filled shocks"],
        is_new: false,
        featured_rank: 6,
    },
    Product {
        id: "p-103",
        name: "Street Kart Mini",
        category: "rc-cars",
        price_cents: 4_999,
        scale: "1:24",
        rating: 4.1,
        stock: 0,
        image: "/img/products/street-kart.jpg",
        description: "Desk-sized kart with proportional throttle, perfect for indoor laps.",
        features: &["USB charging", "Proportional throttle"],
        is_new: false,
        featured_rank: 11,
    },
    Product {
        id: "p-201",
        name: "Titan X Monster Truck",
        category: "monster-trucks",
        price_cents: 34_900,
        scale: "1:8",
        rating: 4.9,
        stock: 3,
        image: "/img/products/titan-x.jpg",
        description: "6S-capable basher with a reinforced chassis and metal gear diffs.",
        features: &["6S LiPo ready", "Metal diffs", "Waterproof electronics"],
        is_new: true,
        featured_rank: 2,
    },
    Product {
        id: "p-202",
        name: "Mud Stomper",
        category: "monster-trucks",
        price_cents: 15_900,
        scale: "1:10",
        rating: 4.3,
        stock: 9,
        image: "/img/products/mud-stomper.jpg",
        description: "Splash-proof monster truck built for puddles, grass and dirt.",
        features: &["Splash-proof", "Long-travel suspension"],
        is_new: false,
        featured_rank: 7,
    },
    Product {
        id: "p-301",
        name: "Granite Trail Crawler",
        category: "crawlers",
        price_cents: 22_500,
        scale: "1:10",
        rating: 4.8,
        stock: 7,
        image: "/img/products/granite-trail.jpg",
        description: "Portal-axle crawler with locking diffs and a two-speed transmission.",
        features: &["Portal axles", "2-speed transmission", "Steel chassis"],
        is_new: false,
        featured_rank: 3,
    },
    Product {
        id: "p-302",
        name: "Pebble Micro Crawler",
        category: "crawlers",
        price_cents: 8_900,
        scale: "1:24",
        rating: 4.5,
        stock: 20,
        image: "/img/products/pebble-micro.jpg",
        description: "Palm-sized crawler for living-room trails and desk courses.",
        features: &["Micro servo", "Soft compound tyres"],
        is_new: true,
        featured_rank: 8,
    },
    Product {
        id: "p-401",
        name: "1967 Fastback Replica",
        category: "die-cast",
        price_cents: 6_450,
        scale: "1:18",
        rating: 4.6,
        stock: 14,
        image: "/img/products/fastback-67.jpg",
        description: "Opening doors, hood and trunk with a detailed engine bay.",
        features: &["Opening panels", "Rubber tyres", "Display base"],
        is_new: false,
        featured_rank: 4,
    },
    Product {
        id: "p-402",
        name: "Rally Legend Set",
        category: "die-cast",
        price_cents: 9_900,
        scale: "1:43",
        rating: 4.2,
        stock: 2,
        image: "/img/products/rally-legends.jpg",
        description: "Three-car set of classic rally liveries in a numbered display case.",
        features: &["Numbered edition", "Acrylic case"],
        is_new: true,
        featured_rank: 9,
    },
    Product {
        id: "p-501",
        name: "Hornet FPV Racer",
        category: "drones",
        price_cents: 27_900,
        scale: "5-inch",
        rating: 4.6,
        stock: 6,
        image: "/img/products/hornet-fpv.jpg",
        description: "Carbon-frame FPV quad with digital video link and GPS rescue.",
        features: &["Digital FPV", "GPS rescue", "Carbon frame"],
        is_new: false,
        featured_rank: 5,
    },
    Product {
        id: "p-502",
        name: "Skylark Camera Drone",
        category: "drones",
        price_cents: 19_500,
        scale: "Foldable",
        rating: 4.0,
        stock: 11,
        image: "/img/products/skylark.jpg",
        description: "Foldable camera drone with 3-axis gimbal and follow-me mode.",
        features: &["3-axis gimbal", "Follow-me", "30 min flight"],
        is_new: false,
        featured_rank: 10,
    },
];

pub fn category(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

pub fn product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Same-category products, excluding `product` itself
pub fn related(product: &Product, limit: usize) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] =
        [SortKey::Featured, SortKey::PriceAsc, SortKey::PriceDesc, SortKey::Rating, SortKey::Newest];

    pub fn slug(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::Rating => "Top rated",
            SortKey::Newest => "New arrivals",
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.slug() == slug).unwrap_or_default()
    }
}

/// Category page filter state
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: String,
    pub min_price_cents: Option<u32>,
    pub max_price_cents: Option<u32>,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn for_category(slug: Option<String>) -> Self {
        Self { category: slug, ..Default::default() }
    }

    fn matches(&self, p: &Product) -> bool {
        if let Some(cat) = &self.category {
            if p.category != cat {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !p.name.to_lowercase().contains(&needle)
            && !p.description.to_lowercase().contains(&needle)
        {
            return false;
        }
        if self.min_price_cents.is_some_and(|min| p.price_cents < min) {
            return false;
        }
        if self.max_price_cents.is_some_and(|max| p.price_cents > max) {
            return false;
        }
        !(self.in_stock_only && !p.in_stock())
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut hits: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        match self.sort {
            SortKey::Featured => hits.sort_by_key(|p| p.featured_rank),
            SortKey::PriceAsc => hits.sort_by_key(|p| p.price_cents),
            SortKey::PriceDesc => hits.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
            SortKey::Rating => hits.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Newest => hits.sort_by_key(|p| (!p.is_new, p.featured_rank)),
        }
        hits
    }
}

/// Parse a dollar amount typed into a price filter box
pub fn parse_price(input: &str) -> Option<u32> {
    let value: f64 = input.trim().trim_start_matches('$').parse().ok()?;
    (value.is_finite() && value >= 0.0).then(|| (value * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(hits: &[&Product]) -> Vec<&'static str> {
        hits.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_every_product_has_a_known_category() {
        for p in PRODUCTS {
            assert!(category(p.category).is_some(), "{} has unknown category", p.id);
        }
    }

    #[test]
    fn test_category_filter_with_featured_sort() {
        let q = CatalogQuery::for_category(Some("rc-cars".into()));
        assert_eq!(ids(&q.apply(PRODUCTS)), vec!["p-101", "p-102", "p-103"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let q = CatalogQuery { search: "GIMBAL".into(), ..Default::default() };
        assert_eq!(ids(&q.apply(PRODUCTS)), vec!["p-502"]);

        let q = CatalogQuery { search: "crawler".into(), sort: SortKey::PriceAsc, ..Default::default() };
        assert_eq!(ids(&q.apply(PRODUCTS)), vec!["p-302", "p-301"]);
    }

    #[test]
    fn test_price_range_and_stock() {
        let q = CatalogQuery {
            min_price_cents: Some(5_000),
            max_price_cents: Some(10_000),
            sort: SortKey::PriceDesc,
            ..Default::default()
        };
        assert_eq!(ids(&q.apply(PRODUCTS)), vec!["p-402", "p-302", "p-401"]);

        let q = CatalogQuery { category: Some("rc-cars".into()), in_stock_only: true, ..Default::default() };
        assert!(!ids(&q.apply(PRODUCTS)).contains(&"p-103"));
    }

    #[test]
    fn test_rating_and_newest_sorts() {
        let q = CatalogQuery { category: Some("monster-trucks".into()), sort: SortKey::Rating, ..Default::default() };
        assert_eq!(ids(&q.apply(PRODUCTS)), vec!["p-201", "p-202"]);

        let q = CatalogQuery { category: Some("die-cast".into()), sort: SortKey::Newest, ..Default::default() };
        assert_eq!(ids(&q.apply(PRODUCTS)), vec!["p-402", "p-401"]);
    }

    #[test]
    fn test_related_excludes_self() {
        let p = product("p-101").unwrap();
        assert_eq!(ids(&related(p, 4)), vec!["p-102", "p-103"]);
    }

    #[test]
    fn test_price_helpers() {
        assert_eq!(format_price(18_999), "$189.99");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(parse_price("$49.50"), Some(4_950));
        assert_eq!(parse_price(" 12 "), Some(1_200));
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("cheap"), None);
        assert_eq!(SortKey::from_slug("rating"), SortKey::Rating);
        assert_eq!(SortKey::from_slug("bogus"), SortKey::Featured);
    }
}
