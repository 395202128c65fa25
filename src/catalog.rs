//! The fixed product catalog shown on the page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Identifier for one of the three showcased products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductId {
    Ring,
    Necklace,
    Earrings,
}

impl ProductId {
    /// All products, in page order.
    pub const ALL: [ProductId; 3] = [ProductId::Ring, ProductId::Necklace, ProductId::Earrings];

    /// Stable identifier used for element ids and data attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductId::Ring => "ring",
            ProductId::Necklace => "necklace",
            ProductId::Earrings => "earrings",
        }
    }
}

/// A product as shown on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub unit_price: f64,
    pub image_src: &'static str,
    pub image_alt: &'static str,
}

/// The page catalog, in display order. The lightbox image list is derived
/// from this at startup.
pub const PRODUCTS: [Product; 3] = [
    Product {
        id: ProductId::Ring,
        name: "Aurora Gold Ring",
        unit_price: 349.99,
        image_src: "images/aurora-ring.jpg",
        image_alt: "Gold ring with an opal center stone",
    },
    Product {
        id: ProductId::Necklace,
        name: "Celeste Pearl Necklace",
        unit_price: 520.0,
        image_src: "images/celeste-necklace.jpg",
        image_alt: "Pearl necklace on a silver chain",
    },
    Product {
        id: ProductId::Earrings,
        name: "Marisol Drop Earrings",
        unit_price: 189.5,
        image_src: "images/marisol-earrings.jpg",
        image_alt: "Drop earrings with emerald accents",
    },
];
