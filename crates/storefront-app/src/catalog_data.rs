#![forbid(unsafe_code)]

//! The bundled product catalog.

use storefront_model::{Catalog, CatalogError, Money, Product};

const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// The five products the storefront ships with.
pub fn default_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        Product::new(1, "Camiseta Premium Algodón", Money::from_major(2250))
            .with_image("/products/camiseta_basica.jpg")
            .with_description(
                "Confeccionada en algodón 100% orgánico, esta camiseta premium ofrece \
                 comodidad excepcional y durabilidad.",
            )
            .with_colors(["Negro", "Blanco", "Gris"])
            .with_sizes(SIZES),
        Product::new(2, "Blazer", Money::from_major(6250))
            .with_image("/products/blazer.jpg")
            .with_description(
                "Blazer de corte impecable diseñado para la mujer moderna. Perfecto para \
                 ocasiones formales y casuales.",
            )
            .with_colors(["Negro", "Beige", "Azul Marino"])
            .with_sizes(SIZES),
        Product::new(3, "Vestido Elegante", Money::from_major(4500))
            .with_image("/products/vestido.jpg")
            .with_description(
                "Vestido de líneas limpias y silueta favorecedora. Ideal para eventos \
                 especiales y cenas elegantes.",
            )
            .with_colors(["Negro", "Blanco", "Rojo"])
            .with_sizes(SIZES),
        Product::new(4, "Falda", Money::from_major(3250))
            .with_image("/products/falda.jpg")
            .with_description(
                "Falda de corte con acabados de lujo. Combina perfectamente con cualquier blusa.",
            )
            .with_colors(["Negro", "Gris", "Azul Marino"])
            .with_sizes(SIZES),
        Product::new(5, "Chaqueta Denim Vintage", Money::from_major(10000))
            .with_image("/products/chaqueta.jpg")
            .with_description(
                "Abrigo de cachemira pura con diseño atemporal. Una inversión en elegancia \
                 y calidad.",
            )
            .with_colors(["Camel", "Negro", "Gris"])
            .with_sizes(SIZES),
    ])
}
