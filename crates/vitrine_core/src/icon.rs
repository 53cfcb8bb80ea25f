//! Closed set of icons used by differential cards and area cards.

use serde::{Deserialize, Serialize};

/// An icon the site knows how to render.
///
/// Identifiers are the PascalCase names stored by the backend. Unknown names
/// are rejected by [`std::str::FromStr`]; callers that must render something
/// use [`Icon::resolve`], which falls back to [`Icon::DEFAULT`].
///
/// # Examples
///
/// ```
/// use vitrine_core::Icon;
///
/// assert_eq!("ShoppingCart".parse::<Icon>().unwrap(), Icon::ShoppingCart);
/// assert!("Rocket".parse::<Icon>().is_err());
/// assert_eq!(Icon::resolve("Rocket"), Icon::DEFAULT);
/// assert_eq!(Icon::ShoppingCart.slug(), "shopping-cart");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Icon {
    /// Food sector
    Wheat,
    /// Ornamental stone
    Gem,
    /// E-commerce
    ShoppingCart,
    /// Bicycles
    Bike,
    /// People
    Users,
    /// Time
    Clock,
    /// Security
    Shield,
    /// World
    Globe,
    /// Building
    Building,
    /// Logistics
    Truck,
    /// Generic highlight
    Star,
}

impl Icon {
    /// Icon used when a stored name is unknown.
    pub const DEFAULT: Icon = Icon::Globe;

    /// Parse a stored name, falling back to [`Icon::DEFAULT`].
    pub fn resolve(name: &str) -> Icon {
        name.parse().unwrap_or(Icon::DEFAULT)
    }

    /// Kebab-case icon slug used by the icon font.
    pub fn slug(&self) -> &'static str {
        match self {
            Icon::Wheat => "wheat",
            Icon::Gem => "gem",
            Icon::ShoppingCart => "shopping-cart",
            Icon::Bike => "bike",
            Icon::Users => "users",
            Icon::Clock => "clock",
            Icon::Shield => "shield",
            Icon::Globe => "globe",
            Icon::Building => "building",
            Icon::Truck => "truck",
            Icon::Star => "star",
        }
    }

    /// Label shown in the admin icon selector.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Wheat => "Trigo (Alimentos)",
            Icon::Gem => "Gema (Rochas)",
            Icon::ShoppingCart => "Carrinho (E-commerce)",
            Icon::Bike => "Bicicleta",
            Icon::Users => "Pessoas",
            Icon::Clock => "Relógio",
            Icon::Shield => "Escudo",
            Icon::Globe => "Globo",
            Icon::Building => "Prédio",
            Icon::Truck => "Caminhão",
            Icon::Star => "Estrela",
        }
    }

    /// Look up an icon by its slug (as used by the static site config).
    pub fn from_slug(slug: &str) -> Option<Icon> {
        use strum::IntoEnumIterator;
        Icon::iter().find(|icon| icon.slug().eq_ignore_ascii_case(slug))
    }
}
