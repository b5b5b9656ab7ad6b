use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(MenuItemId);
id_newtype!(TestimonialId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Coffee,
    Breakfast,
    Lunch,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Coffee,
        Category::Breakfast,
        Category::Lunch,
        Category::Desserts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Desserts => "desserts",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

/// A catalog entry as the storefront renders it.
///
/// `price` is display text (for example `"$4.50"`); totals are derived from it
/// by the cart's price rule. `category` stays a plain string so carts persisted
/// by older storefront builds keep round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_color: Option<String>,
}

impl MenuItem {
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub text: String,
    pub name: String,
    pub title: String,
    pub rating: f32,
}
