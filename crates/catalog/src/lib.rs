//! Fixed menu and testimonial data published on the storefront.

use std::sync::LazyLock;

use shared::domain::{Category, MenuItem, MenuItemId, Testimonial, TestimonialId};

mod menu;
mod testimonials;

const BRAND_TAG_COLOR: &str = "bg-[#8B4513]/10 text-[#8B4513]";
const VEGETARIAN_TAG_COLOR: &str = "bg-green-100 text-green-800";

static SPECIALS: LazyLock<Vec<MenuItem>> = LazyLock::new(menu::specials);
static COFFEE: LazyLock<Vec<MenuItem>> = LazyLock::new(menu::coffee);
static BREAKFAST: LazyLock<Vec<MenuItem>> = LazyLock::new(menu::breakfast);
static LUNCH: LazyLock<Vec<MenuItem>> = LazyLock::new(menu::lunch);
static DESSERTS: LazyLock<Vec<MenuItem>> = LazyLock::new(menu::desserts);
static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(testimonials::all);

pub fn specials() -> &'static [MenuItem] {
    &SPECIALS
}

pub fn coffee() -> &'static [MenuItem] {
    &COFFEE
}

pub fn breakfast() -> &'static [MenuItem] {
    &BREAKFAST
}

pub fn lunch() -> &'static [MenuItem] {
    &LUNCH
}

pub fn desserts() -> &'static [MenuItem] {
    &DESSERTS
}

/// Regular menu section for a category. Specials are listed separately and
/// are not part of any section.
pub fn items_in(category: Category) -> &'static [MenuItem] {
    match category {
        Category::Coffee => coffee(),
        Category::Breakfast => breakfast(),
        Category::Lunch => lunch(),
        Category::Desserts => desserts(),
    }
}

/// Every item, specials first, then the menu sections in display order.
pub fn all_items() -> impl Iterator<Item = &'static MenuItem> {
    specials()
        .iter()
        .chain(Category::ALL.into_iter().flat_map(|category| items_in(category).iter()))
}

pub fn find(id: MenuItemId) -> Option<&'static MenuItem> {
    all_items().find(|item| item.id == id)
}

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

pub fn find_testimonial(id: TestimonialId) -> Option<&'static Testimonial> {
    testimonials().iter().find(|testimonial| testimonial.id == id)
}

fn item(
    id: i64,
    name: &str,
    price: &str,
    category: Category,
    image: &str,
    description: &str,
) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        category: category.as_str().to_string(),
        tag: None,
        tag_color: None,
    }
}

fn tagged(mut item: MenuItem, tag: &str, tag_color: &str) -> MenuItem {
    item.tag = Some(tag.to_string());
    item.tag_color = Some(tag_color.to_string());
    item
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
