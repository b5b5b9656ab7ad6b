use std::collections::HashSet;

use super::*;

#[test]
fn item_ids_are_unique_across_the_catalog() {
    let mut seen = HashSet::new();
    for item in all_items() {
        assert!(seen.insert(item.id), "duplicate id {}", item.id);
    }
    assert_eq!(seen.len(), 21);
}

#[test]
fn sections_only_hold_their_own_category() {
    for category in Category::ALL {
        let items = items_in(category);
        assert!(!items.is_empty());
        assert!(items
            .iter()
            .all(|item| item.category_kind() == Some(category)));
    }
}

#[test]
fn specials_carry_tags() {
    assert_eq!(specials().len(), 3);
    assert!(specials()
        .iter()
        .all(|item| item.tag.is_some() && item.tag_color.is_some()));
    assert!(coffee().iter().all(|item| item.tag.is_none()));
}

#[test]
fn find_resolves_specials_and_menu_items() {
    let house_blend = find(MenuItemId(1)).expect("house blend");
    assert_eq!(house_blend.name, "House Blend Coffee");
    assert_eq!(house_blend.price, "$4.50");

    let tiramisu = find(MenuItemId(404)).expect("tiramisu");
    assert_eq!(tiramisu.category, "desserts");

    assert!(find(MenuItemId(999)).is_none());
}

#[test]
fn prices_are_dollar_text() {
    assert!(all_items().all(|item| item.price.starts_with('$')));
}

#[test]
fn testimonials_allow_half_star_ratings() {
    assert_eq!(testimonials().len(), 3);
    let emily = find_testimonial(TestimonialId(3)).expect("testimonial");
    assert_eq!(emily.rating, 4.5);
}
