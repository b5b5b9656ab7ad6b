use shared::domain::{Category, MenuItem};

use crate::{item, tagged, BRAND_TAG_COLOR, VEGETARIAN_TAG_COLOR};

const FEATURE_WIDTH: u32 = 800;
const THUMB_WIDTH: u32 = 200;

fn photo(photo_id: &str, width: u32) -> String {
    format!(
        "https://images.unsplash.com/photo-{photo_id}?ixlib=rb-1.2.1&auto=format&fit=crop&w={width}&q=80"
    )
}

pub(crate) fn specials() -> Vec<MenuItem> {
    vec![
        tagged(
            item(
                1,
                "House Blend Coffee",
                "$4.50",
                Category::Coffee,
                &photo("1579888944880-d98341245702", FEATURE_WIDTH),
                "Our signature blend with notes of chocolate, hazelnut, and caramel. Perfectly balanced with a smooth finish.",
            ),
            "Bestseller",
            BRAND_TAG_COLOR,
        ),
        tagged(
            item(
                2,
                "Avocado Toast",
                "$8.95",
                Category::Breakfast,
                &photo("1557006315-d49f323e2e6d", FEATURE_WIDTH),
                "Sourdough toast topped with smashed avocado, cherry tomatoes, feta cheese, and a sprinkle of red pepper flakes.",
            ),
            "Vegetarian",
            VEGETARIAN_TAG_COLOR,
        ),
        tagged(
            item(
                3,
                "Belgian Waffle",
                "$9.50",
                Category::Breakfast,
                &photo("1616486029423-aaa4789e8c9a", FEATURE_WIDTH),
                "Light and crispy Belgian waffle topped with fresh berries, whipped cream, and maple syrup.",
            ),
            "Weekend Special",
            BRAND_TAG_COLOR,
        ),
    ]
}

pub(crate) fn coffee() -> Vec<MenuItem> {
    let entry = |id, name, price, photo_id, description| {
        item(
            id,
            name,
            price,
            Category::Coffee,
            &photo(photo_id, THUMB_WIDTH),
            description,
        )
    };
    vec![
        entry(
            101,
            "Espresso",
            "$3.50",
            "1541167760496-1628856ab772",
            "A concentrated coffee served in a small, strong shot.",
        ),
        entry(
            102,
            "Cappuccino",
            "$4.75",
            "1534687941688-13b3c3e20513",
            "Espresso with steamed milk foam, dusted with cocoa powder.",
        ),
        entry(
            103,
            "Latte",
            "$4.95",
            "1517256064527-09c73fc73e38",
            "Espresso with steamed milk and a light layer of foam.",
        ),
        entry(
            104,
            "Mocha",
            "$5.25",
            "1572442388796-11668a67e53d",
            "Espresso with chocolate and steamed milk, topped with whipped cream.",
        ),
        entry(
            105,
            "Americano",
            "$3.75",
            "1520031607889-97ba0c7190ff",
            "Espresso diluted with hot water, similar strength to regular coffee.",
        ),
        entry(
            106,
            "Cold Brew",
            "$4.95",
            "1578314675249-a6134e70a191",
            "Coffee brewed with cold water over 12-24 hours, smooth and less acidic.",
        ),
    ]
}

pub(crate) fn breakfast() -> Vec<MenuItem> {
    let entry = |id, name, price, photo_id, description| {
        item(
            id,
            name,
            price,
            Category::Breakfast,
            &photo(photo_id, THUMB_WIDTH),
            description,
        )
    };
    vec![
        entry(
            201,
            "Classic Breakfast",
            "$12.95",
            "1533089860892-a7c6f0a88666",
            "Two eggs any style, bacon or sausage, roasted potatoes, and toast.",
        ),
        entry(
            202,
            "Eggs Benedict",
            "$13.50",
            "1608039829572-78524f79c4c7",
            "Poached eggs on English muffin with Canadian bacon and hollandaise sauce.",
        ),
        entry(
            203,
            "Granola Bowl",
            "$8.95",
            "1525522239131-37282ceb6428",
            "House-made granola with Greek yogurt, fresh fruit, and honey.",
        ),
        entry(
            204,
            "French Toast",
            "$10.95",
            "1484723091739-30a097e8f929",
            "Brioche bread soaked in cinnamon custard, grilled and topped with maple syrup.",
        ),
    ]
}

pub(crate) fn lunch() -> Vec<MenuItem> {
    let entry = |id, name, price, photo_id, description| {
        item(
            id,
            name,
            price,
            Category::Lunch,
            &photo(photo_id, THUMB_WIDTH),
            description,
        )
    };
    vec![
        entry(
            301,
            "Chicken Sandwich",
            "$12.50",
            "1550507992-eb63ffee0847",
            "Grilled chicken breast with avocado, bacon, lettuce, and aioli on sourdough.",
        ),
        entry(
            302,
            "Harvest Salad",
            "$11.95",
            "1607532941433-304659e8198a",
            "Mixed greens with roasted vegetables, quinoa, goat cheese, and balsamic vinaigrette.",
        ),
        entry(
            303,
            "Quiche of the Day",
            "$9.95",
            "1598233740714-a0873f769819",
            "House-made quiche with seasonal ingredients, served with a side salad.",
        ),
        entry(
            304,
            "Soup & Half Sandwich",
            "$10.50",
            "1547592180-85f173990554",
            "Cup of soup of the day with half of any sandwich from our menu.",
        ),
    ]
}

pub(crate) fn desserts() -> Vec<MenuItem> {
    let entry = |id, name, price, photo_id, description| {
        item(
            id,
            name,
            price,
            Category::Desserts,
            &photo(photo_id, THUMB_WIDTH),
            description,
        )
    };
    vec![
        entry(
            401,
            "Chocolate Cake",
            "$6.95",
            "1602351447937-745cb720612f",
            "Rich chocolate cake with dark chocolate ganache and fresh berries.",
        ),
        entry(
            402,
            "New York Cheesecake",
            "$7.50",
            "1567327613485-fbc7bf196198",
            "Classic New York style cheesecake with graham cracker crust and berry compote.",
        ),
        entry(
            403,
            "Apple Tart",
            "$6.50",
            "1568571780765-9276107466e1",
            "Buttery pastry filled with cinnamon-spiced apples and vanilla ice cream.",
        ),
        entry(
            404,
            "Tiramisu",
            "$7.95",
            "1551529834-525807d6b4f4",
            "Italian dessert with coffee-soaked ladyfingers, mascarpone cream, and cocoa.",
        ),
    ]
}
