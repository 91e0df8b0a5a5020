//! Shared catalog fixtures for unit tests.

use crate::types::{Category, MenuItem, MenuOption, OptionGroup, SelectedOption, Translations};

pub fn option(id: i64, group_id: i64, name: &str, price_modifier: i64) -> MenuOption {
    MenuOption {
        id,
        option_group_id: group_id,
        name: name.to_string(),
        name_translations: Translations::new(),
        price_modifier,
        sort_order: 0,
    }
}

pub fn group(id: i64, menu_id: i64, name: &str, required: bool, options: Vec<MenuOption>) -> OptionGroup {
    OptionGroup {
        id,
        menu_id,
        name: name.to_string(),
        name_translations: Translations::new(),
        required,
        sort_order: 0,
        options,
    }
}

pub fn menu(id: i64, name: &str, price: i64) -> MenuItem {
    MenuItem {
        id,
        category_id: 1,
        name: name.to_string(),
        name_translations: Translations::new(),
        description: String::new(),
        description_translations: Translations::new(),
        price,
        image_url: None,
        is_active: true,
        sort_order: 0,
        option_groups: Vec::new(),
    }
}

pub fn category(id: i64, name: &str, menus: Vec<MenuItem>) -> Category {
    Category {
        id,
        name: name.to_string(),
        name_translations: Translations::new(),
        sort_order: 0,
        is_active: true,
        menus,
    }
}

/// Latte 4,000 with Temperature [Hot +0, Iced +500] and Size [Small +0, Large +1,000].
pub fn latte() -> MenuItem {
    let mut hot = option(100, 10, "Hot", 0);
    hot.name_translations.set("ja", "ホット");

    let mut m = menu(1, "Latte", 4000);
    m.name_translations.set("ja", "ラテ");
    m.image_url = Some("/uploads/latte.png".to_string());
    m.option_groups = vec![
        group(10, 1, "Temperature", true, vec![hot, option(101, 10, "Iced", 500)]),
        group(20, 1, "Size", true, vec![option(200, 20, "Small", 0), option(201, 20, "Large", 1000)]),
    ];
    m
}

/// Americano 3,000 with Temperature [Hot +0, Iced +500].
pub fn americano() -> MenuItem {
    let mut m = menu(2, "Americano", 3000);
    m.option_groups = vec![group(
        12,
        2,
        "Temperature",
        true,
        vec![option(120, 12, "Hot", 0), option(121, 12, "Iced", 500)],
    )];
    m
}

/// Looks up a selection on a fixture menu.
pub fn pick(menu: &MenuItem, group_id: i64, option_id: i64) -> SelectedOption {
    menu.select(group_id, option_id)
        .expect("fixture selection exists")
}
