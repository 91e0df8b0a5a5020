//! # Admin Commands
//!
//! Back-office editing of the catalog. Every successful edit is written back
//! to the catalog file (see [`CatalogState::save`]).
//!
//! ## Editing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category ──► Menu ──► Option Group ──► Option                          │
//! │                                                                         │
//! │  upsert_category / delete_category (menus go with it)                   │
//! │  upsert_menu / delete_menu / set_menu_active / duplicate_menu           │
//! │  reorder_menus (drag & drop: [{id, sortOrder}, ...])                    │
//! │  add_option_group / update_option_group / delete_option_group           │
//! │                                                                         │
//! │  Every edit is checked before it is applied: a menu that would fail     │
//! │  validation never reaches the storefront.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New entities get the next free id of their kind (max + 1). Option groups
//! and options are re-sorted by `sortOrder` after every option edit.

use kiosk_core::validation::{validate_description, validate_menu, validate_name, validate_price};
use kiosk_core::{Category, CoreError, MenuItem, MenuOption, OptionGroup, Translations};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Name suffix of a duplicated menu.
pub const DUPLICATE_SUFFIX: &str = " (복사)";

// =============================================================================
// Inputs
// =============================================================================

/// Category form. `id: None` creates a new category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    /// Defaults to the end of the list for new categories.
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Menu form. `id: None` creates a new menu; option groups are edited
/// separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_translations: Translations,
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<i64>,
}

/// One option in a new option group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInput {
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    #[serde(default)]
    pub price_modifier: i64,
    /// Defaults to the option's position.
    #[serde(default)]
    pub sort_order: Option<i64>,
}

/// New option group with its options.
///
/// Options are numbered in list order; `sortOrder` defaults to that
/// position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroupInput {
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub options: Vec<OptionInput>,
}

/// Changes to an existing option group; `None` leaves a field as it is.
///
/// A supplied `options` list replaces every option of the group. The new
/// options get fresh ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroupUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_translations: Option<Translations>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub options: Option<Vec<OptionInput>>,
}

/// One entry of a drag-and-drop reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderUpdate {
    pub id: i64,
    pub sort_order: i64,
}

// =============================================================================
// Id allocation
// =============================================================================

fn next_category_id(categories: &[Category]) -> i64 {
    categories.iter().map(|c| c.id).max().unwrap_or(0) + 1
}

fn all_menus(categories: &[Category]) -> impl Iterator<Item = &MenuItem> {
    categories.iter().flat_map(|c| c.menus.iter())
}

fn next_menu_id(categories: &[Category]) -> i64 {
    all_menus(categories).map(|m| m.id).max().unwrap_or(0) + 1
}

fn next_group_id(categories: &[Category]) -> i64 {
    all_menus(categories)
        .flat_map(|m| m.option_groups.iter())
        .map(|g| g.id)
        .max()
        .unwrap_or(0)
        + 1
}

fn next_option_id(categories: &[Category]) -> i64 {
    all_menus(categories)
        .flat_map(|m| m.option_groups.iter())
        .flat_map(|g| g.options.iter())
        .map(|o| o.id)
        .max()
        .unwrap_or(0)
        + 1
}

/// Finds a menu and the index of its category.
fn locate_menu(categories: &[Category], menu_id: i64) -> Option<(usize, usize)> {
    categories.iter().enumerate().find_map(|(ci, c)| {
        c.menus
            .iter()
            .position(|m| m.id == menu_id)
            .map(|mi| (ci, mi))
    })
}

fn menu_mut(categories: &mut [Category], menu_id: i64) -> Result<&mut MenuItem, ApiError> {
    let (ci, mi) = locate_menu(categories, menu_id).ok_or_else(|| ApiError::not_found("Menu", menu_id))?;
    Ok(&mut categories[ci].menus[mi])
}

/// Numbers option inputs from `first_id` on.
fn build_options(inputs: Vec<OptionInput>, group_id: i64, first_id: i64) -> Vec<MenuOption> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(idx, opt)| MenuOption {
            id: first_id + idx as i64,
            option_group_id: group_id,
            name: opt.name,
            name_translations: opt.name_translations,
            price_modifier: opt.price_modifier,
            sort_order: opt.sort_order.unwrap_or(idx as i64),
        })
        .collect()
}

/// Validates an edited copy of a menu, sorts it and puts it in place.
fn commit_menu(menu: &mut MenuItem, mut candidate: MenuItem) -> Result<(), ApiError> {
    validate_menu(&candidate)?;
    candidate.sort_option_groups();
    *menu = candidate;
    Ok(())
}

// =============================================================================
// Categories
// =============================================================================

/// Creates or updates a category.
pub fn upsert_category(catalog: &CatalogState, input: CategoryInput) -> Result<Category, ApiError> {
    debug!(id = ?input.id, name = %input.name, "upsert_category command");
    validate_name("name", &input.name).map_err(CoreError::from)?;

    let category = catalog.write(|categories| -> Result<Category, ApiError> {
        let category = match input.id {
            Some(id) => {
                let category = categories
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or_else(|| ApiError::not_found("Category", id))?;
                category.name = input.name;
                category.name_translations = input.name_translations;
                if let Some(sort_order) = input.sort_order {
                    category.sort_order = sort_order;
                }
                if let Some(is_active) = input.is_active {
                    category.is_active = is_active;
                }
                category.clone()
            }
            None => {
                let category = Category {
                    id: next_category_id(categories),
                    name: input.name,
                    name_translations: input.name_translations,
                    sort_order: input
                        .sort_order
                        .unwrap_or_else(|| categories.iter().map(|c| c.sort_order).max().unwrap_or(0) + 1),
                    is_active: input.is_active.unwrap_or(true),
                    menus: Vec::new(),
                };
                categories.push(category.clone());
                category
            }
        };
        info!(category_id = category.id, "Category saved");
        Ok(category)
    })?;

    catalog.save()?;
    Ok(category)
}

/// Deletes a category together with its menus.
pub fn delete_category(catalog: &CatalogState, id: i64) -> Result<(), ApiError> {
    debug!(id, "delete_category command");
    catalog.write(|categories| -> Result<(), ApiError> {
        let index = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ApiError::not_found("Category", id))?;
        let removed = categories.remove(index);
        info!(category_id = id, menus = removed.menus.len(), "Category deleted");
        Ok(())
    })?;

    Ok(catalog.save()?)
}

// =============================================================================
// Menus
// =============================================================================

/// Creates or updates a menu.
///
/// Updating keeps the menu's option groups; a changed `categoryId` moves the
/// menu to the end of the other category.
pub fn upsert_menu(catalog: &CatalogState, input: MenuInput) -> Result<MenuItem, ApiError> {
    debug!(id = ?input.id, category_id = input.category_id, name = %input.name, "upsert_menu command");
    validate_name("name", &input.name).map_err(CoreError::from)?;
    validate_description(&input.description).map_err(CoreError::from)?;
    validate_price(input.price).map_err(CoreError::from)?;

    let menu = catalog.write(|categories| -> Result<MenuItem, ApiError> {
        let target = categories
            .iter()
            .position(|c| c.id == input.category_id)
            .ok_or_else(|| ApiError::not_found("Category", input.category_id))?;

        let (mut menu, previous) = match input.id {
            Some(id) => {
                let (ci, mi) = locate_menu(categories, id).ok_or_else(|| ApiError::not_found("Menu", id))?;
                (categories[ci].menus.remove(mi), Some((ci, mi)))
            }
            None => {
                let menu = MenuItem {
                    id: next_menu_id(categories),
                    category_id: input.category_id,
                    name: String::new(),
                    name_translations: Translations::new(),
                    description: String::new(),
                    description_translations: Translations::new(),
                    price: 0,
                    image_url: None,
                    is_active: true,
                    sort_order: categories[target].menus.iter().map(|m| m.sort_order).max().unwrap_or(0) + 1,
                    option_groups: Vec::new(),
                };
                (menu, None)
            }
        };

        menu.category_id = input.category_id;
        menu.name = input.name;
        menu.name_translations = input.name_translations;
        menu.description = input.description;
        menu.description_translations = input.description_translations;
        menu.price = input.price;
        menu.image_url = input.image_url;
        if let Some(is_active) = input.is_active {
            menu.is_active = is_active;
        }
        if let Some(sort_order) = input.sort_order {
            menu.sort_order = sort_order;
        }

        match previous {
            Some((ci, mi)) if ci == target => categories[target].menus.insert(mi, menu.clone()),
            _ => categories[target].menus.push(menu.clone()),
        }
        info!(menu_id = menu.id, "Menu saved");
        Ok(menu)
    })?;

    catalog.save()?;
    Ok(menu)
}

/// Deletes a menu.
pub fn delete_menu(catalog: &CatalogState, menu_id: i64) -> Result<(), ApiError> {
    debug!(menu_id, "delete_menu command");
    catalog.write(|categories| -> Result<(), ApiError> {
        let (ci, mi) = locate_menu(categories, menu_id).ok_or_else(|| ApiError::not_found("Menu", menu_id))?;
        categories[ci].menus.remove(mi);
        info!(menu_id, "Menu deleted");
        Ok(())
    })?;

    Ok(catalog.save()?)
}

/// Shows or hides a menu on the storefront.
pub fn set_menu_active(catalog: &CatalogState, menu_id: i64, is_active: bool) -> Result<MenuItem, ApiError> {
    debug!(menu_id, is_active, "set_menu_active command");
    let menu = catalog.write(|categories| -> Result<MenuItem, ApiError> {
        let menu = menu_mut(categories, menu_id)?;
        menu.is_active = is_active;
        info!(menu_id, is_active, "Menu visibility changed");
        Ok(menu.clone())
    })?;

    catalog.save()?;
    Ok(menu)
}

/// Copies a menu with all its option groups and options.
///
/// The copy gets `" (복사)"` appended to its name, the next sort order and
/// fresh ids throughout; translations and image are carried over.
pub fn duplicate_menu(catalog: &CatalogState, menu_id: i64) -> Result<MenuItem, ApiError> {
    debug!(menu_id, "duplicate_menu command");
    let copy = catalog.write(|categories| -> Result<MenuItem, ApiError> {
        let (ci, mi) = locate_menu(categories, menu_id).ok_or_else(|| ApiError::not_found("Menu", menu_id))?;

        let mut copy = categories[ci].menus[mi].clone();
        copy.id = next_menu_id(categories);
        copy.name = format!("{}{}", copy.name, DUPLICATE_SUFFIX);
        copy.sort_order += 1;
        copy.is_active = true;

        let mut group_id = next_group_id(categories);
        let mut option_id = next_option_id(categories);
        for group in &mut copy.option_groups {
            group.id = group_id;
            group.menu_id = copy.id;
            group_id += 1;
            for option in &mut group.options {
                option.id = option_id;
                option.option_group_id = group.id;
                option_id += 1;
            }
        }

        categories[ci].menus.insert(mi + 1, copy.clone());
        info!(source_id = menu_id, menu_id = copy.id, "Menu duplicated");
        Ok(copy)
    })?;

    catalog.save()?;
    Ok(copy)
}

/// Applies a drag-and-drop ordering.
///
/// All ids must exist; nothing changes otherwise. Menus are re-sorted by
/// their new sort order inside each category.
pub fn reorder_menus(catalog: &CatalogState, updates: &[SortOrderUpdate]) -> Result<(), ApiError> {
    debug!(count = updates.len(), "reorder_menus command");
    if updates.is_empty() {
        return Err(ApiError::validation("Reorder needs at least one item"));
    }

    catalog.write(|categories| -> Result<(), ApiError> {
        for update in updates {
            if locate_menu(categories, update.id).is_none() {
                return Err(ApiError::not_found("Menu", update.id));
            }
        }
        for update in updates {
            menu_mut(categories, update.id)?.sort_order = update.sort_order;
        }
        for category in categories.iter_mut() {
            category.menus.sort_by_key(|m| m.sort_order);
        }
        info!(count = updates.len(), "Menus reordered");
        Ok(())
    })?;

    Ok(catalog.save()?)
}

// =============================================================================
// Option Groups
// =============================================================================

/// Adds an option group (with its options) to a menu.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown menu
/// - `VALIDATION_ERROR` for blank names or out-of-range price modifiers
/// - `MALFORMED_MENU` for a required group without options
pub fn add_option_group(catalog: &CatalogState, menu_id: i64, input: OptionGroupInput) -> Result<OptionGroup, ApiError> {
    debug!(menu_id, name = %input.name, required = input.required, options = input.options.len(), "add_option_group command");
    validate_name("name", &input.name).map_err(CoreError::from)?;

    let group = catalog.write(|categories| -> Result<OptionGroup, ApiError> {
        let group_id = next_group_id(categories);
        let first_option_id = next_option_id(categories);

        let mut options = build_options(input.options, group_id, first_option_id);
        options.sort_by_key(|o| o.sort_order);
        let group = OptionGroup {
            id: group_id,
            menu_id,
            name: input.name,
            name_translations: input.name_translations,
            required: input.required,
            sort_order: input.sort_order,
            options,
        };

        let menu = menu_mut(categories, menu_id)?;
        let mut candidate = menu.clone();
        candidate.option_groups.push(group.clone());
        commit_menu(menu, candidate)?;

        info!(menu_id, group_id, "Option group added");
        Ok(group)
    })?;

    catalog.save()?;
    Ok(group)
}

/// Edits an option group of a menu.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown menu, or a group that is not on that menu
/// - `VALIDATION_ERROR` for blank names or out-of-range price modifiers
/// - `MALFORMED_MENU` when the group would end up required without options
pub fn update_option_group(
    catalog: &CatalogState,
    menu_id: i64,
    group_id: i64,
    update: OptionGroupUpdate,
) -> Result<OptionGroup, ApiError> {
    debug!(menu_id, group_id, "update_option_group command");
    if let Some(name) = &update.name {
        validate_name("name", name).map_err(CoreError::from)?;
    }

    let group = catalog.write(|categories| -> Result<OptionGroup, ApiError> {
        let first_option_id = next_option_id(categories);
        let menu = menu_mut(categories, menu_id)?;

        let mut candidate = menu.clone();
        let group = candidate
            .option_groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| ApiError::not_found("Option group", group_id))?;

        if let Some(name) = update.name {
            group.name = name;
        }
        if let Some(name_translations) = update.name_translations {
            group.name_translations = name_translations;
        }
        if let Some(required) = update.required {
            group.required = required;
        }
        if let Some(sort_order) = update.sort_order {
            group.sort_order = sort_order;
        }
        if let Some(options) = update.options {
            group.options = build_options(options, group_id, first_option_id);
        }

        commit_menu(menu, candidate)?;
        let group = menu
            .group(group_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Option group", group_id))?;

        info!(menu_id, group_id, options = group.options.len(), "Option group updated");
        Ok(group)
    })?;

    catalog.save()?;
    Ok(group)
}

/// Removes an option group from a menu.
pub fn delete_option_group(catalog: &CatalogState, menu_id: i64, group_id: i64) -> Result<(), ApiError> {
    debug!(menu_id, group_id, "delete_option_group command");
    catalog.write(|categories| -> Result<(), ApiError> {
        let menu = menu_mut(categories, menu_id)?;
        let index = menu
            .option_groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| ApiError::not_found("Option group", group_id))?;
        menu.option_groups.remove(index);
        info!(menu_id, group_id, "Option group deleted");
        Ok(())
    })?;

    Ok(catalog.save()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::{get_menu, get_vending_grid, list_categories};
    use crate::error::ErrorCode;
    use crate::state::{CartState, SettingsState};
    use crate::test_support::loaded_catalog;
    use kiosk_core::validation::MAX_PRICE;

    fn menu_input(category_id: i64, name: &str, price: i64) -> MenuInput {
        MenuInput {
            category_id,
            name: name.to_string(),
            price,
            ..Default::default()
        }
    }

    fn grid_len(catalog: &CatalogState) -> usize {
        get_vending_grid(catalog, &CartState::new(), &SettingsState::default(), None)
            .unwrap()
            .len()
    }

    fn labels(catalog: &CatalogState, menu_id: i64) -> Vec<String> {
        get_vending_grid(catalog, &CartState::new(), &SettingsState::default(), None)
            .unwrap()
            .into_iter()
            .filter(|t| t.card.menu_id == menu_id)
            .map(|t| t.card.option_label)
            .collect()
    }

    fn option_input(name: &str, price_modifier: i64, sort_order: Option<i64>) -> OptionInput {
        OptionInput {
            name: name.to_string(),
            price_modifier,
            sort_order,
            ..Default::default()
        }
    }

    #[test]
    fn test_category_crud() {
        let catalog = loaded_catalog();

        let tea = upsert_category(
            &catalog,
            CategoryInput {
                name: "차".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(tea.id, 3);
        assert_eq!(tea.sort_order, 3);
        assert!(tea.is_active);

        let renamed = upsert_category(
            &catalog,
            CategoryInput {
                id: Some(3),
                name: "티".to_string(),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(renamed.name, "티");
        assert_eq!(list_categories(&catalog, "ko").len(), 2);

        delete_category(&catalog, 2).unwrap();
        assert_eq!(grid_len(&catalog), 6);
        assert_eq!(delete_category(&catalog, 2).unwrap_err().code, ErrorCode::NotFound);

        let blank = upsert_category(&catalog, CategoryInput::default()).unwrap_err();
        assert_eq!(blank.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_menu_create_update_delete() {
        let catalog = loaded_catalog();

        let tea = upsert_menu(&catalog, menu_input(1, "녹차", 3500)).unwrap();
        assert_eq!(tea.id, 5);
        assert_eq!(tea.sort_order, 4);
        assert_eq!(grid_len(&catalog), 8);

        let mut update = menu_input(1, "녹차 라떼", 4200);
        update.id = Some(5);
        let updated = upsert_menu(&catalog, update).unwrap();
        assert_eq!(updated.price, 4200);
        assert_eq!(get_menu(&catalog, 5, "ko").unwrap().menu.name, "녹차 라떼");

        // updating keeps option groups
        let mut americano = menu_input(1, "아메리카노", 3200);
        americano.id = Some(1);
        let americano = upsert_menu(&catalog, americano).unwrap();
        assert_eq!(americano.option_groups.len(), 2);
        assert_eq!(catalog.read(|c| c[0].menus[0].id), 1);

        delete_menu(&catalog, 5).unwrap();
        assert_eq!(delete_menu(&catalog, 5).unwrap_err().code, ErrorCode::NotFound);

        assert_eq!(
            upsert_menu(&catalog, menu_input(1, "공짜", -1)).unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            upsert_menu(&catalog, menu_input(42, "유령", 1000)).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_menu_moves_between_categories() {
        let catalog = loaded_catalog();
        let mut input = menu_input(2, "아메리카노", 3000);
        input.id = Some(1);

        upsert_menu(&catalog, input).unwrap();

        catalog.read(|c| {
            assert!(c[0].menus.iter().all(|m| m.id != 1));
            assert!(c[1].menus.iter().any(|m| m.id == 1 && m.category_id == 2));
        });
    }

    #[test]
    fn test_set_menu_active() {
        let catalog = loaded_catalog();
        set_menu_active(&catalog, 3, true).unwrap();
        // vanilla latte adds HOT and ICE
        assert_eq!(grid_len(&catalog), 9);

        set_menu_active(&catalog, 4, false).unwrap();
        assert_eq!(grid_len(&catalog), 8);
    }

    #[test]
    fn test_duplicate_menu() {
        let catalog = loaded_catalog();
        let copy = duplicate_menu(&catalog, 2).unwrap();

        assert_eq!(copy.id, 5);
        assert_eq!(copy.name, "카페라떼 (복사)");
        assert_eq!(copy.sort_order, 3);
        assert_eq!(copy.name_translations.get("en"), Some("Caffe Latte"));
        assert_eq!(copy.option_groups.len(), 2);
        assert_eq!(copy.option_groups[0].id, 31);
        assert_eq!(copy.option_groups[1].id, 32);
        assert!(copy.option_groups.iter().all(|g| g.menu_id == 5));
        assert_eq!(copy.option_groups[0].options[0].id, 302);
        assert_eq!(copy.option_groups[1].options[1].option_group_id, 32);

        // both the source and the copy expand into four tiles
        assert_eq!(grid_len(&catalog), 11);
        assert_eq!(duplicate_menu(&catalog, 99).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_reorder_menus() {
        let catalog = loaded_catalog();
        reorder_menus(
            &catalog,
            &[
                SortOrderUpdate { id: 1, sort_order: 2 },
                SortOrderUpdate { id: 2, sort_order: 1 },
            ],
        )
        .unwrap();

        let grid = get_vending_grid(&catalog, &CartState::new(), &SettingsState::default(), None).unwrap();
        assert_eq!(grid[0].card.menu_id, 2);

        let err = reorder_menus(&catalog, &[SortOrderUpdate { id: 1, sort_order: 9 }, SortOrderUpdate { id: 77, sort_order: 1 }])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        // nothing applied
        assert_eq!(catalog.read(|c| c[0].menus[1].sort_order), 2);

        assert_eq!(reorder_menus(&catalog, &[]).unwrap_err().code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_option_groups() {
        let catalog = loaded_catalog();
        let syrup = add_option_group(
            &catalog,
            4,
            OptionGroupInput {
                name: "소스".to_string(),
                required: true,
                options: vec![
                    OptionInput {
                        name: "딸기".to_string(),
                        ..Default::default()
                    },
                    OptionInput {
                        name: "블루베리".to_string(),
                        price_modifier: 300,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(syrup.id, 31);
        assert_eq!(syrup.options[0].id, 302);
        assert_eq!(syrup.options[1].sort_order, 1);
        // cheesecake now has two tiles
        assert_eq!(grid_len(&catalog), 8);

        let empty_required = add_option_group(
            &catalog,
            4,
            OptionGroupInput {
                name: "컵".to_string(),
                required: true,
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(empty_required.code, ErrorCode::MalformedMenu);
        assert_eq!(get_menu(&catalog, 4, "ko").unwrap().menu.option_groups.len(), 1);

        delete_option_group(&catalog, 4, 31).unwrap();
        assert_eq!(grid_len(&catalog), 7);
        assert_eq!(
            delete_option_group(&catalog, 4, 31).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_prices_are_bounded() {
        let catalog = loaded_catalog();

        let huge = upsert_menu(&catalog, menu_input(1, "금괴 라떼", i64::MAX)).unwrap_err();
        assert_eq!(huge.code, ErrorCode::ValidationError);
        assert!(upsert_menu(&catalog, menu_input(1, "비싼 라떼", MAX_PRICE)).is_ok());

        let huge_modifier = add_option_group(
            &catalog,
            4,
            OptionGroupInput {
                name: "토핑".to_string(),
                options: vec![option_input("금가루", i64::MAX, None)],
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(huge_modifier.code, ErrorCode::ValidationError);

        let huge_update = update_option_group(
            &catalog,
            1,
            10,
            OptionGroupUpdate {
                options: Some(vec![option_input("HOT", 0, None), option_input("ICE", i64::MIN, None)]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(huge_update.code, ErrorCode::ValidationError);

        // pricing the grid still works
        assert_eq!(grid_len(&catalog), 8);
    }

    #[test]
    fn test_new_group_sort_order_decides_labels() {
        let catalog = loaded_catalog();
        let size = add_option_group(
            &catalog,
            1,
            OptionGroupInput {
                name: "사이즈".to_string(),
                required: true,
                sort_order: 0,
                options: vec![option_input("L", 500, Some(2)), option_input("S", 0, Some(1))],
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(size.id, 31);
        assert_eq!(size.options[0].name, "S");
        assert_eq!(size.options[0].id, 303);

        let menu = get_menu(&catalog, 1, "ko").unwrap().menu;
        let groups: Vec<i64> = menu.option_groups.iter().map(|g| g.id).collect();
        assert_eq!(groups, vec![31, 10, 11]);

        assert_eq!(labels(&catalog, 1), vec!["S / HOT", "S / ICE", "L / HOT", "L / ICE"]);
    }

    #[test]
    fn test_update_option_group() {
        let catalog = loaded_catalog();
        let size = update_option_group(
            &catalog,
            2,
            21,
            OptionGroupUpdate {
                name: Some("컵".to_string()),
                sort_order: Some(0),
                options: Some(vec![option_input("톨", 0, None), option_input("그란데", 700, None)]),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(size.name, "컵");
        assert!(size.required);
        assert_eq!(size.options.len(), 2);
        assert_eq!(size.options[0].id, 302);
        assert_eq!(size.options[1].sort_order, 1);
        assert!(size.options.iter().all(|o| o.option_group_id == 21));
        // translations untouched
        assert_eq!(size.name_translations.get("en"), Some("Size"));

        assert_eq!(labels(&catalog, 2), vec!["톨 / HOT", "톨 / ICE", "그란데 / HOT", "그란데 / ICE"]);
        let grid = get_vending_grid(&catalog, &CartState::new(), &SettingsState::default(), None).unwrap();
        assert_eq!(grid[5].card.total_price, 4000 + 700 + 500);

        // optional groups are not expanded into tiles
        update_option_group(
            &catalog,
            2,
            21,
            OptionGroupUpdate {
                required: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(labels(&catalog, 2), vec!["HOT", "ICE"]);
    }

    #[test]
    fn test_update_option_group_errors_leave_menu_unchanged() {
        let catalog = loaded_catalog();
        let before = get_menu(&catalog, 2, "ko").unwrap().menu;

        let emptied = update_option_group(
            &catalog,
            2,
            20,
            OptionGroupUpdate {
                options: Some(Vec::new()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(emptied.code, ErrorCode::MalformedMenu);

        let blank = update_option_group(
            &catalog,
            2,
            20,
            OptionGroupUpdate {
                name: Some(" ".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(blank.code, ErrorCode::ValidationError);

        // group 10 belongs to the americano
        let foreign = update_option_group(&catalog, 2, 10, OptionGroupUpdate::default()).unwrap_err();
        assert_eq!(foreign.code, ErrorCode::NotFound);
        let unknown = update_option_group(&catalog, 99, 20, OptionGroupUpdate::default()).unwrap_err();
        assert_eq!(unknown.code, ErrorCode::NotFound);

        assert_eq!(get_menu(&catalog, 2, "ko").unwrap().menu, before);
    }
}
