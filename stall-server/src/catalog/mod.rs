//! Catalog management
//!
//! The live menu is curated from the compiled-in [`universal`] list.

pub mod universal;

use std::collections::HashSet;

use shared::models::{MenuItem, MenuItemAdd, MenuItemUpdate, UniversalItemView};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, menu_item};
use crate::orders::money::MAX_PRICE;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Every universal item, flagged with whether it is already on the menu
pub async fn list_universal(pool: &SqlitePool) -> AppResult<Vec<UniversalItemView>> {
    let on_menu: HashSet<String> = menu_item::names(pool).await?.into_iter().collect();

    Ok(universal::UNIVERSAL_ITEMS
        .iter()
        .map(|item| UniversalItemView {
            name: item.name.to_string(),
            category: item.category.to_string(),
            price_full: item.price_full,
            price_half: item.price_half,
            in_menu: on_menu.contains(item.name),
        })
        .collect())
}

/// Put a universal item on the menu, optionally with different prices
pub async fn add_from_universal(pool: &SqlitePool, data: MenuItemAdd) -> AppResult<MenuItem> {
    let Some(name) = data.name.filter(|n| !n.trim().is_empty()) else {
        return Err(AppError::required("Item name required"));
    };

    if menu_item::find_by_name(pool, &name).await?.is_some() {
        return Err(already_in_menu(&name));
    }

    let Some(template) = universal::find(&name) else {
        return Err(AppError::with_message(
            ErrorCode::UniversalItemNotFound,
            format!("Item \"{name}\" not found in universal list"),
        ));
    };

    let price_full = validate_price(data.price_full.unwrap_or(template.price_full))?;
    let price_half = validate_price(data.price_half.unwrap_or(template.price_half))?;

    let item = menu_item::create(pool, template.name, template.category, price_full, price_half)
        .await
        .map_err(|e| match e {
            // Lost a race against a concurrent add of the same name
            RepoError::Duplicate(_) => already_in_menu(&name),
            other => other.into(),
        })?;

    tracing::info!(id = item.id, name = %item.name, "Menu item added");
    Ok(item)
}

/// Toggle availability and/or change prices
pub async fn update_item(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> AppResult<MenuItem> {
    if menu_item::find_by_id(pool, id).await?.is_none() {
        return Err(menu_item_not_found());
    }

    let data = MenuItemUpdate {
        is_available: data.is_available,
        price_full: data.price_full.map(validate_price).transpose()?,
        price_half: data.price_half.map(validate_price).transpose()?,
    };

    menu_item::update(pool, id, data).await.map_err(|e| match e {
        RepoError::NotFound(_) => menu_item_not_found(),
        other => other.into(),
    })
}

fn validate_price(price: f64) -> AppResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::new(ErrorCode::MenuItemInvalidPrice));
    }
    if price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("Price exceeds maximum allowed ({MAX_PRICE})"),
        ));
    }
    Ok(price)
}

fn already_in_menu(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::MenuItemAlreadyInMenu,
        format!("Item \"{name}\" already exists in menu"),
    )
}

fn menu_item_not_found() -> AppError {
    AppError::new(ErrorCode::MenuItemNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use http::StatusCode;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn add(name: &str) -> MenuItemAdd {
        MenuItemAdd {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_uses_universal_pricing() {
        let pool = test_pool().await;
        let item = add_from_universal(&pool, add("Prawn Dim Sum")).await.unwrap();

        assert_eq!(item.category, "Dim Sums");
        assert_eq!((item.price_full, item.price_half), (140.0, 80.0));
        assert!(item.is_available);
    }

    #[tokio::test]
    async fn test_add_with_price_override() {
        let pool = test_pool().await;
        let item = add_from_universal(
            &pool,
            MenuItemAdd {
                name: Some("Veg Dim Sum".to_string()),
                price_full: Some(99.5),
                price_half: None,
            },
        )
        .await
        .unwrap();

        assert_eq!((item.price_full, item.price_half), (99.5, 65.0));
    }

    #[tokio::test]
    async fn test_add_rejections() {
        let pool = test_pool().await;
        add_from_universal(&pool, add("Veg Dim Sum")).await.unwrap();

        let dup = add_from_universal(&pool, add("Veg Dim Sum")).await.unwrap_err();
        assert_eq!(dup.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(dup.message, "Item \"Veg Dim Sum\" already exists in menu");

        let unknown = add_from_universal(&pool, add("Pizza")).await.unwrap_err();
        assert_eq!(unknown.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(unknown.message, "Item \"Pizza\" not found in universal list");

        let missing = add_from_universal(&pool, MenuItemAdd::default())
            .await
            .unwrap_err();
        assert_eq!(missing.message, "Item name required");

        let negative = add_from_universal(
            &pool,
            MenuItemAdd {
                name: Some("Crab Dim Sum".to_string()),
                price_full: Some(-1.0),
                price_half: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(negative.message, "Price cannot be negative");

        let huge = add_from_universal(
            &pool,
            MenuItemAdd {
                name: Some("Crab Dim Sum".to_string()),
                price_full: None,
                price_half: Some(1e30),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(huge.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(huge.message, "Price exceeds maximum allowed (1000000)");
    }

    #[tokio::test]
    async fn test_list_universal_flags_menu_items() {
        let pool = test_pool().await;
        add_from_universal(&pool, add("Veg Maida Momos")).await.unwrap();

        let items = list_universal(&pool).await.unwrap();
        assert_eq!(items.len(), universal::UNIVERSAL_ITEMS.len());
        let flagged: Vec<_> = items.iter().filter(|i| i.in_menu).map(|i| &i.name).collect();
        assert_eq!(flagged, vec!["Veg Maida Momos"]);
    }

    #[tokio::test]
    async fn test_update_item() {
        let pool = test_pool().await;
        let item = add_from_universal(&pool, add("Veg Maida Momos")).await.unwrap();

        let updated = update_item(
            &pool,
            item.id,
            MenuItemUpdate {
                is_available: Some(false),
                price_full: Some(210.0),
                price_half: None,
            },
        )
        .await
        .unwrap();
        assert!(!updated.is_available);
        assert_eq!((updated.price_full, updated.price_half), (210.0, 150.0));

        let negative = update_item(
            &pool,
            item.id,
            MenuItemUpdate {
                price_half: Some(-5.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(negative.http_status(), StatusCode::BAD_REQUEST);

        let huge = update_item(
            &pool,
            item.id,
            MenuItemUpdate {
                price_full: Some(1e30),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(huge.code, ErrorCode::MenuItemInvalidPrice);
        let unchanged = menu_item::find_by_id(&pool, item.id).await.unwrap().unwrap();
        assert_eq!(unchanged.price_full, 210.0);

        let at_limit = update_item(
            &pool,
            item.id,
            MenuItemUpdate {
                price_full: Some(MAX_PRICE),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(at_limit.price_full, MAX_PRICE);

        let missing = update_item(&pool, 404, MenuItemUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(missing.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.message, "Menu item not found");
    }
}
