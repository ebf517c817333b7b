/// One purchasable perk with its base price in currency units.
pub struct ShopItem {
    pub name: &'static str,
    pub base_price: i64,
}

/// Fixed premium-perk price list.
pub const SHOP_ITEMS: &[ShopItem] = &[
    ShopItem {
        name: "Premium 10 Days",
        base_price: 200,
    },
    ShopItem {
        name: "Premium 1 Month",
        base_price: 1_200,
    },
    ShopItem {
        name: "Premium 1 Year",
        base_price: 10_000,
    },
    ShopItem {
        name: "Premium Permanent",
        base_price: 20_000,
    },
];

/// Price after the daily discount (half price) when active.
pub fn effective_price(item: &ShopItem, discount_active: bool) -> i64 {
    if discount_active {
        item.base_price / 2
    } else {
        item.base_price
    }
}

/// Look an item up by its full name, case-insensitively.
pub fn find_item(query: &str) -> Option<&'static ShopItem> {
    let query = query.trim();
    SHOP_ITEMS
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(query))
}

#[cfg(test)]
mod tests {
    use super::{SHOP_ITEMS, effective_price, find_item};

    #[test]
    fn finds_items_case_insensitively() {
        let item = find_item("premium 1 month").expect("item exists");
        assert_eq!(item.base_price, 1_200);
        assert!(find_item("  Premium Permanent ").is_some());
        assert!(find_item("premium forever").is_none());
    }

    #[test]
    fn discount_halves_every_price() {
        for item in SHOP_ITEMS {
            assert_eq!(effective_price(item, false), item.base_price);
            assert_eq!(effective_price(item, true), item.base_price / 2);
        }
    }
}
