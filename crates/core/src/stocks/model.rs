use rust_decimal::Decimal;
use serde::Serialize;

use super::symbol::Symbol;

/// Single-symbol response item: carries the absolute like count.
#[derive(Clone, Debug, Serialize)]
pub struct SingleStock {
    pub stock: Symbol,
    pub price: Decimal,
    pub likes: u64,
}

/// Two-symbol response item: carries the like count relative to the sibling.
/// Raw counts are never exposed in this form.
#[derive(Clone, Debug, Serialize)]
pub struct PairedStock {
    pub stock: Symbol,
    pub price: Decimal,
    pub rel_likes: i64,
}

/// Payload of a stock-prices response, shaped by how many symbols were
/// requested. Serializes to either a single object or a two-element array.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum StockData {
    Single(SingleStock),
    Pair([PairedStock; 2]),
}

impl StockData {
    /// Build the two-symbol form from absolute like counts. The two
    /// `rel_likes` values are additive inverses of each other, and the items
    /// keep the order they are given in.
    pub fn pair(
        (first_stock, first_price, first_likes): (Symbol, Decimal, u64),
        (second_stock, second_price, second_likes): (Symbol, Decimal, u64),
    ) -> Self {
        let rel_likes = first_likes as i64 - second_likes as i64;
        Self::Pair([
            PairedStock {
                stock: first_stock,
                price: first_price,
                rel_likes,
            },
            PairedStock {
                stock: second_stock,
                price: second_price,
                rel_likes: -rel_likes,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn symbol(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    #[test]
    fn test_single_serializes_with_likes() {
        let data = StockData::Single(SingleStock {
            stock: symbol("TSLA"),
            price: dec!(650.25),
            likes: 3,
        });
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"stock": "TSLA", "price": 650.25, "likes": 3})
        );
    }

    #[test]
    fn test_pair_serializes_with_rel_likes_only() {
        let data = StockData::pair(
            (symbol("TSLA"), dec!(650.25), 2),
            (symbol("GOLD"), dec!(1800.75), 0),
        );
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!([
                {"stock": "TSLA", "price": 650.25, "rel_likes": 2},
                {"stock": "GOLD", "price": 1800.75, "rel_likes": -2}
            ])
        );
    }

    #[test]
    fn test_pair_rel_likes_sum_to_zero() {
        let data = StockData::pair(
            (symbol("A"), dec!(1), 7),
            (symbol("B"), dec!(2), 11),
        );
        match data {
            StockData::Pair([first, second]) => {
                assert_eq!(first.rel_likes + second.rel_likes, 0);
                assert_eq!(first.rel_likes, -4);
            }
            other => panic!("expected pair, got {:?}", other),
        }
    }
}
