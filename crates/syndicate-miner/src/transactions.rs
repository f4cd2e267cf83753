//! Transaction builder: raw rows to the uniform transaction shape
//!
//! Rows never reach the miner directly. An [`ItemExtractor`] picks the item
//! identifiers of each row and a [`WeightExtractor`] its weight; failures
//! surface as [`MiningError::Input`] instead of silently dropping the row,
//! because a dropped row would shift every support denominator.

use crate::{MiningError, Result};
use std::convert::Infallible;
use std::fmt::Display;
use syndicate_domain::traits::{ItemExtractor, WeightExtractor};
use syndicate_domain::{Item, Transaction};

/// Weight extractor that gives every row weight 1.0
#[derive(Debug, Clone, Copy, Default)]
pub struct Unweighted;

impl<R: ?Sized> WeightExtractor<R> for Unweighted {
    type Error = Infallible;

    fn extract_weight(&self, _row: &R) -> std::result::Result<Option<f64>, Infallible> {
        Ok(Some(1.0))
    }
}

/// Build unweighted transactions (weight 1.0 for every row)
pub fn build_unweighted<R, I>(rows: &[R], items: &I) -> Result<Vec<Transaction>>
where
    I: ItemExtractor<R>,
    I::Error: Display,
{
    build_transactions(rows, items, &Unweighted)
}

/// Build one transaction per row
///
/// - Duplicate identifiers within a row collapse.
/// - A row with no items yields an empty transaction.
/// - A missing weight (`None`) counts as 0; the transaction is kept.
///
/// # Errors
///
/// [`MiningError::Input`] when an extractor fails, an identifier is blank,
/// or a weight is negative or not finite.
pub fn build_transactions<R, I, W>(rows: &[R], items: &I, weights: &W) -> Result<Vec<Transaction>>
where
    I: ItemExtractor<R>,
    I::Error: Display,
    W: WeightExtractor<R>,
    W::Error: Display,
{
    rows.iter()
        .enumerate()
        .map(|(row, raw)| build_one(row, raw, items, weights))
        .collect()
}

fn build_one<R, I, W>(row: usize, raw: &R, items: &I, weights: &W) -> Result<Transaction>
where
    I: ItemExtractor<R>,
    I::Error: Display,
    W: WeightExtractor<R>,
    W::Error: Display,
{
    let identifiers = items.extract_items(raw).map_err(|e| MiningError::Input {
        row,
        message: format!("item extraction failed: {}", e),
    })?;

    let parsed = identifiers
        .into_iter()
        .map(|id| {
            Item::parse(id).ok_or_else(|| MiningError::Input {
                row,
                message: "blank item identifier".to_string(),
            })
        })
        .collect::<Result<Vec<Item>>>()?;

    let weight = weights
        .extract_weight(raw)
        .map_err(|e| MiningError::Input {
            row,
            message: format!("weight extraction failed: {}", e),
        })?
        .unwrap_or(0.0);

    Transaction::weighted(parsed, weight).ok_or_else(|| MiningError::Input {
        row,
        message: format!("weight must be finite and non-negative, got {}", weight),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Basket {
        goods: &'static str,
        price: Option<f64>,
    }

    struct Goods;

    impl ItemExtractor<Basket> for Goods {
        type Error = String;

        fn extract_items(&self, row: &Basket) -> std::result::Result<Vec<String>, String> {
            if row.goods == "!" {
                return Err("unreadable".to_string());
            }
            Ok(row
                .goods
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect())
        }
    }

    struct Price;

    impl WeightExtractor<Basket> for Price {
        type Error = String;

        fn extract_weight(&self, row: &Basket) -> std::result::Result<Option<f64>, String> {
            Ok(row.price)
        }
    }

    fn basket(goods: &'static str, price: Option<f64>) -> Basket {
        Basket { goods, price }
    }

    #[test]
    fn test_unweighted() {
        let rows = vec![basket("A,B,A", None), basket("C", None)];
        let txs = build_unweighted(&rows, &Goods).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].len(), 2);
        assert!(txs.iter().all(|t| t.weight() == 1.0));
    }

    #[test]
    fn test_empty_row_kept() {
        let rows = vec![basket("", Some(2.0)), basket("A", Some(1.0))];
        let txs = build_transactions(&rows, &Goods, &Price).unwrap();
        assert_eq!(txs.len(), 2);
        assert!(txs[0].is_empty());
        assert_eq!(txs[0].weight(), 2.0);
    }

    #[test]
    fn test_missing_weight_is_zero() {
        let rows = vec![basket("A", None), basket("B", Some(3.5))];
        let txs = build_transactions(&rows, &Goods, &Price).unwrap();
        assert_eq!(txs[0].weight(), 0.0);
        assert_eq!(txs[1].weight(), 3.5);
    }

    #[test]
    fn test_negative_weight_fails() {
        let rows = vec![basket("A", Some(1.0)), basket("B", Some(-2.0))];
        let err = build_transactions(&rows, &Goods, &Price).unwrap_err();
        assert!(matches!(err, MiningError::Input { row: 1, .. }));
    }

    #[test]
    fn test_extractor_failure_fails_whole_build() {
        let rows = vec![basket("A", None), basket("!", None), basket("B", None)];
        let err = build_unweighted(&rows, &Goods).unwrap_err();
        match err {
            MiningError::Input { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("unreadable"));
            }
            other => panic!("Expected input error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_identifier_fails() {
        let rows = vec![basket("A, ", None)];
        // " " survives the empty filter but is blank
        let err = build_unweighted(&rows, &Goods).unwrap_err();
        assert!(matches!(err, MiningError::Input { row: 0, .. }));
    }
}
