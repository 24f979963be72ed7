use serde::{Deserialize, Serialize};

use crate::format::comparable_value;
use crate::models::Property;

/// Price ordering offered on the category listing pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceOrder {
    #[default]
    Default,
    Ascending,
    Descending,
}

/// Order by [`comparable_value`]. `Default` keeps the input order; ties are stable.
pub fn sort_by_price<'a, I>(items: I, order: PriceOrder) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut sorted: Vec<&Property> = items.into_iter().collect();
    let key = |property: &&Property| comparable_value(property.price_range.as_ref());
    match order {
        PriceOrder::Default => {}
        PriceOrder::Ascending => sorted.sort_by(|a, b| key(a).total_cmp(&key(b))),
        PriceOrder::Descending => sorted.sort_by(|a, b| key(b).total_cmp(&key(a))),
    }
    sorted
}
