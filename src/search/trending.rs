use crate::models::Property;

/// Properties with a trending score, rank 1 first, cut to `top_n`.
///
/// Records without a score are left out. Equal scores keep their input order.
pub fn rank_trending<'a, I>(all: I, top_n: usize) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut ranked: Vec<&Property> = all
        .into_iter()
        .filter(|property| property.trending_score.is_some())
        .collect();
    ranked.sort_by_key(|property| property.trending_score);
    ranked.truncate(top_n);
    ranked
}

/// The property driving the landing-page hero: the first one flagged `home`.
pub fn home_property<'a, I>(all: I) -> Option<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    all.into_iter().find(|property| property.home)
}
