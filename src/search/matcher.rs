use crate::models::{Article, Group, Inquiry, Property};

/// Records that can be found through a free-text search box.
pub trait TextSearchable {
    /// Fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over [`Self::search_fields`]. A blank query matches
    /// nothing.
    fn matches_query(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl TextSearchable for Property {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.tagline.as_str()]
    }
}

impl TextSearchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.author.as_str(),
            self.read_time.as_str(),
        ]
    }
}

impl TextSearchable for Group {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl TextSearchable for Inquiry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.property_name.as_str(),
        ]
    }
}

/// Navigation quick search: a blank query yields no suggestions.
pub fn quick_search<'a, T: TextSearchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .collect()
}

/// List-page search box: a blank query shows the whole list.
pub fn search_or_all<'a, T: TextSearchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    quick_search(items, query)
}

/// Search inside a group page, by name or location.
pub fn search_members<'a, I>(members: I, query: &str) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let needle = query.to_lowercase();
    members
        .into_iter()
        .filter(|property| {
            property.name.to_lowercase().contains(&needle)
                || property.location.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, tagline: &str, location: &str) -> Property {
        Property {
            name: name.to_string(),
            tagline: tagline.to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_query_matches_nothing() {
        let all = vec![property("Skyline", "Live above", "Surat")];
        assert!(quick_search(&all, "").is_empty());
        assert!(quick_search(&all, "   ").is_empty());
        assert_eq!(search_or_all(&all, "").len(), 1);
    }

    #[test]
    fn matches_name_or_tagline_ignoring_case() {
        let all = vec![
            property("Skyline Towers", "", "Surat"),
            property("Orchid", "Luxury by the LAKE", "Ahmedabad"),
            property("Maple", "Garden homes", "Vadodara"),
        ];
        assert_eq!(quick_search(&all, "sky"), vec![&all[0]]);
        assert_eq!(quick_search(&all, "lake"), vec![&all[1]]);
        assert!(quick_search(&all, "surat").is_empty());
    }

    #[test]
    fn articles_match_title_author_or_read_time() {
        let articles = vec![
            Article {
                title: "Buying your first home".into(),
                author: "Meera".into(),
                read_time: "5 min read".into(),
                ..Default::default()
            },
            Article {
                title: "RERA explained".into(),
                author: "Karan".into(),
                read_time: "12 min read".into(),
                ..Default::default()
            },
        ];
        assert_eq!(quick_search(&articles, "meera"), vec![&articles[0]]);
        assert_eq!(quick_search(&articles, "12 MIN"), vec![&articles[1]]);
    }

    #[test]
    fn group_members_match_location() {
        let members = vec![
            property("Skyline", "", "Surat"),
            property("Orchid", "", "Ahmedabad"),
        ];
        assert_eq!(search_members(&members, "ahm"), vec![&members[1]]);
        assert_eq!(search_members(&members, "").len(), 2);
    }
}
