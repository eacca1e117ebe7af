use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Book or group metadata attached to a tree node.
///
/// Items are owned by the catalog layer; the tree only associates one with a
/// node. `Eq + Hash` cover every field so that items can form the removal set
/// handed to [`CatalogTree::remove_items`](crate::CatalogTree::remove_items).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryItem {
    pub title: String,

    /// Author display names, in catalog order.
    pub authors: Vec<String>,

    pub series_title: Option<String>,

    /// Position inside the series; meaningful only when positive.
    pub index_in_series: i32,

    pub tags: BTreeSet<String>,

    /// Free-form cover reference (remote URL or data URI), resolved by the
    /// cover layer.
    pub cover_ref: Option<String>,

    /// Identifier of the owning catalog.
    pub catalog_link: String,
}

impl LibraryItem {
    pub fn new(title: impl Into<String>, catalog_link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: Vec::new(),
            series_title: None,
            index_in_series: 0,
            tags: BTreeSet::new(),
            cover_ref: None,
            catalog_link: catalog_link.into(),
        }
    }

    /// Authors joined with `", "`, or `None` when the item has no authors.
    pub fn authors_line(&self) -> Option<String> {
        if self.authors.is_empty() {
            None
        } else {
            Some(self.authors.join(", "))
        }
    }

    /// Tags joined with `", "`, or `None` when the item has no tags.
    pub fn tags_line(&self) -> Option<String> {
        if self.tags.is_empty() {
            None
        } else {
            Some(
                self.tags
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
    }

    /// Series position, shown only for items that belong to a series and
    /// carry a positive index.
    pub fn series_position(&self) -> Option<i32> {
        self.series_title.as_ref()?;
        (self.index_in_series > 0).then_some(self.index_in_series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item() -> LibraryItem {
        LibraryItem::new("Roadside Picnic", "opds://lib/main")
    }

    #[test]
    fn authors_line_joins_in_order() {
        let mut it = item();
        assert_eq!(it.authors_line(), None);

        it.authors = vec!["Arkady Strugatsky".into(), "Boris Strugatsky".into()];
        assert_eq!(
            it.authors_line().as_deref(),
            Some("Arkady Strugatsky, Boris Strugatsky")
        );
    }

    #[test]
    fn tags_line_joins_set() {
        let mut it = item();
        assert_eq!(it.tags_line(), None);

        it.tags.insert("sci-fi".into());
        it.tags.insert("classic".into());
        assert_eq!(it.tags_line().as_deref(), Some("classic, sci-fi"));
    }

    #[test]
    fn series_position_requires_series_and_positive_index() {
        let mut it = item();
        it.index_in_series = 2;
        assert_eq!(it.series_position(), None);

        it.series_title = Some("Noon Universe".into());
        assert_eq!(it.series_position(), Some(2));

        it.index_in_series = 0;
        assert_eq!(it.series_position(), None);

        it.index_in_series = -1;
        assert_eq!(it.series_position(), None);
    }
}
