// Record filters — view range, keyword and category selection.
//
// Applied before analysis to narrow a batch down to what the user is
// looking at. Keyword matching is a case-insensitive substring search over
// title, description and tags.

use crate::lexicon::category_id;
use crate::models::Record;

/// Filter settings; an empty field means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Inclusive view-count range.
    pub views: Option<(u64, u64)>,
    /// Keep records mentioning any of these.
    pub keywords: Vec<String>,
    /// Category display names (see `lexicon::CATEGORY_MAPPING`).
    pub categories: Vec<String>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.views.is_none() && self.keywords.is_empty() && self.categories.is_empty()
    }

    /// Records passing every active filter, in their original order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let ids: Vec<&str> = self
            .categories
            .iter()
            .filter_map(|name| category_id(name))
            .collect();
        let needles: Vec<String> = self.keywords.iter().map(|k| k.to_lowercase()).collect();

        records
            .iter()
            .filter(|r| match self.views {
                Some((min, max)) => r.view_count >= min && r.view_count <= max,
                None => true,
            })
            .filter(|r| needles.is_empty() || mentions_any(r, &needles))
            .filter(|r| ids.is_empty() || ids.contains(&r.category_id.as_str()))
            .cloned()
            .collect()
    }
}

fn mentions_any(record: &Record, needles: &[String]) -> bool {
    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();
    let tags = record
        .tags
        .as_ref()
        .map(|t| t.joined().to_lowercase())
        .unwrap_or_default();

    needles
        .iter()
        .any(|n| title.contains(n) || description.contains(n) || tags.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tags;

    fn video(title: &str, category: &str, views: u64) -> Record {
        Record {
            title: title.to_string(),
            category_id: category.to_string(),
            view_count: views,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let records = vec![video("a", "10", 1), video("b", "20", 2)];
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records).len(), 2);
    }

    #[test]
    fn test_views_range_inclusive() {
        let records = vec![video("a", "10", 10), video("b", "10", 20), video("c", "10", 30)];
        let filter = RecordFilter {
            views: Some((10, 20)),
            ..Default::default()
        };
        let kept = filter.apply(&records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].title, "b");
    }

    #[test]
    fn test_keyword_matches_title_or_tags() {
        let mut tagged = video("nothing here", "10", 1);
        tagged.tags = Some(Tags::List(vec!["K-Pop".to_string()]));
        let records = vec![video("Best KPOP mix", "10", 1), tagged, video("cooking", "10", 1)];
        let filter = RecordFilter {
            keywords: vec!["k-pop".to_string(), "kpop".to_string()],
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 2);
    }

    #[test]
    fn test_category_names_resolve_to_ids() {
        let records = vec![video("a", "10", 1), video("b", "20", 1)];
        let filter = RecordFilter {
            categories: vec!["음악".to_string()],
            ..Default::default()
        };
        let kept = filter.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "a");
    }

    #[test]
    fn test_unknown_category_names_are_ignored() {
        let records = vec![video("a", "10", 1), video("b", "20", 1)];
        let filter = RecordFilter {
            categories: vec!["없는 카테고리".to_string()],
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 2);
    }
}
