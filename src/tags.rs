//! Tag editor helpers
//!
//! A tag row is a `<select>` of known tags plus a free-text input that only
//! shows up when the "other..." entry is picked. The vocabulary itself is
//! fetched by the page and handed in.

use serde::{Deserialize, Serialize};

/// Option value that reveals the free-text tag input
pub const OTHER_TAG: &str = "other...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl TagOption {
    fn new(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            selected,
        }
    }
}

/// Options for a tag `<select>`: sorted vocabulary, then "other..."
pub fn tag_options(vocabulary: &[String], selected: &str) -> Vec<TagOption> {
    let mut sorted: Vec<&String> = vocabulary.iter().collect();
    sorted.sort();

    let mut options: Vec<TagOption> = sorted
        .into_iter()
        .map(|tag| TagOption::new(tag, !selected.is_empty() && tag == selected))
        .collect();
    options.push(TagOption::new(OTHER_TAG, false));
    options
}

/// Form field name for one part of the `index`-th tag row
pub fn tag_field_name(component: &str, index: usize, key: &str) -> String {
    format!("{}[{}].{}", component, index, key)
}

/// Input type for the free-text tag input given the selected option
pub fn other_input_type(value: &str) -> &'static str {
    if value == OTHER_TAG {
        "text"
    } else {
        "hidden"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<String> {
        ["plate", "antibody", "lane"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_options_sorted_with_other_last() {
        let options = tag_options(&vocab(), "");
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["antibody", "lane", "plate", OTHER_TAG]);
        assert!(options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_selected_value_marked() {
        let options = tag_options(&vocab(), "lane");
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "lane");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(tag_field_name("tags", 2, "tag"), "tags[2].tag");
        assert_eq!(tag_field_name("tags", 0, "value"), "tags[0].value");
    }

    #[test]
    fn test_other_input_type() {
        assert_eq!(other_input_type(OTHER_TAG), "text");
        assert_eq!(other_input_type("plate"), "hidden");
    }
}
