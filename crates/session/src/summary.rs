use serde::{Deserialize, Serialize};

/// Fixed set of page signals extracted by [`Session::summarize`](crate::Session::summarize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub title: String,
    pub url: String,
    /// Text of every level-1 heading, in document order.
    pub h1: Vec<String>,
    /// Count of anchor elements.
    pub links: usize,
    /// Count of form elements.
    pub forms: usize,
}

/// Script evaluated in page context to produce a [`PageSummary`] record.
pub(crate) const SUMMARY_SCRIPT: &str = "(() => ({ \
     title: document.title, \
     url: window.location.href, \
     h1: Array.from(document.querySelectorAll('h1')).map(h => (h.textContent || '').trim()), \
     links: document.querySelectorAll('a').length, \
     forms: document.querySelectorAll('form').length \
     }))()";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_decodes_from_page_record() {
        let value = serde_json::json!({
            "title": "Example Domain",
            "url": "https://example.test/",
            "h1": ["Example Domain"],
            "links": 1,
            "forms": 0,
        });
        let summary: PageSummary = serde_json::from_value(value).unwrap();
        assert_eq!(summary.title, "Example Domain");
        assert_eq!(summary.h1, vec!["Example Domain".to_string()]);
        assert_eq!(summary.links, 1);
        assert_eq!(summary.forms, 0);
    }

    #[test]
    fn summary_script_extracts_the_five_signals() {
        for signal in ["document.title", "location.href", "'h1'", "'a'", "'form'"] {
            assert!(SUMMARY_SCRIPT.contains(signal), "missing {signal}");
        }
    }
}
