//! The page the quiz is injected into.
//!
//! The engine needs very little from a host: find one container by id, replace
//! its content, and set the text of feedback elements. [`StaticPage`] keeps
//! all of that in memory and is what tests and demos use.

use std::collections::BTreeMap;

pub trait Page {
    /// Is there a container with this id?
    fn contains(&self, container_id: &str) -> bool;

    /// Replace the container's content. Returns `false` when it does not exist.
    fn set_inner_html(&mut self, container_id: &str, markup: &str) -> bool;

    /// Set the visible text of an element inside injected markup.
    fn set_text(&mut self, element_id: &str, text: &str);

    /// Show a user-facing notice outside the quiz container.
    fn show_notice(&mut self, _message: &str) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
    containers: BTreeMap<String, String>,
    texts: BTreeMap<String, String>,
    notices: Vec<String>,
}

impl StaticPage {
    /// Page with one empty container.
    pub fn with_container(container_id: impl Into<String>) -> Self {
        let mut page = StaticPage::default();
        page.containers.insert(container_id.into(), String::new());
        page
    }

    pub fn inner_html(&self, container_id: &str) -> Option<&str> {
        self.containers.get(container_id).map(String::as_str)
    }

    /// Text last set on `element_id`; empty when never set.
    pub fn text(&self, element_id: &str) -> &str {
        self.texts.get(element_id).map(String::as_str).unwrap_or("")
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl Page for StaticPage {
    fn contains(&self, container_id: &str) -> bool {
        self.containers.contains_key(container_id)
    }

    fn set_inner_html(&mut self, container_id: &str, markup: &str) -> bool {
        match self.containers.get_mut(container_id) {
            Some(content) => {
                *content = markup.to_string();
                // Old feedback elements went away with the old markup.
                self.texts.clear();
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        if text.is_empty() {
            self.texts.remove(element_id);
        } else {
            self.texts.insert(element_id.to_string(), text.to_string());
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
