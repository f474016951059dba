use crate::domain::resources::store::ResourceStore;
use contracts::resources::{QuestionBank, StudyMaterial};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level destinations reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Overview,
    StudyMaterials,
    QuestionBanks,
    Chat,
}

impl Page {
    pub fn key(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::StudyMaterials => "study-materials",
            Page::QuestionBanks => "question-banks",
            Page::Chat => "chat",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "overview" => Some(Page::Overview),
            "study-materials" => Some(Page::StudyMaterials),
            "question-banks" => Some(Page::QuestionBanks),
            "chat" => Some(Page::Chat),
            _ => None,
        }
    }
}

/// App-wide state: the active page plus one resource store per kind.
///
/// Each store owns its in-memory list exclusively; pages get them injected
/// through this context instead of instantiating their own copies.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub materials: ResourceStore<StudyMaterial>,
    pub banks: ResourceStore<QuestionBank>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Overview),
            materials: ResourceStore::new(),
            banks: ResourceStore::new(),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }

    /// Restore the active page from `?page=` and mirror changes back into
    /// the URL so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| Page::from_key(k)) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_round_trip() {
        for page in [
            Page::Overview,
            Page::StudyMaterials,
            Page::QuestionBanks,
            Page::Chat,
        ] {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("settings"), None);
    }
}
