//! In-memory list state for one resource kind.
//!
//! Refreshes replace the list wholesale; creates prepend locally so the
//! new record shows up without a re-fetch. When overlapping refreshes
//! resolve out of order, whichever response is applied last wins.

use crate::shared::api_utils::ApiError;
use contracts::resources::ResourceRecord;

/// Which slice of the collection a view wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Ready,
    Pending,
}

#[derive(Debug, Clone)]
pub struct ResourceCollection<R> {
    items: Vec<R>,
    is_loading: bool,
    error: Option<String>,
}

impl<R: ResourceRecord> ResourceCollection<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn ready_count(&self) -> usize {
        self.items.iter().filter(|r| r.is_ready()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|r| !r.is_ready()).count()
    }

    /// Projection over the current items; recomputed per call, never
    /// stored separately.
    pub fn items_for(&self, filter: StatusFilter) -> Vec<R> {
        self.items
            .iter()
            .filter(|r| match filter {
                StatusFilter::All => true,
                StatusFilter::Ready => r.is_ready(),
                StatusFilter::Pending => !r.is_ready(),
            })
            .cloned()
            .collect()
    }

    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Apply a refresh outcome. Failures keep the previous items: stale
    /// data on screen beats a blanked view.
    pub fn finish_refresh(&mut self, result: Result<Vec<R>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Prepend a freshly created record so it appears first immediately.
    pub fn insert_created(&mut self, record: R) {
        self.items.insert(0, record);
    }
}

impl<R: ResourceRecord> Default for ResourceCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::resources::StudyMaterial;

    fn material(id: &str, indexed: bool) -> StudyMaterial {
        StudyMaterial {
            id: id.to_string(),
            title: format!("Material {id}"),
            description: None,
            file_path: format!("uploads/study_materials/{id}.pdf"),
            created_at: "2025-03-15T14:02:26".to_string(),
            updated_at: "2025-03-15T14:02:26".to_string(),
            is_indexed: indexed,
            indexed_at: None,
        }
    }

    fn ids(c: &ResourceCollection<StudyMaterial>) -> Vec<&str> {
        c.items().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn begin_refresh_sets_loading_and_clears_error() {
        let mut c: ResourceCollection<StudyMaterial> = ResourceCollection::new();
        c.finish_refresh(Err(ApiError::Network("down".into())));
        assert!(c.error().is_some());

        c.begin_refresh();
        assert!(c.is_loading());
        assert!(c.error().is_none());
    }

    #[test]
    fn successful_refresh_replaces_items() {
        let mut c = ResourceCollection::new();
        c.begin_refresh();
        c.finish_refresh(Ok(vec![material("a", true), material("b", false)]));
        assert_eq!(ids(&c), vec!["a", "b"]);
        assert!(!c.is_loading());

        c.begin_refresh();
        c.finish_refresh(Ok(vec![material("c", false)]));
        assert_eq!(ids(&c), vec!["c"]);
    }

    #[test]
    fn failed_refresh_keeps_stale_items() {
        let mut c = ResourceCollection::new();
        c.begin_refresh();
        c.finish_refresh(Ok(vec![material("a", true)]));

        c.begin_refresh();
        c.finish_refresh(Err(ApiError::Server(500, "boom".into())));

        assert_eq!(ids(&c), vec!["a"]);
        assert_eq!(c.error(), Some("Server error (HTTP 500)"));
        assert!(!c.is_loading());
    }

    #[test]
    fn insert_created_prepends_exactly_once() {
        let mut c = ResourceCollection::new();
        c.finish_refresh(Ok(vec![material("old", true)]));
        c.insert_created(material("new", false));

        assert_eq!(ids(&c), vec!["new", "old"]);
        assert_eq!(
            c.items().iter().filter(|m| m.id == "new").count(),
            1,
            "created record appears exactly once"
        );
    }

    #[test]
    fn overlapping_refreshes_are_last_write_wins() {
        // Two refreshes are started; the second call's response arrives
        // first, then the first call's response. The first response is
        // applied last, so it is what remains visible.
        let mut c = ResourceCollection::new();
        c.begin_refresh();
        c.begin_refresh();
        c.finish_refresh(Ok(vec![material("from-second-call", true)]));
        c.finish_refresh(Ok(vec![material("from-first-call", true)]));

        assert_eq!(ids(&c), vec!["from-first-call"]);
    }

    #[test]
    fn projections_partition_by_readiness() {
        let mut c = ResourceCollection::new();
        c.finish_refresh(Ok(vec![
            material("a", true),
            material("b", false),
            material("c", true),
        ]));

        assert_eq!(c.len(), 3);
        assert_eq!(c.ready_count(), 2);
        assert_eq!(c.pending_count(), 1);

        let ready: Vec<String> = c
            .items_for(StatusFilter::Ready)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ready, vec!["a", "c"]);

        let pending: Vec<String> = c
            .items_for(StatusFilter::Pending)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(pending, vec!["b"]);
    }
}
