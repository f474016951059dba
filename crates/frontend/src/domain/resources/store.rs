//! Signal-backed store around [`ResourceCollection`].
//!
//! One store per resource kind is created in the app context and handed
//! to pages; the store owns its list exclusively.

use super::api;
use super::collection::ResourceCollection;
use crate::shared::api_utils::ApiError;
use contracts::resources::ResourceRecord;
use leptos::prelude::*;
use serde::de::DeserializeOwned;

pub struct ResourceStore<R: Send + Sync + 'static> {
    pub collection: RwSignal<ResourceCollection<R>>,
}

impl<R: Send + Sync + 'static> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ResourceStore<R> {}

impl<R> ResourceStore<R>
where
    R: ResourceRecord + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            collection: RwSignal::new(ResourceCollection::new()),
        }
    }

    /// Re-fetch the whole list. Concurrent calls are not de-duplicated;
    /// whichever response lands last overwrites the snapshot.
    pub fn refresh(&self) {
        let collection = self.collection;
        collection.update(|c| c.begin_refresh());

        leptos::task::spawn_local(async move {
            let result = api::list::<R>(0, api::DEFAULT_PAGE_LIMIT).await;
            if let Err(e) = &result {
                log::warn!("failed to list {}s: {}", R::KIND_LABEL, e);
            }
            collection.update(|c| c.finish_refresh(result));
        });
    }

    /// Upload a new record. On success it is prepended to the local list
    /// (no re-fetch needed for it to appear); on failure the list is
    /// left untouched and the error goes back to the caller.
    pub async fn create(
        &self,
        file: &web_sys::File,
        title: &str,
        description: Option<&str>,
    ) -> Result<R, ApiError> {
        let created = api::create::<R>(file, title, description).await?;
        self.collection.update(|c| c.insert_created(created.clone()));
        Ok(created)
    }
}

impl<R> Default for ResourceStore<R>
where
    R: ResourceRecord + DeserializeOwned + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
