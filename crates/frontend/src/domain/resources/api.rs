//! Backend calls shared by both resource kinds.

use crate::shared::api_utils::{get_json, post_form, ApiError};
use contracts::resources::ResourceRecord;
use serde::de::DeserializeOwned;
use web_sys::FormData;

/// Page size used when a view fetches "everything".
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Fetch one page of records, newest ordering as the backend returns it.
pub async fn list<R>(skip: usize, limit: usize) -> Result<Vec<R>, ApiError>
where
    R: ResourceRecord + DeserializeOwned,
{
    let path = format!("{}?skip={}&limit={}", R::API_PATH, skip, limit);
    get_json(&path).await
}

/// Upload a file with its metadata as multipart form data.
///
/// The backend answers with the stored record; its processing flag is
/// still unset at this point, indexing runs asynchronously.
pub async fn create<R>(
    file: &web_sys::File,
    title: &str,
    description: Option<&str>,
) -> Result<R, ApiError>
where
    R: ResourceRecord + DeserializeOwned,
{
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str("title", title)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    if let Some(description) = description {
        form.append_with_str("description", description)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    post_form(R::API_PATH, &form).await
}
