//! Upload form state: one staged file plus its metadata.
//!
//! The form moves Empty -> Staged -> Submitting and back. Oversized files
//! never enter Staged; a failed submit keeps everything so the user can
//! retry; a successful submit resets the whole form.

use std::fmt;

/// Default size limit in megabytes when a use-site does not configure one.
pub const DEFAULT_MAX_MB: u32 = 10;

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadFormError {
    FileTooLarge { limit_mb: u32 },
    NoFileStaged,
    TitleRequired,
    SubmitInProgress,
}

impl fmt::Display for UploadFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadFormError::FileTooLarge { limit_mb } => {
                write!(f, "File size should not exceed {}MB", limit_mb)
            }
            UploadFormError::NoFileStaged => write!(f, "Select a file first"),
            UploadFormError::TitleRequired => write!(f, "Title is required"),
            UploadFormError::SubmitInProgress => write!(f, "Upload already in progress"),
        }
    }
}

/// The single staged file. Only metadata lives here; the browser file
/// handle is kept next to the form by the component that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub name: String,
    pub size: u64,
}

/// Metadata ready for submission, produced by `begin_submit`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadMeta {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UploadForm {
    max_mb: u32,
    staged: Option<StagedFile>,
    title: String,
    description: String,
    submitting: bool,
}

impl UploadForm {
    pub fn new(max_mb: u32) -> Self {
        Self {
            max_mb,
            staged: None,
            title: String::new(),
            description: String::new(),
            submitting: false,
        }
    }

    pub fn staged(&self) -> Option<&StagedFile> {
        self.staged.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn max_mb(&self) -> u32 {
        self.max_mb
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Stage a selected file. Drag-and-drop and click-to-browse both end
    /// up here, so both get the same size check. An empty title is
    /// pre-filled from the filename with its final extension stripped;
    /// a title the user already typed is left alone.
    pub fn select_file(&mut self, name: &str, size: u64) -> Result<(), UploadFormError> {
        if size > u64::from(self.max_mb) * BYTES_PER_MB {
            return Err(UploadFormError::FileTooLarge {
                limit_mb: self.max_mb,
            });
        }

        self.staged = Some(StagedFile {
            name: name.to_string(),
            size,
        });
        if self.title.is_empty() {
            self.title = file_stem(name).to_string();
        }
        Ok(())
    }

    /// Discard the staged file; title and description stay as typed.
    pub fn remove_file(&mut self) {
        self.staged = None;
    }

    pub fn can_submit(&self) -> bool {
        self.staged.is_some() && !self.title.trim().is_empty() && !self.submitting
    }

    /// Move to Submitting and hand back the metadata to send.
    pub fn begin_submit(&mut self) -> Result<UploadMeta, UploadFormError> {
        if self.submitting {
            return Err(UploadFormError::SubmitInProgress);
        }
        if self.staged.is_none() {
            return Err(UploadFormError::NoFileStaged);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UploadFormError::TitleRequired);
        }

        self.submitting = true;
        let description = self.description.trim();
        Ok(UploadMeta {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    /// End a submit: success resets the whole form, failure keeps the
    /// staged file and fields for a retry.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.staged = None;
            self.title.clear();
            self.description.clear();
        }
    }
}

/// The filename with its final extension removed; "notes.v2.pdf" keeps
/// the inner dot and becomes "notes.v2".
pub fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Human-readable file size, e.g. "2.31 MB".
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn oversized_file_is_rejected_without_staging() {
        let mut form = UploadForm::new(50);
        let err = form.select_file("huge.pdf", 60 * MB).unwrap_err();
        assert_eq!(err, UploadFormError::FileTooLarge { limit_mb: 50 });
        assert!(form.staged().is_none());
        // no title pre-fill happened either
        assert_eq!(form.title(), "");
    }

    #[test]
    fn file_at_the_limit_is_accepted() {
        let mut form = UploadForm::new(10);
        form.select_file("ok.pdf", 10 * MB).unwrap();
        assert!(form.staged().is_some());
    }

    #[test]
    fn title_prefill_strips_only_final_extension() {
        let mut form = UploadForm::new(50);
        form.select_file("notes.v2.pdf", MB).unwrap();
        assert_eq!(form.title(), "notes.v2");
    }

    #[test]
    fn prefill_never_overwrites_a_typed_title() {
        let mut form = UploadForm::new(50);
        form.set_title("My Notes".to_string());
        form.select_file("notes.pdf", MB).unwrap();
        assert_eq!(form.title(), "My Notes");
    }

    #[test]
    fn file_stem_edge_cases() {
        assert_eq!(file_stem("notes.pdf"), "notes");
        assert_eq!(file_stem("archive"), "archive");
        assert_eq!(file_stem(".gitignore"), ".gitignore");
    }

    #[test]
    fn remove_file_keeps_fields() {
        let mut form = UploadForm::new(50);
        form.select_file("notes.pdf", MB).unwrap();
        form.set_description("week 3".to_string());
        form.remove_file();
        assert!(form.staged().is_none());
        assert_eq!(form.title(), "notes");
        assert_eq!(form.description(), "week 3");
    }

    #[test]
    fn submit_requires_staged_file_and_title() {
        let mut form = UploadForm::new(50);
        assert_eq!(form.begin_submit().unwrap_err(), UploadFormError::NoFileStaged);

        form.select_file("notes.pdf", MB).unwrap();
        form.set_title("   ".to_string());
        assert_eq!(form.begin_submit().unwrap_err(), UploadFormError::TitleRequired);
    }

    #[test]
    fn second_submit_while_submitting_is_rejected() {
        let mut form = UploadForm::new(50);
        form.select_file("notes.pdf", MB).unwrap();
        form.begin_submit().unwrap();
        assert_eq!(
            form.begin_submit().unwrap_err(),
            UploadFormError::SubmitInProgress
        );
    }

    #[test]
    fn failed_submit_retains_everything() {
        let mut form = UploadForm::new(50);
        form.select_file("notes.pdf", MB).unwrap();
        form.set_description("keep me".to_string());
        form.begin_submit().unwrap();
        form.finish_submit(false);

        assert!(form.staged().is_some());
        assert_eq!(form.title(), "notes");
        assert_eq!(form.description(), "keep me");
        assert!(!form.is_submitting());
    }

    #[test]
    fn successful_submit_resets_the_form() {
        let mut form = UploadForm::new(50);
        form.select_file("notes.pdf", MB).unwrap();
        form.set_description("done".to_string());
        let meta = form.begin_submit().unwrap();
        assert_eq!(meta.title, "notes");
        assert_eq!(meta.description, Some("done".to_string()));
        form.finish_submit(true);

        assert!(form.staged().is_none());
        assert_eq!(form.title(), "");
        assert_eq!(form.description(), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn blank_description_submits_as_none() {
        let mut form = UploadForm::new(50);
        form.select_file("notes.pdf", MB).unwrap();
        let meta = form.begin_submit().unwrap();
        assert_eq!(meta.description, None);
    }
}
