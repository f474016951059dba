//! File upload card: drag-and-drop or browse, one staged file at a time.

use crate::shared::icons::icon;
use crate::shared::upload_form::{format_size, UploadForm, DEFAULT_MAX_MB};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thaw::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

/// A staged file plus its metadata, ready to send.
pub struct UploadRequest {
    pub file: web_sys::File,
    pub title: String,
    pub description: Option<String>,
}

pub type UploadFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Submission callback supplied by the page owning the card. An `Err`
/// keeps the form staged so the user can retry.
pub type UploadHandler = Rc<dyn Fn(UploadRequest) -> UploadFuture>;

#[component]
#[allow(non_snake_case)]
pub fn FileUploadCard(
    #[prop(into)] heading: String,
    #[prop(into)] blurb: String,
    /// Accepted extensions, e.g. ".pdf,.doc,.docx,.txt"
    #[prop(into)]
    accept: String,
    #[prop(default = DEFAULT_MAX_MB)] max_size_mb: u32,
    on_upload: UploadHandler,
) -> impl IntoView {
    let form = RwSignal::new(UploadForm::new(max_size_mb));
    // The browser file handle is not Send; it lives outside the signal
    // graph, next to the form state that mirrors its name and size.
    let staged_file = StoredValue::new_local(None::<web_sys::File>);
    let on_upload_sv = StoredValue::new_local(on_upload);
    let error = RwSignal::new(None::<String>);
    let drag_active = RwSignal::new(false);

    let input_id = format!("resource-file-input-{}", Uuid::new_v4());
    let input_id_for_label = input_id.clone();

    let accept_hint = format!("Accepted formats: {} (Max {}MB)", accept, max_size_mb);

    // Both selection paths (browse and drop) come through here, so both
    // get the same size validation and title pre-fill.
    let stage_file = move |file: web_sys::File| {
        match form.try_update(|f| f.select_file(&file.name(), file.size() as u64)) {
            Some(Ok(())) => {
                staged_file.set_value(Some(file));
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    let handle_submit = move |_| {
        let meta = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(meta)) => meta,
            Some(Err(e)) => {
                error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        let Some(file) = staged_file.get_value() else {
            form.update(|f| f.finish_submit(false));
            return;
        };
        error.set(None);

        let handler = on_upload_sv.get_value();
        leptos::task::spawn_local(async move {
            let request = UploadRequest {
                file,
                title: meta.title,
                description: meta.description,
            };
            match handler(request).await {
                Ok(()) => {
                    form.update(|f| f.finish_submit(true));
                    staged_file.set_value(None);
                }
                Err(e) => {
                    form.update(|f| f.finish_submit(false));
                    error.set(Some(e));
                }
            }
        });
    };

    let is_submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    view! {
        <div style="background: var(--colorNeutralBackground1); border: 2px dashed var(--colorNeutralStroke2); border-radius: 8px; padding: 20px; display: flex; flex-direction: column; gap: 12px;">
            <div>
                <h3 style="font-size: 15px; font-weight: 600; margin: 0;">{heading}</h3>
                <span style="color: var(--colorNeutralForeground3); font-size: 13px;">{blurb}</span>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <Flex align=FlexAlign::Center style="gap: 8px; padding: 10px 12px; background: var(--colorStatusDangerBackground1, #fdf3f4); border-radius: 6px; color: var(--colorStatusDangerForeground1, #b10e1c); font-size: 13px;">
                                {icon("alert")}
                                <span>{e}</span>
                            </Flex>
                        }
                    })
            }}

            <input
                id=input_id
                type="file"
                accept=accept
                style="display: none;"
                on:change=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            stage_file(file);
                        }
                        // allow re-selecting the same file later
                        input.set_value("");
                    }
                }
            />

            {move || {
                let staged = form.with(|f| f.staged().cloned());
                match staged {
                    None => {
                        let label_for = input_id_for_label.clone();
                        let hint = accept_hint.clone();
                        view! {
                            <div
                                style=move || {
                                    format!(
                                        "padding: 32px; text-align: center; border: 2px dashed {}; border-radius: 8px;",
                                        if drag_active.get() {
                                            "var(--colorBrandStroke1, #4f6bed)"
                                        } else {
                                            "var(--colorNeutralStroke2, #e0e0e0)"
                                        },
                                    )
                                }
                                on:dragover=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    drag_active.set(true);
                                }
                                on:dragleave=move |_| drag_active.set(false)
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    drag_active.set(false);
                                    let dropped = ev
                                        .data_transfer()
                                        .and_then(|dt| dt.files())
                                        .and_then(|files| files.get(0));
                                    if let Some(file) = dropped {
                                        stage_file(file);
                                    }
                                }
                            >
                                <div style="display: flex; flex-direction: column; align-items: center; gap: 8px;">
                                    {icon("upload")}
                                    <span style="font-size: 14px;">
                                        "Drag and drop your file here, or "
                                        <label
                                            for=label_for
                                            style="color: var(--colorBrandForeground1, #4f6bed); cursor: pointer; text-decoration: underline;"
                                        >
                                            "browse"
                                        </label>
                                    </span>
                                    <span style="font-size: 12px; color: var(--colorNeutralForeground3);">
                                        {hint}
                                    </span>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    Some(staged) => {
                        view! {
                            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="padding: 12px; background: var(--colorNeutralBackground2); border-radius: 8px;">
                                <Flex align=FlexAlign::Center style="gap: 10px;">
                                    {icon("file")}
                                    <div>
                                        <div style="font-size: 14px; font-weight: 500;">
                                            {staged.name.clone()}
                                        </div>
                                        <div style="font-size: 12px; color: var(--colorNeutralForeground3);">
                                            {format_size(staged.size)}
                                        </div>
                                    </div>
                                </Flex>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    disabled=is_submitting
                                    on_click=move |_| {
                                        form.update(|f| f.remove_file());
                                        staged_file.set_value(None);
                                    }
                                >
                                    {icon("x")}
                                </Button>
                            </Flex>
                        }
                            .into_any()
                    }
                }
            }}

            <Show when=move || form.with(|f| f.staged().is_some())>
                <div style="display: flex; flex-direction: column; gap: 10px;">
                    <div>
                        <label style="font-size: 13px; font-weight: 500;">
                            "Title "
                            <span style="color: var(--colorStatusDangerForeground1, #b10e1c);">"*"</span>
                        </label>
                        <input
                            style="width: 100%; padding: 8px 10px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; font-size: 14px; box-sizing: border-box;"
                            placeholder="Enter a title for this resource"
                            prop:value=move || form.with(|f| f.title().to_string())
                            on:input=move |ev| {
                                form.update(|f| f.set_title(event_target_value(&ev)))
                            }
                        />
                    </div>

                    <div>
                        <label style="font-size: 13px; font-weight: 500;">
                            "Description (Optional)"
                        </label>
                        <textarea
                            style="width: 100%; min-height: 64px; padding: 8px 10px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; font-size: 14px; resize: vertical; box-sizing: border-box;"
                            placeholder="Add a brief description..."
                            prop:value=move || form.with(|f| f.description().to_string())
                            on:input=move |ev| {
                                form.update(|f| f.set_description(event_target_value(&ev)))
                            }
                        ></textarea>
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || form.with(|f| !f.can_submit()))
                        on_click=handle_submit
                    >
                        <Show when=move || is_submitting.get()>
                            <Spinner />
                        </Show>
                        {move || if is_submitting.get() { " Uploading..." } else { " Upload Resource" }}
                    </Button>
                </div>
            </Show>
        </div>
    }
}
