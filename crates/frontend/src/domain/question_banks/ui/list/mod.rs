//! Question banks page: upload, stats and the processed/pending list.

use crate::domain::resources::collection::StatusFilter;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::file_upload::{FileUploadCard, UploadFuture, UploadHandler, UploadRequest};
use crate::shared::components::resource_card::ResourceCard;
use crate::shared::components::skeleton::ResourceGridSkeleton;
use crate::shared::components::stats_card::StatsCard;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

fn filter_button_style(active: bool) -> String {
    format!(
        "padding: 6px 14px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; cursor: pointer; font-size: 13px; {}",
        if active {
            "background: var(--colorBrandBackground2, #ebefff); font-weight: 600;"
        } else {
            "background: var(--colorNeutralBackground1, #fff);"
        },
    )
}

#[component]
#[allow(non_snake_case)]
pub fn QuestionBankList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = ctx.banks;

    let show_upload = RwSignal::new(false);
    let filter = RwSignal::new(StatusFilter::All);
    let notice = RwSignal::new(None::<(bool, String)>);

    Effect::new(move |_| {
        store.refresh();
    });

    let handle_upload: UploadHandler = Rc::new(move |request: UploadRequest| -> UploadFuture {
        Box::pin(async move {
            let created = store
                .create(&request.file, &request.title, request.description.as_deref())
                .await;
            match created {
                Ok(bank) => {
                    notice.set(Some((
                        true,
                        format!("\"{}\" uploaded. Processing runs in the background.", bank.title),
                    )));
                    show_upload.set(false);
                    Ok(())
                }
                Err(e) => {
                    log::warn!("question bank upload failed: {}", e);
                    notice.set(Some((false, e.to_string())));
                    Err(e.to_string())
                }
            }
        })
    });
    let handle_upload = StoredValue::new_local(handle_upload);

    view! {
        <div style="padding: 24px; display: flex; flex-direction: column; gap: 16px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <div>
                    <h2 style="font-size: 20px; font-weight: bold; margin: 0;">"Question Banks"</h2>
                    <span style="color: var(--colorNeutralForeground3); font-size: 13px;">
                        "Practice with your uploaded question collections"
                    </span>
                </div>
                <Flex style="gap: 8px;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| store.refresh()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_upload.update(|v| *v = !*v)
                    >
                        {icon("plus")}
                        " Add Question Bank"
                    </Button>
                </Flex>
            </Flex>

            {move || {
                notice
                    .get()
                    .map(|(ok, text)| {
                        view! {
                            <Flex
                                justify=FlexJustify::SpaceBetween
                                align=FlexAlign::Center
                                style=if ok {
                                    "padding: 10px 12px; background: var(--colorStatusSuccessBackground1, #f1faf1); border-radius: 6px; font-size: 13px;"
                                } else {
                                    "padding: 10px 12px; background: var(--colorStatusDangerBackground1, #fdf3f4); border-radius: 6px; font-size: 13px;"
                                }
                            >
                                <Flex align=FlexAlign::Center style="gap: 8px;">
                                    {icon(if ok { "check-circle" } else { "alert" })}
                                    <span>{text}</span>
                                </Flex>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    on_click=move |_| notice.set(None)
                                >
                                    {icon("x")}
                                </Button>
                            </Flex>
                        }
                    })
            }}

            <Show when=move || show_upload.get()>
                <FileUploadCard
                    heading="Upload Question Bank"
                    blurb="Upload PDF, DOC, or TXT files with practice questions"
                    accept=".pdf,.doc,.docx,.txt"
                    max_size_mb=50
                    on_upload=handle_upload.get_value()
                />
            </Show>

            <Flex style="gap: 16px;">
                <StatsCard
                    title="Total Banks"
                    value=Signal::derive(move || store.collection.with(|c| c.len()))
                    hint="All uploaded collections"
                    accent="#2563eb"
                />
                <StatsCard
                    title="Processed"
                    value=Signal::derive(move || store.collection.with(|c| c.ready_count()))
                    hint="Ready for practice"
                    accent="#059669"
                />
                <StatsCard
                    title="Pending"
                    value=Signal::derive(move || store.collection.with(|c| c.pending_count()))
                    hint="Processing..."
                    accent="#ea580c"
                />
            </Flex>

            <Flex style="gap: 8px;">
                <button
                    style=move || filter_button_style(filter.get() == StatusFilter::All)
                    on:click=move |_| filter.set(StatusFilter::All)
                >
                    "All (" {move || store.collection.with(|c| c.len())} ")"
                </button>
                <button
                    style=move || filter_button_style(filter.get() == StatusFilter::Ready)
                    on:click=move |_| filter.set(StatusFilter::Ready)
                >
                    "Processed (" {move || store.collection.with(|c| c.ready_count())} ")"
                </button>
                <button
                    style=move || filter_button_style(filter.get() == StatusFilter::Pending)
                    on:click=move |_| filter.set(StatusFilter::Pending)
                >
                    "Pending (" {move || store.collection.with(|c| c.pending_count())} ")"
                </button>
            </Flex>

            {move || {
                let is_loading = store.collection.with(|c| c.is_loading());
                let is_empty = store.collection.with(|c| c.is_empty());
                let error = store.collection.with(|c| c.error().map(str::to_string));

                if is_loading && is_empty {
                    view! { <ResourceGridSkeleton /> }.into_any()
                } else if is_empty {
                    if let Some(e) = error {
                        view! {
                            <EmptyState
                                icon_name="alert"
                                title="Failed to load question banks"
                                description=e
                            >
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| store.refresh()
                                >
                                    "Try Again"
                                </Button>
                            </EmptyState>
                        }
                            .into_any()
                    } else {
                        view! {
                            <EmptyState
                                icon_name="layers"
                                title="No question banks yet"
                                description="Upload a question bank to start practicing"
                            >
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| show_upload.set(true)
                                >
                                    {icon("plus")}
                                    " Add Question Bank"
                                </Button>
                            </EmptyState>
                        }
                            .into_any()
                    }
                } else {
                    view! {
                        <div style="display: flex; flex-direction: column; gap: 12px;">
                            {error
                                .map(|e| {
                                    view! {
                                        <Flex align=FlexAlign::Center style="gap: 8px; padding: 8px 12px; background: var(--colorStatusWarningBackground1, #fff9f5); border-radius: 6px; font-size: 13px;">
                                            {icon("alert")}
                                            <span>
                                                {format!("{}. Showing the last loaded list.", e)}
                                            </span>
                                        </Flex>
                                    }
                                })}
                            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;">
                                <For
                                    each=move || store.collection.with(|c| c.items_for(filter.get()))
                                    key=|b| b.id.clone()
                                    let:bank
                                >
                                    <ResourceCard
                                        title=bank.title.clone()
                                        description=bank.description.clone()
                                        created_at=bank.created_at.clone()
                                        ready=bank.is_processed
                                        ready_label="Processed"
                                    />
                                </For>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
