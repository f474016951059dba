//! Chat page: one question per turn against the study corpus.

use super::model;
use super::transcript::{ChatRole, Transcript};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

const SUGGESTIONS: [&str; 4] = [
    "Summarize my latest study material",
    "Generate practice questions",
    "Explain key concepts from my notes",
    "Create a study plan",
];

#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let transcript = RwSignal::new(Transcript::new());
    let input = RwSignal::new(String::new());
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = Callback::new(move |_: ()| {
        let text = input.get_untracked();
        // try_begin guards against blank input and an in-flight request;
        // the user turn is appended optimistically here.
        let Some(query) = transcript.try_update(|t| t.try_begin(&text)).flatten() else {
            return;
        };
        input.set(String::new());
        scroll_to_bottom();

        leptos::task::spawn_local(async move {
            match model::ask(&query).await {
                Ok(answer) => transcript.update(|t| t.complete(answer)),
                Err(e) => {
                    log::warn!("ask request failed: {}", e);
                    transcript.update(|t| t.fail());
                }
            }
            scroll_to_bottom();
        });
    });

    let is_sending = Signal::derive(move || transcript.with(|t| t.is_in_flight()));

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; padding: 20px;">
            // Header
            <Flex
                align=FlexAlign::Center
                style="gap: 12px; margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                {icon("sparkles")}
                <div>
                    <h2 style="font-size: 18px; font-weight: bold;">"Ask AI"</h2>
                    <span style="color: var(--colorNeutralForeground3); font-size: 13px;">
                        "Get instant answers from your study materials"
                    </span>
                </div>
            </Flex>

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <Show when=move || transcript.with(|t| t.is_empty())>
                    <div style="margin: auto; text-align: center; max-width: 480px;">
                        <h3 style="font-size: 18px; font-weight: bold; margin-bottom: 4px;">
                            "How can I help you today?"
                        </h3>
                        <p style="color: var(--colorNeutralForeground3); margin-bottom: 16px;">
                            "Ask me anything about your study materials and question banks"
                        </p>
                        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px;">
                            {SUGGESTIONS
                                .iter()
                                .map(|&suggestion| {
                                    view! {
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| input.set(suggestion.to_string())
                                        >
                                            {suggestion}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <For
                    each=move || transcript.with(|t| t.turns().to_vec())
                    key=|turn| turn.id.to_string()
                    let:turn
                >
                    {{
                        let is_user = turn.role == ChatRole::User;
                        let time = turn.created_at.format("%H:%M").to_string();
                        view! {
                            <div style=if is_user {
                                "align-self: flex-end; max-width: 70%;"
                            } else {
                                "align-self: flex-start; max-width: 70%;"
                            }>
                                <Flex align=FlexAlign::Center style="gap: 6px; margin-bottom: 2px;">
                                    {icon(if is_user { "user" } else { "bot" })}
                                    <span style="font-size: 11px; color: var(--colorNeutralForeground3);">
                                        {time}
                                    </span>
                                </Flex>
                                <div style=if is_user {
                                    "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                } else {
                                    "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                }>
                                    <div style="white-space: pre-wrap;">{turn.content.clone()}</div>
                                </div>
                            </div>
                        }
                    }}
                </For>

                <Show when=move || is_sending.get()>
                    <Flex align=FlexAlign::Center style="gap: 8px; align-self: flex-start;">
                        <Spinner />
                        <span style="color: var(--colorNeutralForeground3); font-size: 13px;">
                            "Thinking..."
                        </span>
                    </Flex>
                </Show>
            </div>

            // Input area
            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=input
                        placeholder="Ask me anything... (Enter to send, Shift+Enter for a new line)"
                        attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                        disabled=is_sending
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_sending
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if is_sending.get() { " Sending..." } else { " Send" }}
                </Button>
            </Flex>
        </div>
    }
}
