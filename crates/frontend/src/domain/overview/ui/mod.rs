//! Landing page: aggregate counts across both resource kinds plus
//! shortcuts into the main sections.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::stats_card::StatsCard;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

const CARD_STYLE: &str = "flex: 1; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 20px; display: flex; flex-direction: column; gap: 10px;";

#[component]
#[allow(non_snake_case)]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let materials = ctx.materials;
    let banks = ctx.banks;

    Effect::new(move |_| {
        materials.refresh();
        banks.refresh();
    });

    view! {
        <div style="padding: 24px; display: flex; flex-direction: column; gap: 20px;">
            <div>
                <h2 style="font-size: 22px; font-weight: bold; margin: 0;">"Welcome back"</h2>
                <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                    "Here is where your studies stand today"
                </span>
            </div>

            <Flex style="gap: 16px;">
                <StatsCard
                    title="Study Materials"
                    value=Signal::derive(move || materials.collection.with(|c| c.len()))
                    hint="Uploaded documents"
                    accent="#7c3aed"
                />
                <StatsCard
                    title="Question Banks"
                    value=Signal::derive(move || banks.collection.with(|c| c.len()))
                    hint="Practice collections"
                    accent="#2563eb"
                />
                <StatsCard
                    title="Ready to Use"
                    value=Signal::derive(move || {
                        materials.collection.with(|c| c.ready_count())
                            + banks.collection.with(|c| c.ready_count())
                    })
                    hint="Finished processing"
                    accent="#059669"
                />
                <StatsCard
                    title="Still Processing"
                    value=Signal::derive(move || {
                        materials.collection.with(|c| c.pending_count())
                            + banks.collection.with(|c| c.pending_count())
                    })
                    hint="Check back shortly"
                    accent="#ea580c"
                />
            </Flex>

            <Flex style="gap: 16px;">
                <div style=CARD_STYLE>
                    <Flex align=FlexAlign::Center style="gap: 10px;">
                        {icon("book-open")}
                        <h3 style="font-size: 15px; font-weight: 600; margin: 0;">
                            "Study Materials"
                        </h3>
                    </Flex>
                    <p style="color: var(--colorNeutralForeground3); font-size: 13px; margin: 0;">
                        "Upload lecture notes and textbooks, then ask questions about them."
                    </p>
                    <div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.navigate(Page::StudyMaterials)
                        >
                            "Browse Materials"
                        </Button>
                    </div>
                </div>
                <div style=CARD_STYLE>
                    <Flex align=FlexAlign::Center style="gap: 10px;">
                        {icon("layers")}
                        <h3 style="font-size: 15px; font-weight: 600; margin: 0;">
                            "Question Banks"
                        </h3>
                    </Flex>
                    <p style="color: var(--colorNeutralForeground3); font-size: 13px; margin: 0;">
                        "Keep practice question collections organized in one place."
                    </p>
                    <div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.navigate(Page::QuestionBanks)
                        >
                            "Browse Banks"
                        </Button>
                    </div>
                </div>
                <div style=CARD_STYLE>
                    <Flex align=FlexAlign::Center style="gap: 10px;">
                        {icon("sparkles")}
                        <h3 style="font-size: 15px; font-weight: 600; margin: 0;">
                            "AI Assistant"
                        </h3>
                    </Flex>
                    <p style="color: var(--colorNeutralForeground3); font-size: 13px; margin: 0;">
                        "Ask anything about your uploaded materials and get answers."
                    </p>
                    <div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.navigate(Page::Chat)
                        >
                            "Start Chatting"
                        </Button>
                    </div>
                </div>
            </Flex>
        </div>
    }
}
