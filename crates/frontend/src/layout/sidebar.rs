//! Sidebar navigation between the four app pages.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const NAV_ITEMS: [(Page, &str, &str); 4] = [
    (Page::Overview, "Overview", "home"),
    (Page::StudyMaterials, "Study Materials", "book-open"),
    (Page::QuestionBanks, "Question Banks", "layers"),
    (Page::Chat, "Ask AI", "sparkles"),
];

#[component]
#[allow(non_snake_case)]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div style="padding: 20px 12px; display: flex; flex-direction: column; gap: 4px; height: 100%;">
            <div style="display: flex; align-items: center; gap: 10px; padding: 0 8px 20px 8px; border-bottom: 1px solid var(--colorNeutralStroke2, #e0e0e0); margin-bottom: 12px;">
                {icon("graduation-cap")}
                <span style="font-size: 16px; font-weight: bold;">"Study Assistant"</span>
            </div>

            {NAV_ITEMS
                .iter()
                .map(|&(page, label, icon_name)| {
                    view! {
                        <button
                            style=move || {
                                let active = ctx.active_page.get() == page;
                                format!(
                                    "display: flex; align-items: center; gap: 10px; width: 100%; padding: 10px 12px; border: none; border-radius: 8px; cursor: pointer; text-align: left; font-size: 14px; {}",
                                    if active {
                                        "background: var(--colorBrandBackground2, #ebefff); font-weight: 600;"
                                    } else {
                                        "background: transparent;"
                                    },
                                )
                            }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {icon(icon_name)}
                            <span>{label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
