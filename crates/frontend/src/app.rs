use crate::domain::chat::ui::ChatPage;
use crate::domain::overview::ui::OverviewPage;
use crate::domain::question_banks::ui::list::QuestionBankList;
use crate::domain::study_materials::ui::list::StudyMaterialList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <MainLayout />
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Sync the active page with the URL query string. Runs once on creation.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active_page.get() {
                        Page::Overview => view! { <OverviewPage /> }.into_any(),
                        Page::StudyMaterials => view! { <StudyMaterialList /> }.into_any(),
                        Page::QuestionBanks => view! { <QuestionBankList /> }.into_any(),
                        Page::Chat => view! { <ChatPage /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}
