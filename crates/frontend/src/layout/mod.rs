pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------+
/// |  Sidebar  |        Content         |
/// |  (Left)   |        (Center)        |
/// +-----------+------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div style="display: flex; height: 100vh; overflow: hidden; background: var(--colorNeutralBackground2, #f5f5f5);">
            <aside style="width: 240px; flex-shrink: 0; display: flex; flex-direction: column; background: var(--colorNeutralBackground1, #fff); border-right: 1px solid var(--colorNeutralStroke2, #e0e0e0);">
                {left()}
            </aside>

            <main style="flex: 1; overflow-y: auto;">
                {center()}
            </main>
        </div>
    }
}
