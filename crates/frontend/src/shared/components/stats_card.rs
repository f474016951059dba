use leptos::prelude::*;

/// Small numeric summary card with a colored accent stripe.
#[component]
#[allow(non_snake_case)]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(into)] hint: String,
    /// CSS color for the left accent border.
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    let style = format!(
        "flex: 1; padding: 16px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-left: 4px solid {}; border-radius: 8px;",
        accent
    );

    view! {
        <div style=style>
            <div style="font-size: 13px; color: var(--colorNeutralForeground3);">{title}</div>
            <div style="font-size: 26px; font-weight: bold; margin: 4px 0;">
                {move || value.get()}
            </div>
            <div style="font-size: 12px; color: var(--colorNeutralForeground3);">{hint}</div>
        </div>
    }
}
