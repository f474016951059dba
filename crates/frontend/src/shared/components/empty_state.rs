use crate::shared::icons::icon;
use leptos::prelude::*;

/// Centered placeholder for lists with nothing (or nothing loadable) to
/// show. An optional action slot renders below the description.
#[component]
#[allow(non_snake_case)]
pub fn EmptyState(
    #[prop(into)] icon_name: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 48px 24px; text-align: center;">
            <div style="width: 56px; height: 56px; border-radius: 50%; background: var(--colorNeutralBackground2); display: flex; align-items: center; justify-content: center;">
                {icon(&icon_name)}
            </div>
            <h3 style="font-size: 16px; font-weight: 600;">{title}</h3>
            <p style="color: var(--colorNeutralForeground3); font-size: 13px; max-width: 360px;">
                {description}
            </p>
            {children.map(|c| view! { <div style="margin-top: 8px;">{c()}</div> })}
        </div>
    }
}
