use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// One uploaded resource with its processing status badge. The badge
/// only reflects what the backend reported; the client never flips it.
#[component]
#[allow(non_snake_case)]
pub fn ResourceCard(
    #[prop(into)] title: String,
    #[prop(into)] description: Option<String>,
    #[prop(into)] created_at: String,
    ready: bool,
    /// Badge label when processing has completed, e.g. "Indexed".
    #[prop(into)]
    ready_label: String,
) -> impl IntoView {
    view! {
        <div style="background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 16px; display: flex; flex-direction: column; gap: 8px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex align=FlexAlign::Center style="gap: 10px; min-width: 0;">
                    {icon("file")}
                    <span style="font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        {title}
                    </span>
                </Flex>
                {if ready {
                    view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {ready_label}
                        </Badge>
                    }
                    .into_any()
                } else {
                    view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            "Processing"
                        </Badge>
                    }
                    .into_any()
                }}
            </Flex>

            {description
                .filter(|d| !d.is_empty())
                .map(|d| {
                    view! {
                        <p style="color: var(--colorNeutralForeground3); font-size: 13px; margin: 0;">
                            {d}
                        </p>
                    }
                })}

            <Flex align=FlexAlign::Center style="gap: 6px; color: var(--colorNeutralForeground3); font-size: 12px;">
                {icon("clock")}
                <span>{format_date(&created_at)}</span>
            </Flex>
        </div>
    }
}
