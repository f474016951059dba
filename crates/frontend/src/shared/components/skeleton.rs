use leptos::prelude::*;

/// Gray placeholder grid shown while the first fetch is in flight.
#[component]
#[allow(non_snake_case)]
pub fn ResourceGridSkeleton(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;">
            {(0..count)
                .map(|_| {
                    view! {
                        <div style="height: 120px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 16px;">
                            <div style="width: 60%; height: 14px; background: var(--colorNeutralBackground3, #ececec); border-radius: 4px; margin-bottom: 10px;"></div>
                            <div style="width: 90%; height: 10px; background: var(--colorNeutralBackground3, #ececec); border-radius: 4px; margin-bottom: 6px;"></div>
                            <div style="width: 40%; height: 10px; background: var(--colorNeutralBackground3, #ececec); border-radius: 4px;"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
