use leptos::prelude::*;

/// Primary `type="button"` button
#[component]
pub fn Button(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button button--primary {}", additional_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
