//! Mount-triggered reveal animation

use leptos::prelude::*;

use crate::motion::Variant;

/// Renders `children` in the variant's hidden pose, then switches to the
/// visible pose on the next animation frame so the transition plays.
#[component]
pub fn Reveal(
    #[prop(default = Variant::fade_in_up())] variant: Variant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        request_animation_frame(move || {
            visible.try_set(true);
        });
    });

    view! {
        <div class=class style=move || variant.style(visible.get())>
            {children()}
        </div>
    }
}
