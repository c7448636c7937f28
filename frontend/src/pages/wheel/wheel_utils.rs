use yew::prelude::*;

use crate::styles;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else {
        "Spin the Wheel!"
    };
    let is_disabled = props.is_spinning || !props.can_spin;

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={if is_disabled { styles::SPIN_BUTTON_DISABLED } else { styles::SPIN_BUTTON }}
        >
            {button_text}
        </button>
    }
}

// Winner popup component
#[derive(Properties, PartialEq)]
pub struct ResultPopupProps {
    pub winner: Option<String>,
    pub dark_mode: bool,
    pub on_close: Callback<()>,
}

#[function_component(ResultPopup)]
pub fn result_popup(props: &ResultPopupProps) -> Html {
    let Some(winner) = props.winner.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div class={styles::themed(props.dark_mode, styles::MODAL_LIGHT, styles::MODAL_DARK)} onclick={stop}>
                <button
                    onclick={close}
                    class="absolute top-4 right-4 text-gray-500 hover:text-gray-700 transition-colors"
                    aria-label="Close"
                >
                    {"✕"}
                </button>
                <h2 class="text-2xl font-bold mb-4 text-center">{"🎉 Winner! 🎉"}</h2>
                <p class={classes!(
                    "text-3xl",
                    "font-bold",
                    "text-center",
                    "break-all",
                    if props.dark_mode { "text-purple-400" } else { "text-purple-600" }
                )}>
                    {winner.clone()}
                </p>
            </div>
        </div>
    }
}
