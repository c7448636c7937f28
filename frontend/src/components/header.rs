use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub sound_enabled: bool,
    pub on_toggle_dark_mode: Callback<()>,
    pub on_toggle_sound: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let toggle_sound = {
        let cb = props.on_toggle_sound.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let toggle_dark_mode = {
        let cb = props.on_toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let button_class = styles::themed(props.dark_mode, styles::ICON_BUTTON_LIGHT, styles::ICON_BUTTON_DARK);

    html! {
        <header class={styles::HEADER}>
            <div class="text-center sm:text-left mb-4 sm:mb-0">
                <h1 class={styles::TITLE}>{"Wheelify"}</h1>
                <p class={styles::TEXT_SMALL}>{"Add some names, spin, and let the wheel decide."}</p>
            </div>

            <div class="flex gap-2 sm:gap-4 items-center">
                <button
                    onclick={toggle_sound}
                    class={button_class}
                    aria-label={if props.sound_enabled { "Mute sound" } else { "Unmute sound" }}
                >
                    {if props.sound_enabled { "🔊" } else { "🔇" }}
                </button>
                <button
                    onclick={toggle_dark_mode}
                    class={button_class}
                    aria-label={if props.dark_mode { "Switch to light mode" } else { "Switch to dark mode" }}
                >
                    {if props.dark_mode { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}
