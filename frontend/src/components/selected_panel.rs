use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SelectedPanelProps {
    pub selected: Vec<String>,
    pub dark_mode: bool,
    pub locked: bool,
    pub on_reset: Callback<()>,
}

#[function_component(SelectedPanel)]
pub fn selected_panel(props: &SelectedPanelProps) -> Html {
    let on_reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let item_class = styles::themed(props.dark_mode, styles::LIST_ITEM_LIGHT, styles::LIST_ITEM_DARK);

    html! {
        <div class={styles::themed(props.dark_mode, styles::CARD_LIGHT, styles::CARD_DARK)}>
            <div class={styles::CARD_HEADER}>
                <h2 class={styles::CARD_TITLE}>{format!("Selected Names ({})", props.selected.len())}</h2>
                <button
                    onclick={on_reset}
                    class={styles::BUTTON_RESET_TEXT}
                    disabled={props.locked || props.selected.is_empty()}
                    aria-label="Reset game"
                >
                    {"Reset"}
                </button>
            </div>
            <div class={styles::LIST}>
                {for props.selected.iter().enumerate().map(|(index, name)| html! {
                    <div key={index} class={item_class}>
                        <span class="break-all">{name.clone()}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
