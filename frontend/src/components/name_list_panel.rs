use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NameListPanelProps {
    pub names: Vec<String>,
    pub dark_mode: bool,
    /// Editing is locked while the wheel spins.
    pub locked: bool,
    pub on_remove: Callback<usize>,
    pub on_clear: Callback<()>,
}

#[function_component(NameListPanel)]
pub fn name_list_panel(props: &NameListPanelProps) -> Html {
    let on_clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let item_class = styles::themed(props.dark_mode, styles::LIST_ITEM_LIGHT, styles::LIST_ITEM_DARK);

    html! {
        <div class={styles::themed(props.dark_mode, styles::CARD_LIGHT, styles::CARD_DARK)}>
            <div class={styles::CARD_HEADER}>
                <h2 class={styles::CARD_TITLE}>{format!("Names on Wheel ({})", props.names.len())}</h2>
                <button
                    onclick={on_clear}
                    class={styles::BUTTON_DANGER_TEXT}
                    disabled={props.locked || props.names.is_empty()}
                    aria-label="Clear all names"
                >
                    {"Clear"}
                </button>
            </div>
            <div class={styles::LIST}>
                {for props.names.iter().enumerate().map(|(index, name)| {
                    let on_remove = {
                        let cb = props.on_remove.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(index))
                    };
                    html! {
                        <div key={name.clone()} class={item_class}>
                            <span class="break-all pr-2">{name.clone()}</span>
                            <button
                                onclick={on_remove}
                                class={classes!(styles::BUTTON_DANGER_TEXT, "flex-shrink-0")}
                                disabled={props.locked}
                                aria-label={format!("Remove {}", name)}
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
