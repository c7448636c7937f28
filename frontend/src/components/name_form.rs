use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NameFormProps {
    pub dark_mode: bool,
    pub disabled: bool,
    /// Emits the raw input, returns whether the name was accepted.
    pub on_add: Callback<String, bool>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(NameForm)]
pub fn name_form(props: &NameFormProps) -> Html {
    let new_name = use_state(String::new);

    let oninput = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let onsubmit = {
        let new_name = new_name.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if on_add.emit((*new_name).clone()) {
                new_name.set(String::new());
            }
        })
    };

    html! {
        <>
            <form {onsubmit} class={styles::FORM}>
                <input
                    type="text"
                    value={(*new_name).clone()}
                    {oninput}
                    placeholder="Enter a name"
                    disabled={props.disabled}
                    class={styles::themed(props.dark_mode, styles::INPUT_LIGHT, styles::INPUT_DARK)}
                />
                <button type="submit" disabled={props.disabled} class={styles::BUTTON_PRIMARY}>
                    {"+ Add"}
                </button>
            </form>
            if let Some(error) = &props.error {
                <p class={styles::TEXT_ERROR}>{error.clone()}</p>
            }
        </>
    }
}
