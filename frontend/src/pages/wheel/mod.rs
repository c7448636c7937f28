mod wheel_utils;
mod wheel_view;

use shared::wheel_view::WheelFrame;
use yew::prelude::*;

pub use wheel_utils::{ResultPopup, SpinButton};
pub use wheel_view::WheelView;

#[derive(Properties, PartialEq)]
pub struct WheelSpinnerProps {
    pub frame: WheelFrame,
    pub dark_mode: bool,
    pub can_spin: bool,
    pub on_spin: Callback<()>,
}

#[function_component(WheelSpinner)]
pub fn wheel_spinner(props: &WheelSpinnerProps) -> Html {
    let onclick = {
        let on_spin = props.on_spin.clone();
        Callback::from(move |_: MouseEvent| on_spin.emit(()))
    };

    html! {
        <div class="relative flex flex-col items-center w-full max-w-xs sm:max-w-md sm:mb-8">
            <div class="w-full aspect-square">
                <WheelView frame={props.frame.clone()} dark_mode={props.dark_mode} />
            </div>
            <SpinButton
                is_spinning={props.frame.spinning}
                can_spin={props.can_spin}
                {onclick}
            />
        </div>
    }
}
