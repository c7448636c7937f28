use yew::prelude::*;

use crate::components::{Header, NameForm, NameListPanel, SelectedPanel};
use crate::hooks::{use_dark_mode, use_sound, use_wheel_game};
use crate::pages::wheel::{ResultPopup, WheelSpinner};
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let dark_mode = use_dark_mode();
    let sound = use_sound();
    let winner = use_state(|| None::<String>);

    let on_spin_complete = {
        let winner = winner.clone();
        let play_win = sound.play_win.clone();
        Callback::from(move |name: String| {
            winner.set(Some(name));
            play_win.emit(());
        })
    };
    let game = use_wheel_game(on_spin_complete);

    let on_spin = {
        let spin = game.spin.clone();
        let play_spin = sound.play_spin.clone();
        Callback::from(move |_| {
            if spin.emit(()) {
                play_spin.emit(());
            }
        })
    };

    let on_winner_close = {
        let winner = winner.clone();
        let acknowledge = game.acknowledge.clone();
        Callback::from(move |_| {
            acknowledge.emit(());
            winner.set(None);
        })
    };

    let on_reset = {
        let winner = winner.clone();
        let reset = game.reset.clone();
        Callback::from(move |_| {
            reset.emit(());
            winner.set(None);
        })
    };

    html! {
        <div class={styles::themed(dark_mode.enabled, styles::PAGE_LIGHT, styles::PAGE_DARK)}>
            <div class={styles::CONTAINER}>
                <Header
                    dark_mode={dark_mode.enabled}
                    sound_enabled={sound.enabled}
                    on_toggle_dark_mode={dark_mode.toggle.clone()}
                    on_toggle_sound={sound.toggle.clone()}
                />

                <main class={styles::MAIN_GRID}>
                    <div class="flex flex-col items-center">
                        <NameForm
                            dark_mode={dark_mode.enabled}
                            disabled={game.locked}
                            on_add={game.add_name.clone()}
                            error={game.error.clone()}
                        />
                        <WheelSpinner
                            frame={game.frame.clone()}
                            dark_mode={dark_mode.enabled}
                            can_spin={game.can_spin}
                            {on_spin}
                        />
                    </div>

                    <div class="space-y-4 sm:space-y-8">
                        <NameListPanel
                            names={game.names.clone()}
                            dark_mode={dark_mode.enabled}
                            locked={game.locked}
                            on_remove={game.remove_name.clone()}
                            on_clear={game.clear_names.clone()}
                        />
                        <SelectedPanel
                            selected={game.selected.clone()}
                            dark_mode={dark_mode.enabled}
                            locked={game.spinning}
                            {on_reset}
                        />
                    </div>
                </main>
            </div>

            <ResultPopup
                winner={(*winner).clone()}
                dark_mode={dark_mode.enabled}
                on_close={on_winner_close}
            />
        </div>
    }
}
