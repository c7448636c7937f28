use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::config::{get_asset_url, SPIN_SOUND_PATH, WIN_SOUND_PATH};

#[derive(Clone)]
pub struct Sound {
    pub enabled: bool,
    pub toggle: Callback<()>,
    pub play_spin: Callback<()>,
    pub play_win: Callback<()>,
}

fn load_audio(path: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(&get_asset_url(path)) {
        Ok(audio) => Some(audio),
        Err(e) => {
            log::warn!("Failed to load audio {}: {:?}", path, e);
            None
        }
    }
}

// Playback errors (autoplay policy, missing file) are logged and otherwise ignored
fn play(audio: &HtmlAudioElement) {
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Audio playback failed: {:?}", e);
            }
        }),
        Err(e) => log::warn!("Audio playback failed: {:?}", e),
    }
}

fn play_callback(audio: Rc<Option<HtmlAudioElement>>, enabled: bool) -> Callback<()> {
    Callback::from(move |_| {
        if !enabled {
            return;
        }
        if let Some(audio) = audio.as_ref() {
            play(audio);
        }
    })
}

#[hook]
pub fn use_sound() -> Sound {
    let enabled = use_state(|| true);
    let spin_audio = use_memo((), |_| load_audio(SPIN_SOUND_PATH));
    let win_audio = use_memo((), |_| load_audio(WIN_SOUND_PATH));

    let toggle = {
        let enabled = enabled.clone();
        Callback::from(move |_| enabled.set(!*enabled))
    };

    Sound {
        enabled: *enabled,
        toggle,
        play_spin: play_callback(spin_audio, *enabled),
        play_win: play_callback(win_audio, *enabled),
    }
}
