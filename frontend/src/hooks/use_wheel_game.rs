use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::wheel_view::WheelFrame;
use shared::WheelGame;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::wheel_geometry;

type SharedGame = Rc<RefCell<WheelGame<SmallRng>>>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

#[derive(Clone)]
pub struct WheelGameHandle {
    pub frame: WheelFrame,
    pub names: Vec<String>,
    pub selected: Vec<String>,
    pub spinning: bool,
    /// Names cannot change until the last result is acknowledged.
    pub locked: bool,
    pub can_spin: bool,
    pub error: Option<String>,
    /// Emits `true` when the name was added.
    pub add_name: Callback<String, bool>,
    pub remove_name: Callback<usize>,
    pub clear_names: Callback<()>,
    /// Emits `true` when a new spin started.
    pub spin: Callback<(), bool>,
    pub acknowledge: Callback<()>,
    pub reset: Callback<()>,
}

// Redraws on every animation frame until the wheel stops.
fn schedule_frame(slot: FrameSlot, game: SharedGame, now: UseStateHandle<f64>) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_| {
        now.set(js_sys::Date::now());
        if game.borrow().is_spinning() {
            schedule_frame(next_slot, game, now);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

#[hook]
pub fn use_wheel_game(on_spin_complete: Callback<String>) -> WheelGameHandle {
    let game: SharedGame = use_mut_ref(|| WheelGame::new(SmallRng::from_entropy()));
    let frame_slot: FrameSlot = use_mut_ref(|| None);
    let now = use_state(js_sys::Date::now);
    let error = use_state(|| None::<String>);
    let force_update = use_force_update();

    // Stop drawing frames once the wheel is gone
    {
        let frame_slot = frame_slot.clone();
        use_effect_with((), move |_| {
            move || {
                frame_slot.borrow_mut().take();
            }
        });
    }

    let spin = {
        let game = game.clone();
        let frame_slot = frame_slot.clone();
        let now = now.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let started = game.borrow_mut().request_spin(js_sys::Date::now());
            if !started {
                return false;
            }
            error.set(None);
            now.set(js_sys::Date::now());
            schedule_frame(frame_slot.clone(), game.clone(), now.clone());

            let mut wait_ms = game.borrow().spin_duration_ms().max(0.0) as u32;
            let game = game.clone();
            let frame_slot = frame_slot.clone();
            let now = now.clone();
            let on_spin_complete = on_spin_complete.clone();

            spawn_local(async move {
                // Timers may fire a little before the clock agrees the spin is over
                let winner = loop {
                    TimeoutFuture::new(wait_ms).await;
                    let at = js_sys::Date::now();
                    let mut current = game.borrow_mut();
                    if let Some(winner) = current.animation_complete(at) {
                        break Some(winner);
                    }
                    if !current.is_spinning() {
                        break None;
                    }
                    wait_ms = current.spin_remaining_ms(at).ceil().max(1.0) as u32;
                };
                frame_slot.borrow_mut().take();
                now.set(js_sys::Date::now());
                if let Some(winner) = winner {
                    on_spin_complete.emit(winner);
                }
            });
            true
        })
    };

    let add_name = {
        let game = game.clone();
        let error = error.clone();
        let force_update = force_update.clone();
        Callback::from(move |raw: String| {
            let result = game.borrow_mut().add_name(&raw);
            match result {
                Ok(()) => {
                    error.set(None);
                    force_update.force_update();
                    true
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    false
                }
            }
        })
    };

    let remove_name = {
        let game = game.clone();
        let error = error.clone();
        let force_update = force_update.clone();
        Callback::from(move |index: usize| {
            let result = game.borrow_mut().remove_name_at(index);
            match result {
                Ok(_) => force_update.force_update(),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let clear_names = {
        let game = game.clone();
        let error = error.clone();
        let force_update = force_update.clone();
        Callback::from(move |_| {
            let result = game.borrow_mut().clear_names();
            match result {
                Ok(()) => force_update.force_update(),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let acknowledge = {
        let game = game.clone();
        let force_update = force_update.clone();
        Callback::from(move |_| {
            let winner = game.borrow_mut().acknowledge_winner();
            if let Some(winner) = winner {
                log::info!("{} removed from the wheel.", winner);
            }
            force_update.force_update();
        })
    };

    let reset = {
        let game = game.clone();
        let error = error.clone();
        let force_update = force_update.clone();
        Callback::from(move |_| {
            let result = game.borrow_mut().reset();
            match result {
                Ok(()) => {
                    error.set(None);
                    force_update.force_update();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let current = game.borrow();
    WheelGameHandle {
        frame: current.frame(wheel_geometry(), *now),
        names: current.names().to_vec(),
        selected: current.selected().to_vec(),
        spinning: current.is_spinning(),
        locked: current.names_locked(),
        can_spin: current.can_spin(),
        error: (*error).clone(),
        add_name,
        remove_name,
        clear_names,
        spin,
        acknowledge,
        reset,
    }
}
