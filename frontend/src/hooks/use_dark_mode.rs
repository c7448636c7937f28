use gloo_events::EventListener;
use web_sys::{window, MediaQueryList};
use yew::prelude::*;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, PartialEq)]
pub struct DarkMode {
    pub enabled: bool,
    pub toggle: Callback<()>,
}

fn color_scheme_query() -> Option<MediaQueryList> {
    window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

#[hook]
pub fn use_dark_mode() -> DarkMode {
    let enabled = use_state(|| color_scheme_query().map(|q| q.matches()).unwrap_or(false));

    // Follow the system preference while the page is open
    {
        let enabled = enabled.clone();
        use_effect_with((), move |_| {
            let listener = color_scheme_query().map(|query| {
                let target = query.clone();
                EventListener::new(&query, "change", move |_| {
                    enabled.set(target.matches());
                })
            });

            move || drop(listener)
        });
    }

    // Tailwind's `dark:` variants key off a class on <html>
    use_effect_with(*enabled, |enabled| {
        let root = gloo::utils::document().document_element();
        if let Some(root) = root {
            let classes = root.class_list();
            let result = if *enabled { classes.add_1("dark") } else { classes.remove_1("dark") };
            if let Err(e) = result {
                log::warn!("Failed to update color scheme class: {:?}", e);
            }
        }
        || ()
    });

    let toggle = {
        let enabled = enabled.clone();
        Callback::from(move |_| enabled.set(!*enabled))
    };

    DarkMode {
        enabled: *enabled,
        toggle,
    }
}
