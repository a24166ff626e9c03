use yew::prelude::*;

mod clipboard;
mod config;
mod home;
mod styles;

use crate::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class={styles::BG_PAGE}>
            <Home />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
