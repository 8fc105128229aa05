use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod state;
pub mod pages {
    pub mod viewer;
}

use pages::viewer::SteamViewer;


#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <main class="app-container">
            <SteamViewer />
        </main>
    }
}

pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    info!("API base URL: {:?}", config::Config::api_base_url());

    // Mount the app
    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Start function that Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
