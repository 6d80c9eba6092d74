use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_toast::ToastProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod tutor_profile;
pub mod pages {
    pub mod not_found;
    pub mod tutor_profile;
}

use pages::{not_found::NotFound, tutor_profile::TutorProfile};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/tutor/profile")]
    TutorProfile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <main class="app-container bg-[#fff9ea] min-h-screen">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Root => html! { <Redirect<Route> to={Route::TutorProfile} /> },
        Route::TutorProfile => html! { <TutorProfile /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
