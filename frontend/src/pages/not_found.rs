use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404 - Page Not Found"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::TutorProfile}>{"Back to your profile"}</Link<Route>>
        </div>
    }
}
