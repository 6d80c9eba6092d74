use log::debug;
use tutor_shared::ProfileField;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::HttpTutorApi;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::profile::booking_history::BookingHistory;
use crate::components::profile::profile_fields::ProfileFields;
use crate::config::SaveFailurePolicy;
use crate::tutor_profile::controller;
use crate::tutor_profile::view::PrimaryAction;
use crate::tutor_profile::{MountGuard, TutorProfileAction, TutorProfileState, TutorProfileView};

#[derive(Properties, PartialEq)]
pub struct TutorProfileProps {
    #[prop_or_default]
    pub save_failure_policy: SaveFailurePolicy,
}

#[function_component(TutorProfile)]
pub fn tutor_profile(props: &TutorProfileProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let policy = props.save_failure_policy;
    let state = use_reducer_eq(move || TutorProfileState::new(policy));
    let guard = use_memo((), |_| MountGuard::new());
    let save_in_flight = use_mut_ref(|| false);

    // Two independent fetches on mount; neither waits for the other
    {
        let dispatcher = state.dispatcher();
        let guard = (*guard).clone();
        use_effect_with((), move |_| {
            {
                let dispatcher = dispatcher.clone();
                let guard = guard.clone();
                spawn_local(async move {
                    controller::load_profile(&HttpTutorApi, &guard, |action| dispatcher.dispatch(action)).await;
                });
            }
            {
                let dispatcher = dispatcher.clone();
                let guard = guard.clone();
                spawn_local(async move {
                    controller::load_history(&HttpTutorApi, &guard, |action| dispatcher.dispatch(action)).await;
                });
            }
            move || {
                debug!("Tutor profile unmounted");
                guard.unmount();
            }
        });
    }

    {
        let add_toast = toast_context.add_toast.clone();
        use_effect_with(state.notification.clone(), move |notification| {
            if let Some(notification) = notification {
                add_toast.emit(Toast::from(notification));
            }
            || ()
        });
    }

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TutorProfileAction::BeginEdit))
    };

    let on_field_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (ProfileField, String)| {
            dispatcher.dispatch(TutorProfileAction::SetField { field, value });
        })
    };

    let on_save = {
        let state = state.clone();
        let guard = (*guard).clone();
        let save_in_flight = save_in_flight.clone();
        Callback::from(move |_: MouseEvent| {
            if *save_in_flight.borrow() || !state.mode.accepts_edits() {
                debug!("Save already in progress");
                return;
            }
            *save_in_flight.borrow_mut() = true;

            let store = state.profile.clone();
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(TutorProfileAction::SaveStarted);

            let guard = guard.clone();
            let save_in_flight = save_in_flight.clone();
            spawn_local(async move {
                controller::save_profile(&HttpTutorApi, &guard, store, |action| dispatcher.dispatch(action)).await;
                *save_in_flight.borrow_mut() = false;
            });
        })
    };

    let view = TutorProfileView::project(&state);

    let button = match view.action {
        PrimaryAction::EditProfile => html! {
            <button onclick={on_edit} class="rounded bg-blue-600 text-white px-4 py-2 hover:bg-blue-700">
                {view.action.label()}
            </button>
        },
        PrimaryAction::Save { busy } => html! {
            <button
                onclick={on_save}
                disabled={busy}
                class="rounded bg-green-600 text-white px-4 py-2 hover:bg-green-700 disabled:opacity-50"
            >
                {view.action.label()}
            </button>
        },
    };

    html! {
        <section class="container mx-auto bg-white shadow rounded-lg p-6">
            <h1 class="text-3xl font-bold text-center my-8">{"Tutor Profile"}</h1>
            if view.profile_loading {
                <p class="text-gray-500">{"Loading profile..."}</p>
            }
            <ProfileFields fields={view.fields.clone()} on_input={on_field_input} />
            <BookingHistory rows={view.rows.clone()} loading={view.history_loading} />
            <div class="flex justify-end my-6">
                {button}
            </div>
        </section>
    }
}
