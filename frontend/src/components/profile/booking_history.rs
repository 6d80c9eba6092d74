use yew::prelude::*;

use crate::tutor_profile::view::{HistoryRowView, StatusTone, HISTORY_COLUMNS};

#[derive(Properties, PartialEq)]
pub struct BookingHistoryProps {
    pub rows: Vec<HistoryRowView>,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(BookingHistory)]
pub fn booking_history(props: &BookingHistoryProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <h2 class="text-2xl text-black my-6">{"Booking History"}</h2>
            <table class="min-w-full bg-white rounded-lg overflow-hidden">
                <thead class="bg-gray-800 text-white">
                    <tr>
                        {HISTORY_COLUMNS.iter().map(|(key, title)| html! {
                            <th key={*key} class="py-3 px-4">{*title}</th>
                        }).collect::<Html>()}
                    </tr>
                </thead>
                <tbody class="text-gray-700">
                    {props.rows.iter().map(|row| html! {
                        <tr key={row.key.clone()} class="border-b border-gray-200 hover:bg-gray-100">
                            <td class="py-3 px-4">{&row.student_id}</td>
                            <td class="py-3 px-4">{&row.subject}</td>
                            <td class="py-3 px-4">{&row.detail}</td>
                            <td class="py-3 px-4">{&row.date}</td>
                            <td class="py-3 px-4">{&row.time}</td>
                            <td class={classes!("py-3", "px-4", match row.status_tone {
                                StatusTone::Positive => "text-green-600",
                                StatusTone::Negative => "text-red-600",
                            })}>
                                {&row.status}
                            </td>
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
            if props.loading {
                <p class="py-3 px-4 text-gray-500">{"Loading booking history..."}</p>
            }
        </div>
    }
}
