use tutor_shared::ProfileField;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::tutor_profile::view::FieldView;

#[derive(Properties, PartialEq)]
pub struct ProfileFieldsProps {
    pub fields: Vec<FieldView>,
    pub on_input: Callback<(ProfileField, String)>,
}

#[function_component(ProfileFields)]
pub fn profile_fields(props: &ProfileFieldsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 my-6">
            {props.fields.iter().map(|view| {
                let field = view.field;
                let body = if view.as_input {
                    let on_input = props.on_input.clone();
                    html! {
                        <input
                            type={view.input_type}
                            name={field.input_name()}
                            value={view.value.clone()}
                            oninput={Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                on_input.emit((field, input.value()));
                            })}
                            class={classes!(
                                "w-full", "px-3", "py-2", "border", "rounded-md",
                                if view.invalid { "border-red-500" } else { "border-gray-300" }
                            )}
                        />
                    }
                } else {
                    html! { <span class="text-gray-900">{&view.value}</span> }
                };

                html! {
                    <div key={field.input_name()} class="flex items-center gap-2">
                        <label class="font-medium text-gray-700">{view.label}</label>
                        {body}
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
