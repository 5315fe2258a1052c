use leptos::{either::Either, prelude::*};

use crate::interaction::{FieldKind, FieldSpec, PageEvent, CONTACT_FIELDS};

use super::dispatch::use_dispatcher;

#[component]
pub fn ContactForm() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let sending = dispatcher.memo(|c| c.is_sending());
    let label = dispatcher.memo(|c| c.form().submit_label());
    view! {
        <form
            id="contact-form"
            class="max-w-2xl mx-auto mt-12 px-4 space-y-6"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                dispatcher.send(PageEvent::Submit);
            }
        >
            {CONTACT_FIELDS.iter().map(|spec| view! { <Field spec /> }).collect_view()}
            <button
                type="submit"
                class="w-full px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 disabled:opacity-50"
                disabled=move || sending.get()
            >
                {move || label.get()}
            </button>
        </form>
    }
}

#[component]
fn Field(spec: &'static FieldSpec) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let name = spec.name;
    let error = dispatcher.memo(move |c| c.form().error(name).map(|e| e.to_string()));
    let value = dispatcher.memo(move |c| c.form().value(name).unwrap_or_default().to_string());
    let on_input = move |ev: leptos::ev::Event| {
        dispatcher.send(PageEvent::FieldInput {
            field: name.to_string(),
            value: event_target_value(&ev),
        })
    };
    let on_blur =
        move |_: leptos::ev::FocusEvent| dispatcher.send(PageEvent::FieldBlur(name.to_string()));
    let input_class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground";

    view! {
        <div class="form-group" class:error=move || error.with(Option::is_some)>
            <label for=name class="block mb-2 font-medium">
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            {match spec.kind {
                FieldKind::TextArea => {
                    Either::Left(
                        view! {
                            <textarea
                                id=name
                                name=name
                                rows="5"
                                required=spec.required
                                class=input_class
                                prop:value=move || value.get()
                                on:input=on_input
                                on:blur=on_blur
                            ></textarea>
                        },
                    )
                }
                kind => {
                    let input_type = if kind == FieldKind::Email { "email" } else { "text" };
                    Either::Right(
                        view! {
                            <input
                                id=name
                                name=name
                                type=input_type
                                required=spec.required
                                class=input_class
                                prop:value=move || value.get()
                                on:input=on_input
                                on:blur=on_blur
                            />
                        },
                    )
                }
            }}
            <span
                class="error-message block mt-1 text-sm text-red"
                style:display=move || if error.with(Option::is_some) { "block" } else { "none" }
            >
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}
