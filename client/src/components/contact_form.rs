//! Contact section form bound to the page's `ContactState` signal.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactState};

#[component]
pub fn ContactForm(contact: RwSignal<ContactState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if contact.with_untracked(ContactState::submit_disabled) {
            return;
        }
        #[cfg(feature = "hydrate")]
        crate::util::contact_flow::spawn_submit(contact);
    };

    let field_value = move |field: ContactField| contact.with(|s| s.form.get(field).to_owned());
    let set_field = move |field: ContactField, value: String| contact.update(|s| s.update_field(field, value));

    view! {
        <form class="contact-form" on:submit=on_submit>
            <input
                class="contact-input"
                type="text"
                name=ContactField::Name.as_str()
                placeholder="Name"
                required
                prop:value=move || field_value(ContactField::Name)
                on:input=move |ev| set_field(ContactField::Name, event_target_value(&ev))
            />
            <input
                class="contact-input"
                type="email"
                name=ContactField::Email.as_str()
                placeholder="Email"
                required
                prop:value=move || field_value(ContactField::Email)
                on:input=move |ev| set_field(ContactField::Email, event_target_value(&ev))
            />
            <textarea
                class="contact-input contact-input--message"
                name=ContactField::Message.as_str()
                placeholder="Message"
                rows="4"
                required
                prop:value=move || field_value(ContactField::Message)
                on:input=move |ev| set_field(ContactField::Message, event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class=move || contact.with(|s| s.status.button_class())
                disabled=move || contact.with(ContactState::submit_disabled)
            >
                {move || contact.with(|s| s.status.button_label())}
            </button>
        </form>
    }
}
