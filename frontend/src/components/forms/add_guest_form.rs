use shared::{DraftField, GuestDraft};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddGuestFormProps {
    pub draft: GuestDraft,
    pub on_edit: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Text inputs of the form, in display order
const FIELDS: [(DraftField, &str, &str); 4] = [
    (DraftField::LastName, "text", "Nom"),
    (DraftField::FirstName, "text", "Prénom"),
    (DraftField::Email, "email", "Email"),
    (DraftField::DietaryNotes, "text", "Régime alimentaire"),
];

#[function_component(AddGuestForm)]
pub fn add_guest_form(props: &AddGuestFormProps) -> Html {
    // Incomplete drafts are ignored by the manager; the form stays open as typed
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <section class="add-guest-section">
            <h3>{"Nouvel invité"}</h3>
            <form class="add-guest-form" {onsubmit}>
                <div class="form-grid">
                    {for FIELDS.iter().map(|&(field, input_type, placeholder)| {
                        let on_edit = props.on_edit.clone();
                        let oninput = Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            on_edit.emit((field, input.value()));
                        });

                        html! {
                            <input
                                type={input_type}
                                {placeholder}
                                value={props.draft.field(field).to_string()}
                                {oninput}
                            />
                        }
                    })}
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Ajouter"}</button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Annuler"}
                    </button>
                </div>
            </form>
        </section>
    }
}
