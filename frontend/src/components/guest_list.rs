use backend::{GuestBook, TableAssignment};
use shared::{DraftField, GuestDraft, GuestId, GuestStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::forms::add_guest_form::AddGuestForm;

#[derive(Properties, PartialEq)]
pub struct GuestListProps {
    pub book: GuestBook,
    pub draft: GuestDraft,
    pub add_form_visible: bool,
    pub on_show_add_form: Callback<()>,
    pub on_cancel_add_form: Callback<()>,
    pub on_edit_draft: Callback<(DraftField, String)>,
    pub on_submit_draft: Callback<()>,
    pub on_status_change: Callback<(GuestId, GuestStatus)>,
    pub on_delete: Callback<GuestId>,
}

fn status_class(status: GuestStatus) -> &'static str {
    match status {
        GuestStatus::Confirmed => "status-badge confirmed",
        GuestStatus::Declined => "status-badge declined",
        GuestStatus::Invited => "status-badge invited",
    }
}

fn assignment_class(assignment: &TableAssignment<'_>) -> &'static str {
    match assignment {
        TableAssignment::Table(_) => "guest-table",
        TableAssignment::Unassigned => "guest-table unassigned",
        TableAssignment::Unknown(_) => "guest-table unknown",
    }
}

#[function_component(GuestList)]
pub fn guest_list(props: &GuestListProps) -> Html {
    let on_show = props.on_show_add_form.reform(|_: MouseEvent| ());

    html! {
        <section class="guest-list">
            <div class="section-header">
                <h2>{"Liste des Invités"}</h2>
                <button class="btn btn-primary" onclick={on_show}>
                    {"Ajouter un invité"}
                </button>
            </div>

            if props.add_form_visible {
                <AddGuestForm
                    draft={props.draft.clone()}
                    on_edit={props.on_edit_draft.clone()}
                    on_submit={props.on_submit_draft.clone()}
                    on_cancel={props.on_cancel_add_form.clone()}
                />
            }

            <div class="table-container">
                <table class="guests-table">
                    <thead>
                        <tr>
                            <th>{"Nom"}</th>
                            <th>{"Email"}</th>
                            <th>{"Statut"}</th>
                            <th>{"Table"}</th>
                            <th>{"Régime"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.book.guests().iter().map(|guest| {
                            let id = guest.id;
                            let assignment = props.book.table_assignment(guest);

                            let on_status_change = props.on_status_change.clone();
                            let onchange = Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                match select.value().parse::<GuestStatus>() {
                                    Ok(status) => on_status_change.emit((id, status)),
                                    Err(err) => log::warn!("{}", err),
                                }
                            });
                            let on_delete = props.on_delete.reform(move |_: MouseEvent| id);

                            html! {
                                <tr key={id.to_string()}>
                                    <td class="guest-name">{guest.full_name()}</td>
                                    <td class="guest-email">{&guest.email}</td>
                                    <td>
                                        <select class={status_class(guest.status)} {onchange}>
                                            {for GuestStatus::ALL.iter().map(|status| html! {
                                                <option
                                                    value={status.as_str()}
                                                    selected={*status == guest.status}
                                                >
                                                    {status.label()}
                                                </option>
                                            })}
                                        </select>
                                    </td>
                                    <td class={assignment_class(&assignment)}>
                                        {assignment.label().to_string()}
                                    </td>
                                    <td class="guest-dietary">
                                        {if guest.has_dietary_notes() { guest.dietary_notes.as_str() } else { "-" }}
                                    </td>
                                    <td>
                                        <button class="btn-delete" title="Supprimer" onclick={on_delete}>
                                            {"🗑"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
