use backend::{DropZone, GuestBook};
use shared::{Guest, GuestId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TablePlannerProps {
    pub book: GuestBook,
    pub on_pick_up: Callback<GuestId>,
    pub on_drop: Callback<DropZone>,
}

#[derive(Properties, PartialEq)]
struct GuestChipProps {
    guest: Guest,
    seated: bool,
    on_pick_up: Callback<GuestId>,
}

/// Draggable guest name; 🥗 marks dietary notes
#[function_component(GuestChip)]
fn guest_chip(props: &GuestChipProps) -> Html {
    let ondragstart = {
        let guest_id = props.guest.id;
        let on_pick_up = props.on_pick_up.clone();
        Callback::from(move |e: DragEvent| {
            if let Some(transfer) = e.data_transfer() {
                transfer.set_effect_allowed("move");
                // Firefox will not start a drag without a payload
                if let Err(err) = transfer.set_data("text/plain", &guest_id.to_string()) {
                    log::debug!("Drag payload not set for guest {}: {:?}", guest_id, err);
                }
            }
            on_pick_up.emit(guest_id);
        })
    };

    let guest = &props.guest;
    html! {
        <div
            class={classes!("guest-chip", if props.seated { "seated" } else { "pool" })}
            draggable="true"
            {ondragstart}
        >
            {guest.full_name()}
            if guest.has_dietary_notes() {
                if props.seated {
                    <span class="dietary-marker">{"🥗"}</span>
                } else {
                    <div class="dietary-notes">{format!("🥗 {}", guest.dietary_notes)}</div>
                }
            }
        </div>
    }
}

fn on_drag_over() -> Callback<DragEvent> {
    Callback::from(|e: DragEvent| {
        e.prevent_default();
        if let Some(transfer) = e.data_transfer() {
            transfer.set_drop_effect("move");
        }
    })
}

fn on_drop_into(zone: DropZone, on_drop: &Callback<DropZone>) -> Callback<DragEvent> {
    let on_drop = on_drop.clone();
    Callback::from(move |e: DragEvent| {
        e.prevent_default();
        on_drop.emit(zone);
    })
}

#[function_component(TablePlanner)]
pub fn table_planner(props: &TablePlannerProps) -> Html {
    let book = &props.book;
    let unassigned = book.unassigned_guests();

    html! {
        <section class="table-planner">
            <div class="section-header">
                <h2>{"Plan de Table"}</h2>
            </div>

            <div class="planner-layout">
                <div class="unassigned-pool">
                    <h3>{format!("Invités non assignés ({})", unassigned.len())}</h3>
                    <div
                        class="drop-zone"
                        ondragover={on_drag_over()}
                        ondrop={on_drop_into(DropZone::Unassigned, &props.on_drop)}
                    >
                        {for unassigned.into_iter().map(|guest| html! {
                            <GuestChip
                                key={guest.id.to_string()}
                                guest={guest.clone()}
                                seated={false}
                                on_pick_up={props.on_pick_up.clone()}
                            />
                        })}
                    </div>
                </div>

                <div class="planner-canvas">
                    {for book.tables().iter().zip(book.table_occupancy()).map(|(table, occupancy)| {
                        let style = format!(
                            "left: {}px; top: {}px; width: 200px; min-height: 150px;",
                            table.position.x, table.position.y
                        );

                        html! {
                            <div
                                key={table.id.to_string()}
                                class="table-card"
                                {style}
                                ondragover={on_drag_over()}
                                ondrop={on_drop_into(DropZone::Table(table.id), &props.on_drop)}
                            >
                                <div class="table-card-header">
                                    <h4>{&table.name}</h4>
                                    <p class="table-card-count">
                                        {format!("{}/{} places", occupancy.seated, occupancy.capacity)}
                                    </p>
                                </div>
                                <div class="table-card-guests">
                                    {for book.guests_at_table(table.id).into_iter().map(|guest| html! {
                                        <GuestChip
                                            key={guest.id.to_string()}
                                            guest={guest.clone()}
                                            seated={true}
                                            on_pick_up={props.on_pick_up.clone()}
                                        />
                                    })}
                                </div>
                                if occupancy.is_full() {
                                    <div class="table-full-warning">{"⚠️ Table complète"}</div>
                                }
                            </div>
                        }
                    })}
                </div>
            </div>

            <div class="planner-hint">
                <p>
                    {"💡 "}<strong>{"Astuce :"}</strong>
                    {" Glissez-déposez les invités entre les tables ou vers la zone \"non assignés\" pour les réorganiser facilement."}
                </p>
            </div>
        </section>
    }
}
