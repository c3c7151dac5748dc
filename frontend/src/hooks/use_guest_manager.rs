use std::rc::Rc;

use backend::{DropZone, GuestBook, GuestManager, PlannerSession};
use shared::{ActiveTab, DraftField, GuestId, GuestStatus};
use yew::prelude::*;

use crate::services::browser_store::BrowserStore;

/// Everything the UI can ask the guest manager to do
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerAction {
    SelectTab(ActiveTab),
    ShowAddForm,
    CancelAddForm,
    EditDraft(DraftField, String),
    SubmitDraft,
    DeleteGuest(GuestId),
    UpdateStatus(GuestId, GuestStatus),
    PickUp(GuestId),
    Drop(DropZone),
}

/// Reducer wrapper so every action applies to the latest manager, even when
/// two events fire before a re-render (drag start followed by drop)
pub struct PlannerState {
    manager: GuestManager<BrowserStore>,
}

impl Reducible for PlannerState {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut manager = self.manager.clone();

        match action {
            PlannerAction::SelectTab(tab) => manager.select_tab(tab),
            PlannerAction::ShowAddForm => manager.show_add_form(),
            PlannerAction::CancelAddForm => manager.cancel_add_form(),
            PlannerAction::EditDraft(field, value) => manager.edit_draft(field, value),
            PlannerAction::SubmitDraft => {
                manager.submit_draft();
            }
            PlannerAction::DeleteGuest(id) => {
                manager.delete_guest(id);
            }
            PlannerAction::UpdateStatus(id, status) => {
                manager.update_guest_status(id, status);
            }
            PlannerAction::PickUp(id) => manager.pick_up(id),
            PlannerAction::Drop(zone) => {
                manager.drop_on(zone);
            }
        }

        Rc::new(Self { manager })
    }
}

#[derive(Clone, PartialEq)]
pub struct GuestManagerState {
    pub book: GuestBook,
    pub session: PlannerSession,
}

#[derive(Clone, PartialEq)]
pub struct UseGuestManagerActions {
    pub select_tab: Callback<ActiveTab>,
    pub show_add_form: Callback<()>,
    pub cancel_add_form: Callback<()>,
    pub edit_draft: Callback<(DraftField, String)>,
    pub submit_draft: Callback<()>,
    pub delete_guest: Callback<GuestId>,
    pub update_status: Callback<(GuestId, GuestStatus)>,
    pub pick_up: Callback<GuestId>,
    pub drop_on: Callback<DropZone>,
}

pub struct UseGuestManagerResult {
    pub state: GuestManagerState,
    pub actions: UseGuestManagerActions,
}

fn dispatcher<T: 'static>(
    planner: &UseReducerHandle<PlannerState>,
    to_action: fn(T) -> PlannerAction,
) -> Callback<T> {
    let planner = planner.clone();
    Callback::from(move |input: T| planner.dispatch(to_action(input)))
}

#[hook]
pub fn use_guest_manager() -> UseGuestManagerResult {
    // Opened once per mount: loads localStorage or seeds it
    let planner = use_reducer(|| PlannerState {
        manager: GuestManager::open(BrowserStore),
    });

    let actions = UseGuestManagerActions {
        select_tab: dispatcher(&planner, PlannerAction::SelectTab),
        show_add_form: dispatcher(&planner, |_: ()| PlannerAction::ShowAddForm),
        cancel_add_form: dispatcher(&planner, |_: ()| PlannerAction::CancelAddForm),
        edit_draft: dispatcher(&planner, |(field, value): (DraftField, String)| {
            PlannerAction::EditDraft(field, value)
        }),
        submit_draft: dispatcher(&planner, |_: ()| PlannerAction::SubmitDraft),
        delete_guest: dispatcher(&planner, PlannerAction::DeleteGuest),
        update_status: dispatcher(&planner, |(id, status): (GuestId, GuestStatus)| {
            PlannerAction::UpdateStatus(id, status)
        }),
        pick_up: dispatcher(&planner, PlannerAction::PickUp),
        drop_on: dispatcher(&planner, PlannerAction::Drop),
    };

    let state = GuestManagerState {
        book: planner.manager.book().clone(),
        session: planner.manager.session().clone(),
    };

    UseGuestManagerResult { state, actions }
}
