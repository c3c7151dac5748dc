mod components;
mod hooks;
mod services;

use log::LevelFilter;
use shared::ActiveTab;
use yew::prelude::*;

use components::dashboard::Dashboard;
use components::guest_list::GuestList;
use components::header::Header;
use components::tab_nav::TabNav;
use components::table_planner::TablePlanner;
use hooks::use_guest_manager::use_guest_manager;
use services::logging::ConsoleLogger;

#[function_component(App)]
fn app() -> Html {
    let planner = use_guest_manager();
    let state = &planner.state;
    let actions = &planner.actions;

    let counts = state.book.status_counts();
    let active_tab = state.session.active_tab();

    let content = match active_tab {
        ActiveTab::Dashboard => html! {
            <Dashboard counts={counts} occupancy={state.book.table_occupancy()} />
        },
        ActiveTab::Guests => html! {
            <GuestList
                book={state.book.clone()}
                draft={state.session.draft().clone()}
                add_form_visible={state.session.is_add_form_visible()}
                on_show_add_form={actions.show_add_form.clone()}
                on_cancel_add_form={actions.cancel_add_form.clone()}
                on_edit_draft={actions.edit_draft.clone()}
                on_submit_draft={actions.submit_draft.clone()}
                on_status_change={actions.update_status.clone()}
                on_delete={actions.delete_guest.clone()}
            />
        },
        ActiveTab::Tables => html! {
            <TablePlanner
                book={state.book.clone()}
                on_pick_up={actions.pick_up.clone()}
                on_drop={actions.drop_on.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header counts={counts} />
            <TabNav active_tab={active_tab} on_select={actions.select_tab.clone()} />
            <main class="main-content">
                {content}
            </main>
        </div>
    }
}

fn main() {
    ConsoleLogger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
