use shared::{StatusCounts, TableOccupancy};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub counts: StatusCounts,
    pub occupancy: Vec<TableOccupancy>,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    variant: &'static str,
    icon: &'static str,
    label: &'static str,
    value: usize,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.variant)}>
            <span class="stat-icon">{props.icon}</span>
            <div>
                <p class="stat-label">{props.label}</p>
                <p class="stat-value">{props.value.to_string()}</p>
            </div>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let counts = &props.counts;

    html! {
        <section class="dashboard">
            <div class="stat-grid">
                <StatCard variant="total" icon="👥" label="Total Invités" value={counts.total} />
                <StatCard variant="confirmed" icon="✓" label="Confirmés" value={counts.confirmed} />
                <StatCard variant="pending" icon="?" label="En attente" value={counts.pending} />
                <StatCard variant="assigned" icon="📍" label="Placés" value={counts.assigned} />
            </div>

            <div class="table-summary">
                <h3>{"Résumé par table"}</h3>
                <div class="table-summary-grid">
                    {for props.occupancy.iter().map(|table| {
                        // Over-full tables overflow the track on purpose
                        let width = format!("width: {:.1}%", table.percent());

                        html! {
                            <div key={table.table_id.to_string()} class="table-summary-card">
                                <div class="table-summary-header">
                                    <h4>{&table.name}</h4>
                                    <span class="table-summary-count">
                                        {format!("{}/{}", table.seated, table.capacity)}
                                    </span>
                                </div>
                                <div class="occupancy-bar">
                                    <div class="occupancy-fill" style={width}></div>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
