use shared::ActiveTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabNavProps {
    pub active_tab: ActiveTab,
    pub on_select: Callback<ActiveTab>,
}

#[function_component(TabNav)]
pub fn tab_nav(props: &TabNavProps) -> Html {
    html! {
        <nav class="tab-nav">
            <div class="container">
                {for ActiveTab::ALL.iter().map(|&tab| {
                    let class = if tab == props.active_tab { "tab active" } else { "tab" };
                    let onclick = props.on_select.reform(move |_: MouseEvent| tab);

                    html! {
                        <button key={tab.id()} {class} {onclick}>
                            <span class="tab-icon">{tab.icon()}</span>
                            {tab.label()}
                        </button>
                    }
                })}
            </div>
        </nav>
    }
}
