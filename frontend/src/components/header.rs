use shared::StatusCounts;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub counts: StatusCounts,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <div class="header-title">
                    <span class="header-logo">{"💒"}</span>
                    <h1>{"Mariage - Gestion des Invités"}</h1>
                </div>
                <div class="header-summary">
                    {props.counts.summary()}
                </div>
            </div>
        </header>
    }
}
