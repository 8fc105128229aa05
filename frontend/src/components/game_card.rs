use yew::prelude::*;

/// What a single game tile shows, independent of which section it sits in
#[derive(Clone, Debug, PartialEq)]
pub struct GameCard {
    pub name: String,
    pub icon_url: Option<String>,
    /// Caption lines under the name, in display order
    pub details: Vec<String>,
}

/// "N hours" caption for a whole number of hours.
pub fn hours_caption(hours: u64) -> String {
    format!("{} hours", hours)
}

#[derive(Properties, PartialEq)]
pub struct GameCardViewProps {
    pub card: GameCard,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(GameCardView)]
pub fn game_card_view(props: &GameCardViewProps) -> Html {
    let card = &props.card;
    html! {
        <div class={classes!("game-card", "text-center", "border", "border-gray-200", "rounded-lg", "p-2", "bg-gray-50", props.class.clone())}>
            { if let Some(icon_url) = &card.icon_url {
                html! { <img src={icon_url.clone()} alt={card.name.clone()} class="game-icon mx-auto rounded-lg mb-2" /> }
            } else {
                html! {}
            }}
            <p class="game-name text-xs font-bold my-2">{card.name.clone()}</p>
            { for card.details.iter().map(|line| html! {
                <p class="game-detail text-xs text-gray-600 m-0">{line.clone()}</p>
            })}
        </div>
    }
}
