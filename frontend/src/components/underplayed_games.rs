use shared::UnderplayedGame;
use yew::prelude::*;

use crate::components::game_card::{GameCard, GameCardView};

pub const NO_UNDERPLAYED_MESSAGE: &str = "No underplayed highly-rated games found.";

/// Cards for rarely played, well rated games. The icon is left out when the
/// payload has no token for it.
pub fn underplayed_game_cards(games: &[UnderplayedGame]) -> Vec<GameCard> {
    games
        .iter()
        .map(|game| GameCard {
            name: game.name.clone(),
            icon_url: game.icon_url(),
            details: vec![
                format!("Playtime: {:.2} hours", game.playtime_hours),
                format!("Rating: {}/100", game.rating),
            ],
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct UnderplayedGamesProps {
    pub games: Vec<UnderplayedGame>,
}

#[function_component(UnderplayedGames)]
pub fn underplayed_games(props: &UnderplayedGamesProps) -> Html {
    if props.games.is_empty() {
        return html! { <div class="section-empty text-gray-600">{NO_UNDERPLAYED_MESSAGE}</div> };
    }

    html! {
        <section class="underplayed-games mb-6">
            <h3 class="text-xl font-bold mb-2">{"Underplayed Highly-Rated Games"}</h3>
            <div class="game-grid game-grid-wide grid gap-4">
                { for underplayed_game_cards(&props.games).into_iter().map(|card| html! {
                    <GameCardView {card} class={classes!("underplayed-card")} />
                })}
            </div>
        </section>
    }
}
