use shared::OwnedGame;
use yew::prelude::*;

use crate::components::game_card::{hours_caption, GameCard, GameCardView};

pub const NO_GAMES_MESSAGE: &str = "No games found.";

/// One card per owned game, in payload order.
pub fn owned_game_cards(games: &[OwnedGame]) -> Vec<GameCard> {
    games
        .iter()
        .map(|game| GameCard {
            name: game.name.clone(),
            icon_url: Some(game.icon_url()),
            details: vec![hours_caption(game.hours_played())],
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct OwnedGamesProps {
    pub games: Vec<OwnedGame>,
}

#[function_component(OwnedGames)]
pub fn owned_games(props: &OwnedGamesProps) -> Html {
    if props.games.is_empty() {
        return html! { <p class="section-empty text-gray-600">{NO_GAMES_MESSAGE}</p> };
    }

    html! {
        <section class="owned-games mb-6">
            <h3 class="text-xl font-bold mb-2">{"Your Owned Games"}</h3>
            <div class="game-grid grid gap-4">
                { for owned_game_cards(&props.games).into_iter().map(|card| html! {
                    <GameCardView {card} />
                })}
            </div>
        </section>
    }
}
