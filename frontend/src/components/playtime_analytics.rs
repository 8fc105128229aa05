use shared::{BucketEntry, OwnedGame};
use yew::prelude::*;

use crate::components::game_card::{hours_caption, GameCard, GameCardView};
use crate::components::genre_distribution_chart::GenreDistributionChart;
use crate::components::top_games_chart::TopGamesChart;

pub fn total_playtime_label(hours: f64) -> String {
    format!("Total Playtime: {:.2} hours", hours)
}

pub fn top_game_cards(games: &[OwnedGame]) -> Vec<GameCard> {
    games
        .iter()
        .map(|game| GameCard {
            name: game.name.clone(),
            icon_url: Some(game.icon_url()),
            details: vec![hours_caption(game.hours_played())],
        })
        .collect()
}

/// Text rows of the genre list, e.g. "Action: 12 games".
pub fn genre_lines(buckets: &[BucketEntry]) -> Vec<String> {
    buckets
        .iter()
        .map(|bucket| format!("{}: {} games", bucket.label, bucket.value))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PlaytimeAnalyticsProps {
    pub total_playtime_hours: f64,
    pub top_games: Vec<OwnedGame>,
    /// Top genres plus "Others"; the list and the pie chart share them.
    pub genre_buckets: Vec<BucketEntry>,
}

#[function_component(PlaytimeAnalytics)]
pub fn playtime_analytics(props: &PlaytimeAnalyticsProps) -> Html {
    let buckets = &props.genre_buckets;

    html! {
        <section class="playtime-analytics p-4 mb-6">
            <h3 class="text-xl font-bold">{total_playtime_label(props.total_playtime_hours)}</h3>

            <h4 class="text-lg font-semibold mt-4">{"Top 5 Games by Playtime:"}</h4>
            <ul class="top-games flex flex-wrap list-none p-0">
                { for top_game_cards(&props.top_games).into_iter().map(|card| html! {
                    <li class="m-2"><GameCardView {card} class={classes!("top-game-card")} /></li>
                })}
            </ul>
            <TopGamesChart games={props.top_games.clone()} />

            <h4 class="text-lg font-semibold mt-4">{"Game Genres Distribution:"}</h4>
            if !buckets.is_empty() {
                <ul class="genre-list list-disc pl-6">
                    { for genre_lines(buckets).into_iter().map(|line| html! { <li>{line}</li> }) }
                </ul>
            }
            <GenreDistributionChart buckets={buckets.clone()} />
        </section>
    }
}
