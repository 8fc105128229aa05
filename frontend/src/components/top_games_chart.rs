use shared::OwnedGame;
use yew::prelude::*;

use crate::components::chart_renderer::{ChartConfig, ChartData, ChartRenderer, ChartType, DataPoint};

pub const NO_TOP_GAMES_MESSAGE: &str = "No top games data available.";

/// Bar chart of whole hours played per game, or `None` without games.
pub fn top_games_chart_data(games: &[OwnedGame]) -> Option<ChartData> {
    if games.is_empty() {
        return None;
    }

    Some(ChartData {
        chart_type: ChartType::Bar,
        config: ChartConfig {
            title: "Top 5 Games by Playtime".to_string(),
            series_label: "Playtime (Hours)".to_string(),
            width: 640,
            height: 360,
            colors: vec!["rgba(75, 192, 192, 0.6)".to_string()],
            border_color: Some("rgba(75, 192, 192, 1)".to_string()),
            show_legend: true,
        },
        points: games
            .iter()
            .map(|game| DataPoint::new(game.name.clone(), game.hours_played() as f64))
            .collect(),
    })
}

#[derive(Properties, PartialEq)]
pub struct TopGamesChartProps {
    pub games: Vec<OwnedGame>,
}

#[function_component(TopGamesChart)]
pub fn top_games_chart(props: &TopGamesChartProps) -> Html {
    match top_games_chart_data(&props.games) {
        Some(chart) => html! {
            <div class="top-games-chart my-4">
                <ChartRenderer {chart} chart_id="top-games" />
            </div>
        },
        None => html! { <p class="section-empty text-gray-600">{NO_TOP_GAMES_MESSAGE}</p> },
    }
}
