pub mod chart_renderer;
pub mod game_card;
pub mod genre_distribution_chart;
pub mod owned_games;
pub mod playtime_analytics;
pub mod recommendations;
pub mod report_header;
pub mod report_sections;
pub mod top_games_chart;
pub mod underplayed_games;
