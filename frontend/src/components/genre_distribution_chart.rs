use shared::BucketEntry;
use yew::prelude::*;

use crate::components::chart_renderer::{ChartConfig, ChartData, ChartRenderer, ChartType, DataPoint};

pub const NO_GENRE_DATA_MESSAGE: &str = "No genre data available.";

/// Slice colours; the sixth is reserved for "Others".
pub const GENRE_PALETTE: [&str; 6] = ["#36a2eb", "#ff6384", "#ffce56", "#4bc0c0", "#9966ff", "#c9cbcf"];

/// Pie chart of a bucketed genre distribution, or `None` when it is empty.
pub fn genre_chart_data(buckets: &[BucketEntry]) -> Option<ChartData> {
    if buckets.is_empty() {
        return None;
    }

    Some(ChartData {
        chart_type: ChartType::Pie,
        config: ChartConfig {
            title: "Top 5 Game Genres + Others".to_string(),
            series_label: "Number of Games".to_string(),
            width: 300,
            height: 300,
            colors: GENRE_PALETTE.iter().map(|c| c.to_string()).collect(),
            border_color: None,
            show_legend: true,
        },
        points: buckets
            .iter()
            .map(|bucket| DataPoint::new(bucket.label.clone(), bucket.value as f64))
            .collect(),
    })
}

#[derive(Properties, PartialEq)]
pub struct GenreDistributionChartProps {
    pub buckets: Vec<BucketEntry>,
}

#[function_component(GenreDistributionChart)]
pub fn genre_distribution_chart(props: &GenreDistributionChartProps) -> Html {
    match genre_chart_data(&props.buckets) {
        Some(chart) => html! {
            <div class="genre-chart mx-auto" style="max-width: 300px;">
                <ChartRenderer {chart} chart_id="genres" />
            </div>
        },
        None => html! { <p class="section-empty text-gray-600">{NO_GENRE_DATA_MESSAGE}</p> },
    }
}
