use yew::prelude::*;

pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found.";

/// How many recommendations the list shows.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// The leading slice of recommendations that gets displayed.
pub fn visible_recommendations(recommendations: &[String]) -> &[String] {
    &recommendations[..recommendations.len().min(MAX_RECOMMENDATIONS)]
}

#[derive(Properties, PartialEq)]
pub struct RecommendationsProps {
    pub recommendations: Vec<String>,
}

#[function_component(Recommendations)]
pub fn recommendations(props: &RecommendationsProps) -> Html {
    let visible = visible_recommendations(&props.recommendations);
    if visible.is_empty() {
        return html! { <div class="section-empty text-gray-600">{NO_RECOMMENDATIONS_MESSAGE}</div> };
    }

    html! {
        <section class="recommendations mb-6">
            <h3 class="text-xl font-bold mb-2">{"Recommended Games:"}</h3>
            <ol class="list-decimal pl-6">
                { for visible.iter().map(|game| html! { <li>{game.clone()}</li> }) }
            </ol>
        </section>
    }
}
