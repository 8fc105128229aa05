use yew::prelude::*;

pub fn report_title(steam_id: &str) -> String {
    format!("Data for SteamID: {}", steam_id)
}

/// Summary lines shown under the title, for the optional payload sections.
pub fn report_summary(friends_count: Option<u32>, achievement_progress: Option<(usize, usize)>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(friends) = friends_count {
        lines.push(format!("Friends: {}", friends));
    }
    if let Some((unlocked, total)) = achievement_progress {
        lines.push(format!("Top game: {}/{} achievements unlocked", unlocked, total));
    }
    lines
}

#[derive(Properties, PartialEq)]
pub struct ReportHeaderProps {
    pub steam_id: AttrValue,
    #[prop_or_default]
    pub friends_count: Option<u32>,
    #[prop_or_default]
    pub achievement_progress: Option<(usize, usize)>,
}

#[function_component(ReportHeader)]
pub fn report_header(props: &ReportHeaderProps) -> Html {
    html! {
        <header class="report-header text-center mb-4">
            <h2 class="text-2xl font-bold text-blue-600">{report_title(&props.steam_id)}</h2>
            { for report_summary(props.friends_count, props.achievement_progress).into_iter().map(|line| html! {
                <p class="text-sm text-gray-600">{line}</p>
            })}
        </header>
    }
}
