use std::rc::Rc;

use shared::{ProfileReport, DEFAULT_TOP_N};
use yew::prelude::*;

use crate::components::owned_games::OwnedGames;
use crate::components::playtime_analytics::PlaytimeAnalytics;
use crate::components::recommendations::Recommendations;
use crate::components::report_header::ReportHeader;
use crate::components::underplayed_games::UnderplayedGames;

#[derive(Properties, PartialEq)]
pub struct ReportSectionsProps {
    pub report: Rc<ProfileReport>,
    /// The SteamID the report was requested for.
    pub steam_id: AttrValue,
}

/// Header, owned games, recommendations, analytics and underplayed games,
/// in that order.
#[function_component(ReportSections)]
pub fn report_sections(props: &ReportSectionsProps) -> Html {
    let report = &props.report;

    html! {
        <div class="report mt-8 p-4 bg-gray-50 rounded-lg shadow">
            <ReportHeader
                steam_id={props.steam_id.clone()}
                friends_count={report.friends_count}
                achievement_progress={report.achievement_progress()}
            />
            <OwnedGames games={report.owned_games.clone()} />
            <Recommendations recommendations={report.recommendations.clone()} />
            <PlaytimeAnalytics
                total_playtime_hours={report.total_playtime_hours}
                top_games={report.top_games.clone()}
                genre_buckets={report.genre_buckets(DEFAULT_TOP_N)}
            />
            <UnderplayedGames games={report.underplayed_games.clone()} />
        </div>
    }
}
