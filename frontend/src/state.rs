use std::rc::Rc;

use log::{debug, info, warn};
use shared::{ProfileReport, SteamDataQuery, ViewerError};
use yew::prelude::*;

/// Everything the viewer page shows, replaced wholesale on every action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    /// Current contents of the SteamID input
    pub identifier: String,
    /// SteamID of the latest submission that issued a request
    pub submitted: Option<String>,
    pub report: Option<Rc<ProfileReport>>,
    pub error: Option<String>,
    pub loading: bool,
    /// Generation of the latest submission; results tagged otherwise are stale
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub enum ViewerAction {
    InputChanged(String),
    /// A submission was refused before any request went out.
    Rejected { generation: u64, error: ViewerError },
    /// A request for `identifier` is now in flight.
    Started { generation: u64, identifier: String },
    /// The request of `generation` settled.
    Settled {
        generation: u64,
        result: Result<ProfileReport, ViewerError>,
    },
}

impl ViewerState {
    pub fn is_stale(&self, generation: u64) -> bool {
        generation != self.generation
    }

    /// Applies one action, returning the next state.
    pub fn apply(&self, action: ViewerAction) -> Self {
        match action {
            ViewerAction::InputChanged(identifier) => Self {
                identifier,
                ..self.clone()
            },
            ViewerAction::Rejected { generation, error } => {
                debug!("Submission {} rejected: {}", generation, error);
                Self {
                    error: Some(error.to_string()),
                    loading: false,
                    generation,
                    ..self.clone()
                }
            }
            ViewerAction::Started {
                generation,
                identifier,
            } => {
                info!("Submission {} started for SteamID {}", generation, identifier);
                Self {
                    submitted: Some(identifier),
                    report: None,
                    error: None,
                    loading: true,
                    generation,
                    ..self.clone()
                }
            }
            ViewerAction::Settled { generation, .. } if self.is_stale(generation) => {
                warn!(
                    "Discarding result of submission {} (latest is {})",
                    generation, self.generation
                );
                self.clone()
            }
            ViewerAction::Settled { result, .. } => match result {
                Ok(report) => Self {
                    report: Some(Rc::new(report)),
                    error: None,
                    loading: false,
                    ..self.clone()
                },
                Err(error) => {
                    warn!("Submission {} failed: {:?}", self.generation, error);
                    Self {
                        report: None,
                        error: Some(error.to_string()),
                        loading: false,
                        ..self.clone()
                    }
                }
            },
        }
    }
}

/// Decides what a submission of `identifier` does.
///
/// Returns the action to dispatch and, when a request must go out, the query
/// for it. An empty identifier never produces a query.
pub fn plan_submission(identifier: &str, generation: u64) -> (ViewerAction, Option<SteamDataQuery>) {
    match SteamDataQuery::checked(identifier) {
        Ok(query) => (
            ViewerAction::Started {
                generation,
                identifier: query.steamid.clone(),
            },
            Some(query),
        ),
        Err(error) => (ViewerAction::Rejected { generation, error }, None),
    }
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::GenreDistribution;

    fn report() -> ProfileReport {
        ProfileReport {
            owned_games: vec![],
            recommendations: vec!["Hades".to_string()],
            total_playtime_hours: 1.5,
            top_games: vec![],
            genre_distribution: GenreDistribution::new(),
            underplayed_games: vec![],
            friends_count: None,
            top_game_achievements: vec![],
        }
    }

    fn started(generation: u64) -> ViewerState {
        ViewerState::default().apply(ViewerAction::Started {
            generation,
            identifier: "76561198210669612".to_string(),
        })
    }

    #[test]
    fn test_start_clears_previous_outcome_and_sets_loading() {
        let previous = ViewerState {
            report: Some(Rc::new(report())),
            error: Some("old".to_string()),
            ..Default::default()
        };
        let state = previous.apply(ViewerAction::Started {
            generation: 1,
            identifier: "123".to_string(),
        });

        assert!(state.loading);
        assert_eq!(state.report, None);
        assert_eq!(state.error, None);
        assert_eq!(state.submitted.as_deref(), Some("123"));
    }

    #[test]
    fn test_success_stores_report_and_clears_loading() {
        let state = started(1).apply(ViewerAction::Settled {
            generation: 1,
            result: Ok(report()),
        });

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.report.as_deref(), Some(&report()));
    }

    #[test]
    fn test_api_error_message_is_shown_verbatim() {
        let state = started(1).apply(ViewerAction::Settled {
            generation: 1,
            result: Err(ViewerError::Api("X".to_string())),
        });

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("X"));
        assert_eq!(state.report, None);
    }

    #[test]
    fn test_rejection_keeps_report() {
        let with_report = started(1).apply(ViewerAction::Settled {
            generation: 1,
            result: Ok(report()),
        });
        let state = with_report.apply(ViewerAction::Rejected {
            generation: 2,
            error: ViewerError::MissingSteamId,
        });

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Please enter a SteamID"));
        assert!(state.report.is_some());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let state = started(1).apply(ViewerAction::Started {
            generation: 2,
            identifier: "second".to_string(),
        });
        let after_stale = state.apply(ViewerAction::Settled {
            generation: 1,
            result: Ok(report()),
        });

        assert_eq!(after_stale, state);
        assert!(after_stale.loading);

        let settled = after_stale.apply(ViewerAction::Settled {
            generation: 2,
            result: Err(ViewerError::Transport("offline".to_string())),
        });
        assert!(!settled.loading);
        assert_eq!(settled.error.as_deref(), Some("Error fetching data."));
    }

    #[test]
    fn test_rejection_supersedes_in_flight_request() {
        let state = started(1).apply(ViewerAction::Rejected {
            generation: 2,
            error: ViewerError::MissingSteamId,
        });
        let after = state.apply(ViewerAction::Settled {
            generation: 1,
            result: Ok(report()),
        });

        assert!(!after.loading);
        assert_eq!(after.report, None);
    }

    #[test]
    fn test_empty_identifier_plans_no_request() {
        let (action, query) = plan_submission("", 3);
        assert!(query.is_none());
        assert!(matches!(
            action,
            ViewerAction::Rejected {
                generation: 3,
                error: ViewerError::MissingSteamId
            }
        ));
    }

    #[test]
    fn test_identifier_plans_exactly_one_request() {
        let (action, query) = plan_submission("76561198210669612", 4);
        assert_eq!(query.map(|q| q.steamid).as_deref(), Some("76561198210669612"));
        assert!(matches!(action, ViewerAction::Started { generation: 4, .. }));
    }

    #[test]
    fn test_input_change_does_not_touch_outcome() {
        let state = started(1).apply(ViewerAction::InputChanged("765".to_string()));
        assert_eq!(state.identifier, "765");
        assert!(state.loading);
        assert_eq!(state.submitted.as_deref(), Some("76561198210669612"));
    }
}
