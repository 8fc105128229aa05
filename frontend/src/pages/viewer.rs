use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::api::steam::fetch_steam_data;
use crate::components::report_sections::ReportSections;
use crate::state::{plan_submission, ViewerAction, ViewerState};

pub const LOADING_MESSAGE: &str = "Fetching data, please wait...";

/// The whole page: SteamID form, request lifecycle, and report sections.
#[function_component(SteamViewer)]
pub fn steam_viewer() -> Html {
    let state = use_reducer(ViewerState::default);
    // Source of submission generations; outlives renders so two quick
    // submissions never share one.
    let next_generation = use_mut_ref(|| 0u64);

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ViewerAction::InputChanged(input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let next_generation = next_generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let generation = {
                let mut counter = next_generation.borrow_mut();
                *counter += 1;
                *counter
            };

            let (action, query) = plan_submission(&state.identifier, generation);
            state.dispatch(action);

            if let Some(query) = query {
                let dispatcher = state.dispatcher();
                spawn_local(async move {
                    let result = fetch_steam_data(&query).await;
                    debug!("Submission {} settled (ok: {})", generation, result.is_ok());
                    dispatcher.dispatch(ViewerAction::Settled { generation, result });
                });
            }
        })
    };

    html! {
        <div class="steam-viewer max-w-5xl mx-auto my-8 px-4">
            <h1 class="text-3xl font-bold text-center text-gray-800">{"Steam Data Viewer"}</h1>

            <form onsubmit={on_submit} class="text-center mb-6">
                <label for="steam-id" class="text-lg text-gray-600">
                    {"Enter SteamID: "}
                    <input
                        id="steam-id"
                        type="text"
                        class="ml-2 p-2 border border-gray-300 rounded"
                        value={state.identifier.clone()}
                        oninput={on_input}
                    />
                </label>
                <button type="submit" class="ml-4 px-4 py-2 bg-blue-600 text-white rounded cursor-pointer">
                    {"Fetch Data"}
                </button>
            </form>

            if state.loading {
                <div class="loading text-center mt-4">
                    <p class="text-lg text-gray-600">{LOADING_MESSAGE}</p>
                    <div class="spinner mx-auto"></div>
                </div>
            }

            if let Some(error) = &state.error {
                <p class="error text-center text-red-600">{error.clone()}</p>
            }

            if let Some(report) = &state.report {
                <ReportSections
                    report={report.clone()}
                    steam_id={state.submitted.clone().unwrap_or_default()}
                />
            }
        </div>
    }
}
