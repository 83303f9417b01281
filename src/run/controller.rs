//! Run controller
//!
//! Mediates exactly one in-flight submission at a time and translates remote
//! outcomes into the output surface's text. One trigger cycle performs, in
//! order: clear output → disable affordance → dispatch → (suspend) →
//! interpret response → render output → re-enable affordance.
//!
//! The Running phase is held by a `BusyGuard`: its `Drop` re-enables the
//! trigger affordance and restores the ready caption, so every path out of
//! the cycle — success, reported failure, transport failure — finalizes the
//! same way and no new error path can leave the controller stuck.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlButtonElement, HtmlElement, Request, RequestInit, Response};

use crate::api::helpers::describe_js_value;
use crate::config::PaneConfig;
use crate::error::PaneError;
use crate::run::outcome::RunOutcome;
use crate::run::protocol::{RunRequest, RunResponse};
use crate::run::state::RunGate;

pub struct RunController {
    button: HtmlButtonElement,
    output: HtmlElement,
    config: PaneConfig,
    gate: RunGate,
}

impl RunController {
    pub fn new(button: HtmlButtonElement, output: HtmlElement, config: PaneConfig) -> Self {
        Self {
            button,
            output,
            config,
            gate: RunGate::new(),
        }
    }

    pub fn config(&self) -> &PaneConfig {
        &self.config
    }

    /// The trigger affordance element (for listener wiring)
    pub fn button(&self) -> &HtmlButtonElement {
        &self.button
    }

    pub fn is_running(&self) -> bool {
        self.gate.is_running()
    }

    /// Start one run cycle for the given snapshot. A trigger while a cycle
    /// is in flight is a no-op: the affordance is inert and the gate refuses
    /// a second programmatic entry.
    pub fn trigger(self: Rc<Self>, request: RunRequest) {
        let guard = match BusyGuard::acquire(Rc::clone(&self)) {
            Some(guard) => guard,
            None => {
                log::debug!("run trigger ignored: cycle already in flight");
                return;
            }
        };

        log::debug!(
            "run triggered: {} bytes, lineCount={:?}",
            request.code.len(),
            request.line_count
        );

        let controller = self;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match controller.dispatch(&request).await {
                Ok(response) => RunOutcome::from_response(response),
                Err(err) => RunOutcome::failure(describe_js_value(&err)),
            };
            guard.settle(&outcome);
        });
    }

    /// POST the snapshot to the submission endpoint and decode the JSON
    /// body. Any rejection along the way surfaces as the transport error the
    /// caller renders.
    async fn dispatch(&self, request: &RunRequest) -> Result<RunResponse, JsValue> {
        let body = request.to_json().map_err(JsValue::from)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let fetch_request = Request::new_with_str_and_init(&self.config.endpoint, &init)?;
        fetch_request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window()
            .ok_or(PaneError::NoWindow)
            .map_err(JsValue::from)?;
        let response_value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
        let response: Response = response_value.dyn_into()?;
        let json = JsFuture::from(response.json()?).await?;

        serde_wasm_bindgen::from_value(json)
            .map_err(|e| JsValue::from_str(&format!("response decode failed: {}", e)))
    }
}

/// Scoped Running phase. Acquisition performs the cycle's entry effects in
/// their fixed order; release (on drop) re-enables the affordance and
/// restores its ready caption.
struct BusyGuard {
    controller: Rc<RunController>,
}

impl BusyGuard {
    fn acquire(controller: Rc<RunController>) -> Option<Self> {
        if !controller.gate.try_begin() {
            return None;
        }

        controller.output.set_text_content(Some(""));
        controller.button.set_disabled(true);
        controller
            .button
            .set_inner_html(&controller.config.busy_caption);

        Some(Self { controller })
    }

    /// Render the settled outcome, then release on drop.
    fn settle(self, outcome: &RunOutcome) {
        if outcome.is_failure() {
            log::warn!("run settled with failure");
        } else {
            log::debug!("run settled successfully");
        }
        let text = outcome.render(self.controller.config.verbosity);
        self.controller.output.set_text_content(Some(&text));
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.controller.button.set_disabled(false);
        self.controller
            .button
            .set_inner_html(&self.controller.config.ready_caption);
        self.controller.gate.finish();
    }
}
