//! JavaScript-facing editor pane component
//!
//! `EditorPane` is built over explicit DOM targets — the textarea, its
//! line-number gutter, the trigger button, and the output region — rather
//! than discovering them by identifier lookup. Several independent panes can
//! coexist on one page, and dropping a pane detaches its listeners.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlTextAreaElement, KeyboardEvent,
};

use crate::api::helpers::{self, describe_js_value};
use crate::config::PaneConfig;
use crate::run::controller::RunController;
use crate::run::protocol::RunRequest;
use crate::text::buffer::{Buffer, SelectionRange};
use crate::text::line_numbers::LineNumberView;

/// The editor surface plus its run controller; shared with event closures.
struct Surface {
    editor: HtmlTextAreaElement,
    line_numbers: HtmlElement,
    controller: Rc<RunController>,
}

impl Surface {
    /// Snapshot the textarea's current contents
    fn buffer(&self) -> Buffer {
        Buffer::from_text(self.editor.value())
    }

    /// Recompute the line-number projection and replace the gutter markup
    fn sync_line_numbers(&self) {
        let view = LineNumberView::derive(&self.buffer());
        self.line_numbers.set_inner_html(&view.to_markup());
    }

    /// Mirror the text region's scroll offset onto the gutter
    fn sync_scroll(&self) {
        self.line_numbers.set_scroll_top(self.editor.scroll_top());
    }

    /// Current caret/selection as the textarea reports it
    fn selection(&self) -> SelectionRange {
        let start = self.editor.selection_start().ok().flatten().unwrap_or(0);
        let end = self.editor.selection_end().ok().flatten().unwrap_or(start);
        SelectionRange::new(start, end)
    }

    /// Splice a tab at the caret (replacing any selection), put the caret
    /// after it, and refresh the gutter.
    fn insert_tab(&self) -> Result<(), JsValue> {
        let mut buffer = self.buffer();
        let caret = buffer.insert_tab(self.selection());
        self.editor.set_value(buffer.text());
        self.editor.set_selection_start(Some(caret))?;
        self.editor.set_selection_end(Some(caret))?;
        self.sync_line_numbers();
        Ok(())
    }

    fn handle_keydown(&self, event: &KeyboardEvent) {
        let key = event.key();
        if key == "Enter" && (event.ctrl_key() || event.meta_key()) {
            event.prevent_default();
            self.trigger_run();
        } else if key == "Tab" {
            // Keep focus in the editor; Tab becomes a literal character
            event.prevent_default();
            if let Err(err) = self.insert_tab() {
                log::error!("tab insert failed: {}", describe_js_value(&err));
            }
        }
    }

    /// Capture a RunRequest snapshot and hand it to the controller
    fn trigger_run(&self) {
        let include_line_count = self.controller.config().includes_line_count();
        let buffer = self.buffer();
        let line_count = include_line_count.then(|| buffer.line_count());
        let request = RunRequest::new(buffer.into_text(), line_count);
        Rc::clone(&self.controller).trigger(request);
    }
}

/// A wired event listener, detached again when the pane drops
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// In-browser code editor pane: synchronized line numbers, Tab/Run-shortcut
/// handling, and a submit-to-service run cycle.
#[wasm_bindgen]
pub struct EditorPane {
    surface: Rc<Surface>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl EditorPane {
    /// Build a pane over explicit element references. `options` may be
    /// undefined; see `PaneConfig` for the accepted keys
    /// (`endpoint`, `verbosity`, `readyCaption`, `busyCaption`).
    ///
    /// The line-number gutter is rendered once on construction so a
    /// pre-populated textarea starts aligned.
    #[wasm_bindgen(constructor)]
    pub fn new(
        editor: HtmlTextAreaElement,
        line_numbers: HtmlElement,
        run_button: HtmlButtonElement,
        output: HtmlElement,
        options: JsValue,
    ) -> Result<EditorPane, JsValue> {
        let config: PaneConfig = if options.is_undefined() || options.is_null() {
            PaneConfig::default()
        } else {
            helpers::deserialize(options, "invalid pane options")?
        };

        log::info!(
            "editor pane created: endpoint={}, verbosity={:?}",
            config.endpoint,
            config.verbosity
        );

        let controller = Rc::new(RunController::new(run_button, output, config));
        let surface = Rc::new(Surface {
            editor,
            line_numbers,
            controller,
        });
        surface.sync_line_numbers();

        Ok(EditorPane {
            surface,
            listeners: Vec::new(),
        })
    }

    /// Wire the pane's listeners: buffer edits and scrolling on the text
    /// region, Tab/Ctrl+Enter key handling, and the trigger button. Calling
    /// attach on an already-attached pane does nothing.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }

        let surface = Rc::clone(&self.surface);
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            surface.sync_line_numbers();
        });
        self.listeners
            .push(Listener::attach(self.surface.editor.as_ref(), "input", on_input)?);

        let surface = Rc::clone(&self.surface);
        let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            surface.sync_scroll();
        });
        self.listeners
            .push(Listener::attach(self.surface.editor.as_ref(), "scroll", on_scroll)?);

        let surface = Rc::clone(&self.surface);
        let on_keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                surface.handle_keydown(key_event);
            }
        });
        self.listeners.push(Listener::attach(
            self.surface.editor.as_ref(),
            "keydown",
            on_keydown,
        )?);

        let surface = Rc::clone(&self.surface);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            surface.trigger_run();
        });
        self.listeners.push(Listener::attach(
            self.surface.controller.button().as_ref(),
            "click",
            on_click,
        )?);

        Ok(())
    }

    /// Recompute the line-number projection from the current buffer
    #[wasm_bindgen(js_name = refreshLineNumbers)]
    pub fn refresh_line_numbers(&self) {
        self.surface.sync_line_numbers();
    }

    /// Programmatic trigger; a no-op while a cycle is in flight
    pub fn run(&self) {
        self.surface.trigger_run();
    }

    /// Current line count of the buffer
    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.surface.buffer().line_count()
    }

    /// Whether a run cycle is currently in flight
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.surface.controller.is_running()
    }

    /// The pane's effective configuration, for inspection from JavaScript
    pub fn config(&self) -> Result<JsValue, JsValue> {
        helpers::serialize(self.surface.controller.config(), "config serialization failed")
    }
}
