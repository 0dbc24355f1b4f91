//! WebSocket link-stream client.
//!
//! Opens the stream endpoint for the collection named by the page path,
//! renders each received record into the gallery, and reconnects forever
//! at a fixed interval when the transport drops. Every attempt is a
//! fresh socket with fresh handlers; entries already rendered stay in
//! the DOM across reconnects.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gallery_core::constants::RECONNECT_DELAY_MS;
use gallery_core::{collection_from_path, log_debug, log_info, stream_url, ConnectionState};
use gloo_timers::future::sleep;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use crate::gallery::GalleryRenderer;
use crate::{js_val, log_js};

/// Mutable per-connection state.
///
/// Closures are retained here so the browser does not collect them while
/// the socket is live; replacing them detaches the previous attempt.
struct StreamState {
    status: ConnectionState,
    _on_open: Option<Closure<dyn FnMut()>>,
    _on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _on_error: Option<Closure<dyn FnMut(JsValue)>>,
    _on_close: Option<Closure<dyn FnMut(CloseEvent)>>,
}

/// Context shared between the client handle, the socket callbacks and
/// the reconnect task (single-threaded WASM, so `Rc`/`RefCell`).
struct StreamCtx {
    url: String,
    collection: String,
    renderer: GalleryRenderer,
    state: Rc<RefCell<StreamState>>,
    ws_cell: Rc<RefCell<WebSocket>>,
}

/// Streaming client for one collection's media links.
///
/// Each instance owns its socket handle outright; reconnection swaps a
/// fresh socket into place rather than mutating shared globals.
#[wasm_bindgen]
pub struct LinkStreamClient {
    ctx: Rc<StreamCtx>,
}

#[wasm_bindgen]
impl LinkStreamClient {
    /// Open the link stream for the collection named by the current page
    /// path and start rendering into the gallery container.
    pub fn connect() -> Result<LinkStreamClient, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let location = window.location();
        let path = location.pathname()?;
        let host = location.host()?;
        let secure = location.protocol()? == "https:";

        let collection = collection_from_path(&path)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .to_string();
        let url = stream_url(secure, &host, &collection);

        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let renderer =
            GalleryRenderer::locate(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let ws = WebSocket::new(&url)?;
        let ctx = Rc::new(StreamCtx {
            url,
            collection,
            renderer,
            state: Rc::new(RefCell::new(StreamState {
                status: ConnectionState::Connecting,
                _on_open: None,
                _on_message: None,
                _on_error: None,
                _on_close: None,
            })),
            ws_cell: Rc::new(RefCell::new(ws)),
        });

        install_socket_callbacks(&ctx);
        log_info!("📡 Opening link stream for collection '{}'", ctx.collection);

        Ok(LinkStreamClient { ctx })
    }

    /// Current connection status as a string.
    pub fn status(&self) -> String {
        self.ctx.state.borrow().status.as_str().to_string()
    }

    /// Collection this client streams.
    pub fn collection(&self) -> String {
        self.ctx.collection.clone()
    }

    /// Close the socket and stop reconnecting.
    ///
    /// Rendered gallery entries stay in the DOM.
    pub fn disconnect(&self) {
        self.ctx.state.borrow_mut().status = ConnectionState::Closed;

        // Detach handlers before closing so the dying socket cannot fire
        // into dropped closures
        let ws = self.ctx.ws_cell.borrow();
        ws.set_onopen(None);
        ws.set_onmessage(None);
        ws.set_onerror(None);
        ws.set_onclose(None);
        let _ = ws.close();
        drop(ws);

        let mut state = self.ctx.state.borrow_mut();
        state._on_open = None;
        state._on_message = None;
        state._on_error = None;
        state._on_close = None;
        drop(state);

        log_info!("📡 Link stream closed for collection '{}'", self.ctx.collection);
    }
}

/// Install lifecycle callbacks on the socket currently in `ctx.ws_cell`.
///
/// A free function so the initial connect and every reconnect attempt go
/// through the same wiring.
fn install_socket_callbacks(ctx: &Rc<StreamCtx>) {
    let ws = ctx.ws_cell.borrow();

    // on_open
    let on_open = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move || {
            ctx.state.borrow_mut().status = ConnectionState::Open;
            log_info!("📡 Link stream open: {}", ctx.url);
        }) as Box<dyn FnMut()>)
    };
    ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

    // on_message: render each record line into the gallery, in order
    let on_message = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Some(text) = event.data().as_string() {
                match ctx.renderer.render_message(&text) {
                    Ok(appended) => {
                        if appended > 0 {
                            log_debug!("🖼️ Appended {} gallery entries", appended);
                        }
                    }
                    Err(e) => log_js!("🖼️❌ Failed to render stream message", {
                        "collection" => ctx.collection.as_str(),
                        "error" => js_val!(&e),
                    }),
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>)
    };
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    // on_error: the transport fires close right after error, so
    // reconnection is driven from on_close only
    let on_error = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move |event: JsValue| {
            log_js!("📡❌ Link stream error", {
                "url" => ctx.url.as_str(),
                "event" => js_val!(&event),
            });
        }) as Box<dyn FnMut(JsValue)>)
    };
    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    // on_close: unconditional fixed-delay reconnect unless the user
    // disconnected on purpose
    let on_close = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move |event: CloseEvent| {
            if ctx.state.borrow().status == ConnectionState::Closed {
                return; // user-initiated disconnect
            }

            log_js!("📡 Link stream closed, scheduling reconnect", {
                "code" => event.code(),
                "reason" => event.reason(),
                "delayMs" => RECONNECT_DELAY_MS,
            });

            ctx.state.borrow_mut().status = ConnectionState::Reconnecting;
            schedule_reconnect(ctx.clone());
        }) as Box<dyn FnMut(CloseEvent)>)
    };
    ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    // Store closures to prevent GC
    let mut state = ctx.state.borrow_mut();
    state._on_open = Some(on_open);
    state._on_message = Some(on_message);
    state._on_error = Some(on_error);
    state._on_close = Some(on_close);
}

/// Open a fresh socket after the fixed delay and re-install callbacks.
///
/// Constant backoff, unbounded attempts: the stream never gives up while
/// the page is alive. A `disconnect()` during the delay cancels the
/// attempt. Scheduled as a task rather than recursing through the close
/// handler, so the call stack stays flat no matter how long the server
/// is away.
fn schedule_reconnect(ctx: Rc<StreamCtx>) {
    spawn_local(async move {
        sleep(Duration::from_millis(RECONNECT_DELAY_MS as u64)).await;

        if ctx.state.borrow().status == ConnectionState::Closed {
            return;
        }

        log_info!("📡 Reconnecting link stream: {}", ctx.url);
        match WebSocket::new(&ctx.url) {
            Ok(new_ws) => {
                ctx.state.borrow_mut().status = ConnectionState::Connecting;
                *ctx.ws_cell.borrow_mut() = new_ws;
                install_socket_callbacks(&ctx);
            }
            Err(e) => {
                // Constructor-level failure; normal connect failures
                // surface through on_close instead
                log_js!("📡❌ Reconnect attempt failed", {
                    "url" => ctx.url.as_str(),
                    "error" => js_val!(&e),
                });
                schedule_reconnect(ctx.clone());
            }
        }
    });
}
