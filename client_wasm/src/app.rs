use crate::assets::Assets;
use crate::input::{Dir, InputState};
use crate::render::Renderer;
use crate::storage::LocalStore;
use crate::{console_error, console_log, hud};
use game_core::{step, Config, GameState, RenderSnapshot, Time};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Nothing ticks until the images have settled
pub enum LoadState {
    Loading,
    Ready(Assets),
}

/// Main client state
pub struct Client {
    game: GameState,
    renderer: Renderer,
    input: InputState,
    load: LoadState,
    last_hud: Option<(u32, u32, u32)>,
}

impl Client {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let renderer = Renderer::new(canvas)?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let game = GameState::new(Config::new(), Box::new(LocalStore::new()), now_ms(), seed);
        console_log!("Echo Shadows ready, best score {}", game.score.best);

        Ok(Self {
            game,
            renderer,
            input: InputState::new(),
            load: LoadState::Loading,
            last_hud: None,
        })
    }

    /// Advance one tick and draw it
    pub fn frame(&mut self, now: f64) -> Result<(), JsValue> {
        let LoadState::Ready(assets) = &self.load else {
            return Ok(());
        };

        let input = self.input.sample();
        step(&mut self.game, &input, Time::new(now));

        let events = &self.game.events;
        if events.restarted {
            console_log!("New run, best {}", self.game.score.best);
        }
        if events.leveled_up {
            console_log!("Level {}", self.game.score.level);
        }
        if events.player_died {
            console_log!(
                "Game over: score {}, best {}",
                self.game.score.score,
                self.game.score.best
            );
        }
        if events.new_best {
            console_log!("New best score: {}", self.game.score.best);
        }

        let snap = self.game.snapshot();
        self.renderer.draw(&snap, assets)?;
        self.sync_dom_hud(&snap);
        Ok(())
    }

    fn sync_dom_hud(&mut self, snap: &RenderSnapshot) {
        let current = (snap.score, snap.best, snap.level);
        if self.last_hud == Some(current) {
            return;
        }
        self.last_hud = Some(current);

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for (id, text) in hud::dom_lines(snap) {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(&text));
            }
        }
    }

    /// Fit the visible canvas to the window, minus the optional top bar
    pub fn resize(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let top = window
            .document()
            .and_then(|d| d.get_element_by_id("topbar"))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0);

        self.renderer
            .resize(width.max(0.0) as u32, (height - top).max(0.0) as u32);
    }

    fn to_logical(&self, x: f64, y: f64) -> glam::Vec2 {
        self.renderer.letterbox().to_logical(x, y)
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        return;
    }

    let promise = navigator.service_worker().register("sw.js");
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => console_log!("Service worker registered"),
            Err(e) => console_error!("Service worker registration failed: {:?}", e),
        }
    });
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Result<R, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Create the client and load assets. The returned promise resolves once
/// the first frame may run.
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let mut client = Client::new(canvas)?;
        client.resize();
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        register_service_worker();

        let assets = Assets::load().await;
        with_client(|client| client.load = LoadState::Ready(assets))?;
        Ok(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen]
pub fn frame(now: f64) -> Result<(), JsValue> {
    with_client(|client| client.frame(now))?
}

#[wasm_bindgen]
pub fn resize() -> Result<(), JsValue> {
    with_client(|client| client.resize())
}

/// Returns true when the key is bound, so JS can call `preventDefault`
#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<bool, JsValue> {
    with_client(|client| client.input.key_down(key))
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<bool, JsValue> {
    with_client(|client| client.input.key_up(key))
}

/// Pointer pressed, in visible-canvas pixels; starts a drag
#[wasm_bindgen]
pub fn pointer_down(x: f64, y: f64) -> Result<(), JsValue> {
    with_client(|client| {
        let point = client.to_logical(x, y);
        client.input.pointer_down(point);
    })
}

/// Pointer moved; ignored unless a drag is in progress
#[wasm_bindgen]
pub fn pointer_move(x: f64, y: f64) -> Result<(), JsValue> {
    with_client(|client| {
        let point = client.to_logical(x, y);
        client.input.pointer_move(point);
    })
}

#[wasm_bindgen]
pub fn pointer_up() -> Result<(), JsValue> {
    with_client(|client| client.input.pointer_up())
}

/// On-screen d-pad: `dir` is one of "up", "down", "left", "right"
#[wasm_bindgen]
pub fn dpad(dir: &str, pressed: bool) -> Result<(), JsValue> {
    let dir = Dir::parse(dir).ok_or_else(|| JsValue::from_str(&format!("Unknown direction: {dir}")))?;
    with_client(|client| client.input.set_dpad(dir, pressed))
}
