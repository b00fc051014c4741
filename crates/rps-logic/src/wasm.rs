//! WASM bindings for the browser page

#![cfg(feature = "wasm")]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{resolve_str, DynSession, GameError, Move, Session, SessionConfig};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn js_error(e: GameError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// One page's game session
#[wasm_bindgen]
pub struct WasmSession {
    inner: DynSession,
}

#[wasm_bindgen]
impl WasmSession {
    /// Light theme, opponent drawn from `crypto.getRandomValues`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        WasmSession { inner: Session::from_config(&SessionConfig::default()) }
    }

    /// Build from a JSON config, e.g. `{"theme": "dark", "seed": [..32 bytes..]}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<WasmSession, JsError> {
        let config = SessionConfig::from_json(config_json).map_err(js_error)?;
        Ok(WasmSession { inner: Session::from_config(&config) })
    }

    /// Play a move by id (`"rock"`, `"paper"`, `"scissors"`).
    ///
    /// # Returns
    /// `{player_move, opponent_move, verdict, score}`
    pub fn play(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let outcome = self.inner.play_str(player_move).map_err(js_error)?;
        to_js(&outcome)
    }

    /// Returns the zeroed score.
    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.inner.reset())
    }

    /// Returns the new theme id.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        self.inner.toggle_theme().id().to_string()
    }

    /// `{score, last_round, theme}`; `last_round` is null before the first round.
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.state())
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Verdict id for two move ids.
#[wasm_bindgen(js_name = resolveMoves)]
pub fn resolve_moves(player: &str, opponent: &str) -> Result<String, JsError> {
    resolve_str(player, opponent)
        .map(|v| v.id().to_string())
        .map_err(js_error)
}

#[derive(Serialize)]
struct MoveInfo {
    id: &'static str,
    label: &'static str,
}

/// Moves in button order with their labels.
#[wasm_bindgen(js_name = moveCatalog)]
pub fn move_catalog() -> Result<JsValue, JsError> {
    let moves: Vec<MoveInfo> = Move::ALL
        .iter()
        .map(|m| MoveInfo { id: m.id(), label: m.label() })
        .collect();
    to_js(&moves)
}
