//! Browser entry points. The page renders whatever document these return and
//! alerts `message` on a rejection.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{LANDMARK_COL, LANDMARK_ROW, LANDMARK_SPAN, SessionOptions};
use crate::session::Session;
use crate::store::LocalStorageStore;
use crate::types::Landmark;

static SESSION: Lazy<Mutex<Session<LocalStorageStore>>> = Lazy::new(|| {
    let options = SessionOptions::default();
    let store = LocalStorageStore::new(options.storage_key.clone());
    Mutex::new(Session::open_or_default(store, options))
});

#[derive(Serialize)]
struct ErrorView<'a> {
    kind: &'a str,
    message: String,
}

fn error_value(kind: &str, message: impl ToString) -> JsValue {
    let view = ErrorView {
        kind,
        message: message.to_string(),
    };
    serde_wasm_bindgen::to_value(&view).unwrap_or_else(|_| JsValue::from_str(&view.message))
}

/// Options become `null` rather than `undefined`, matching the stored JSON.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| error_value("serialize", format!("failed to serialize state: {e}")))
}

fn with_session<R>(
    f: impl FnOnce(&mut Session<LocalStorageStore>) -> Result<R, JsValue>,
) -> Result<R, JsValue> {
    let mut session = SESSION
        .lock()
        .map_err(|_| error_value("session", "session lock poisoned"))?;
    f(&mut session)
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsValue> {
    with_session(|session| to_js(&session.state()))
}

#[wasm_bindgen]
pub fn apply_move(row: i32, col: i32) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let document = session
            .apply_move(row, col)
            .map_err(|err| error_value(err.kind(), &err))?;
        to_js(&document)
    })
}

#[wasm_bindgen]
pub fn reset() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let document = session.reset().map_err(|err| error_value("storage", &err))?;
        to_js(&document)
    })
}

#[wasm_bindgen]
pub fn save() -> Result<(), JsValue> {
    with_session(|session| session.save().map_err(|err| error_value("storage", &err)))
}

#[wasm_bindgen]
pub fn load() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let document = session.load().map_err(|err| error_value("storage", &err))?;
        to_js(&document)
    })
}

/// Where to draw the Town Hall overlay.
#[wasm_bindgen]
pub fn landmark() -> Result<JsValue, JsValue> {
    to_js(&Landmark {
        row: LANDMARK_ROW,
        col: LANDMARK_COL,
        span: LANDMARK_SPAN,
    })
}
