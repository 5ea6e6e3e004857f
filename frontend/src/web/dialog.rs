//! Blocking native dialogs used by the destructive flows.

/// `window.confirm` — answers `false` when the browser denies the dialog.
pub fn confirmar(mensagem: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(mensagem).ok())
        .unwrap_or(false)
}

/// `window.alert`; used where a failure must block (delete errors).
pub fn alerta(mensagem: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(mensagem);
    }
}
