use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Full page navigation; login and forgot-password may live in another app.
pub fn navigate_to(url: &str) {
    let result = window().and_then(|w| {
        w.location()
            .set_href(url)
            .map_err(|_| format!("Failed to navigate to {}", url))
    });
    if let Err(err) = result {
        log::warn!("{}", err);
    }
}
