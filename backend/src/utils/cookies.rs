use std::time::Duration;

pub const SESSION_COOKIE_NAME: &str = "panel_session";
pub const SESSION_COOKIE_PATH: &str = "/";

/// Builds the Set-Cookie value for a freshly created session.
pub fn build_session_cookie(value: &str, max_age: Duration) -> String {
    format!(
        "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSION_COOKIE_NAME,
        value,
        SESSION_COOKIE_PATH,
        max_age.as_secs()
    )
}

/// Builds the Set-Cookie value that clears the session cookie on logout.
pub fn build_clear_session_cookie() -> String {
    format!(
        "{}=; Path={}; Max-Age=0; HttpOnly; SameSite=Lax",
        SESSION_COOKIE_NAME, SESSION_COOKIE_PATH
    )
}

pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}
