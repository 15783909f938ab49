//! Session cookie lifecycle
//!
//! The session token travels in an HTTP-only cookie named `token`. There is no
//! server-side session record; logout is deletion of the cookie.

use axum::http::HeaderMap;

/// Cookie name carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Build the Set-Cookie value for a fresh session
pub fn session_cookie(token: &str, max_age_hours: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE,
        token,
        max_age_hours * 3600
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the Set-Cookie value that clears the session
pub fn clear_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; HttpOnly; Path=/; SameSite=Strict; Max-Age=0",
        SESSION_COOKIE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Read the session token from request headers.
///
/// The cookie is the primary carrier; a Bearer Authorization header is accepted
/// for API clients.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(cookie_header) = headers.get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                if let Some(token) = cookie.trim().strip_prefix("token=") {
                    if !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
    }

    if let Some(auth_header) = headers.get("Authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123", 24, false);
        assert!(cookie.starts_with("token=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_cookie() {
        let cookie = session_cookie("abc123", 1, true);
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_clear_cookie() {
        let cookie = clear_cookie(false);
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Cookie",
            HeaderValue::from_static("theme=dark; token=abc123; lang=en"),
        );
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer xyz789"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("xyz789"));
    }

    #[test]
    fn test_no_token() {
        let headers = HeaderMap::new();
        assert!(token_from_headers(&headers).is_none());
    }
}
