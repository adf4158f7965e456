//! One-shot flash messages carried across the post/redirect/get cycle.
//!
//! The message is serialized to JSON, base64-encoded and stored in a signed
//! cookie. [`take`] consumes the message: reading it also schedules the
//! cookie's removal, so an acknowledgment is only ever shown once.

use axum_extra::extract::{cookie::Cookie, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use cstt_models::flash::FlashMessage;

const FLASH_COOKIE: &str = "flash";

pub fn push(jar: SignedCookieJar, message: &FlashMessage) -> anyhow::Result<SignedCookieJar> {
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(message)?);
    let mut cookie = Cookie::new(FLASH_COOKIE, payload);
    cookie.set_path("/");
    cookie.set_http_only(true);
    Ok(jar.add(cookie))
}

pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<FlashMessage>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    // A cookie that fails to decode is dropped silently, it is removed from
    // the jar either way.
    let message = URL_SAFE_NO_PAD
        .decode(cookie.value())
        .ok()
        .and_then(|payload| serde_json::from_slice(&payload).ok());

    let mut removal = Cookie::from(FLASH_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), message)
}
