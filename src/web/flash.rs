//! One-shot flash messages
//!
//! Post/redirect/get feedback: the handler that performs an action sets
//! the flash cookie, the next page render consumes and clears it. The
//! success variant is displayed for a fixed duration before the page
//! script hides it again.

use serde::Serialize;

/// Cookie key carrying the pending flash message
pub const FLASH_COOKIE: &str = "flash";

/// How long a success indication stays visible, in milliseconds
pub const SUCCESS_DISPLAY_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashKind::Success),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

/// A pending feedback message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// `Set-Cookie` value carrying this message to the next render
    pub fn set_cookie(&self) -> String {
        format!(
            "{FLASH_COOKIE}={}:{}; Path=/; SameSite=Lax",
            self.kind.as_str(),
            urlencoding::encode(&self.message)
        )
    }

    /// `Set-Cookie` value consuming the message
    pub fn clear_cookie() -> String {
        format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; SameSite=Lax")
    }

    /// Read the pending message from a `Cookie` request header
    pub fn from_cookies(header: Option<&str>) -> Option<Flash> {
        let raw = crate::theme::cookie_value(header, FLASH_COOKIE)?;
        let (kind, message) = raw.split_once(':')?;
        Some(Flash {
            kind: FlashKind::from_str(kind)?,
            message: urlencoding::decode(message).ok()?.into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_round_trips_through_cookie() {
        let flash = Flash::success("Enquiry sent. We will call you back!");
        let set = flash.set_cookie();
        let header = set.split(';').next().unwrap().to_string();
        assert_eq!(Flash::from_cookies(Some(&header)), Some(flash));
    }

    #[test]
    fn test_flash_encodes_special_characters() {
        let flash = Flash::error("Failed: retry; later=maybe");
        let header = flash.set_cookie();
        let cookie_pair = header.split(';').next().unwrap().to_string();
        let parsed = Flash::from_cookies(Some(&cookie_pair)).unwrap();
        assert_eq!(parsed.message, "Failed: retry; later=maybe");
    }

    #[test]
    fn test_malformed_flash_is_ignored() {
        assert_eq!(Flash::from_cookies(Some("flash=nonsense")), None);
        assert_eq!(Flash::from_cookies(Some("flash=shout:hello")), None);
        assert_eq!(Flash::from_cookies(None), None);
    }
}
