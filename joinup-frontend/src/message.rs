use joinup_frontend_api as api;

/// Visual style of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient feedback reporting the outcome of a signup or unregister
/// action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// The currently displayed status message.
///
/// Every message carries a token. The auto-hide timer scheduled for a
/// message has to present that token to [`Self::expire`], so a timer
/// belonging to a superseded message can never hide its successor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    current: Option<StatusMessage>,
    token: u64,
}

impl MessageLog {
    /// Displays `message`, superseding the current one. Returns the token
    /// the auto-hide timer has to pass to [`Self::expire`].
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.token += 1;
        self.current = Some(message);
        self.token
    }

    /// Hides the message `token` belongs to, if it is still displayed.
    pub fn expire(&mut self, token: u64) {
        if self.token == token {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

/// Maps an API error to its user-facing text: the server-provided detail
/// (or its generic stand-in) for structured errors, a fixed per-operation
/// fallback for transport failures.
pub fn error_message(err: &api::Error, transport_fallback: &str) -> String {
    match err {
        api::Error::Api(response) => response
            .detail
            .clone()
            .unwrap_or_else(|| api::DEFAULT_ERROR_DETAIL.to_string()),
        api::Error::Fetch(_) => transport_fallback.to_string(),
    }
}
