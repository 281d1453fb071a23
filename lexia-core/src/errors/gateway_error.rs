/// Generation gateway failure taxonomy. The gateway normalizes all of these
/// to "no result" for generation/translation callers; the variants exist so
/// provider implementations can report what actually happened for logging.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("provider quota exceeded: {detail}")]
    QuotaExceeded { detail: String },

    #[error("provider authentication/permission failure: {reason}")]
    Auth { reason: String },

    #[error("content blocked or malformed: {reason}")]
    Blocked { reason: String },

    #[error("network error talking to provider: {reason}")]
    Network { reason: String },

    #[error("provider returned an empty or unusable response")]
    EmptyResponse,

    #[error("unsupported language code: {code}")]
    UnsupportedLanguage { code: String },
}
