//! Transport strategy of the active connection
//!
//! Some operations only exist on a duplex connection, so callers consult the
//! strategy before issuing them instead of letting the server reject them.

/// Transport mode of a SurrealDB connection
///
/// # Examples
///
/// ```
/// use surql_types::Strategy;
///
/// assert!(Strategy::WebSocket.supports_live());
/// assert!(!Strategy::Http.supports_live());
/// assert_eq!(Strategy::default(), Strategy::WebSocket);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Duplex WebSocket session (`ws://`, `wss://`)
    ///
    /// Supports live queries and JSON patches.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "ws"))]
    WebSocket,

    /// Stateless HTTP request/response (`http://`, `https://`)
    Http,
}

impl Strategy {
    /// Returns `true` if live subscriptions can be opened under this strategy
    #[inline]
    #[must_use]
    pub const fn supports_live(&self) -> bool {
        matches!(self, Strategy::WebSocket)
    }

    /// Returns `true` if `UPDATE ... PATCH` can be issued under this strategy
    #[inline]
    #[must_use]
    pub const fn supports_patch(&self) -> bool {
        matches!(self, Strategy::WebSocket)
    }

    /// Parse a strategy from a string (case-insensitive)
    ///
    /// Accepts `"ws"`, `"websocket"`, `"wss"` and `"http"`, `"https"`.
    ///
    /// ```
    /// use surql_types::Strategy;
    ///
    /// assert_eq!(Strategy::parse("WS"), Some(Strategy::WebSocket));
    /// assert_eq!(Strategy::parse("https"), Some(Strategy::Http));
    /// assert_eq!(Strategy::parse("grpc"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ws")
            || s.eq_ignore_ascii_case("wss")
            || s.eq_ignore_ascii_case("websocket")
        {
            Some(Strategy::WebSocket)
        } else if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") {
            Some(Strategy::Http)
        } else {
            None
        }
    }

    /// Infer the strategy from a connection url scheme
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let (scheme, _) = url.split_once("://")?;
        Self::parse(scheme)
    }

    /// Short label used in error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strategy::WebSocket => "WS",
            Strategy::Http => "HTTP",
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::parse(s).ok_or(StrategyParseError)
    }
}

/// Error returned when parsing an unknown strategy string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParseError;

impl core::fmt::Display for StrategyParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown connection strategy")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StrategyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!(Strategy::parse("ws"), Some(Strategy::WebSocket));
        assert_eq!(Strategy::parse("WSS"), Some(Strategy::WebSocket));
        assert_eq!(Strategy::parse("WebSocket"), Some(Strategy::WebSocket));
        assert_eq!(Strategy::parse("http"), Some(Strategy::Http));
        assert_eq!(Strategy::parse("HTTPS"), Some(Strategy::Http));
        assert_eq!(Strategy::parse(""), None);
        assert!("tcp".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_from_url() {
        assert_eq!(
            Strategy::from_url("ws://localhost:8000/rpc"),
            Some(Strategy::WebSocket)
        );
        assert_eq!(
            Strategy::from_url("https://cloud.surrealdb.com"),
            Some(Strategy::Http)
        );
        assert_eq!(Strategy::from_url("localhost:8000"), None);
    }

    #[test]
    fn test_strategy_capabilities() {
        assert!(Strategy::WebSocket.supports_patch());
        assert!(!Strategy::Http.supports_patch());
        assert_eq!(Strategy::Http.to_string(), "HTTP");
        assert_eq!(Strategy::WebSocket.to_string(), "WS");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_strategy_serde() {
        let parsed: Strategy = serde_json::from_str("\"http\"").unwrap();
        assert_eq!(parsed, Strategy::Http);
        let parsed: Strategy = serde_json::from_str("\"ws\"").unwrap();
        assert_eq!(parsed, Strategy::WebSocket);
    }
}
