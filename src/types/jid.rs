use std::fmt;
use std::str::FromStr;

/// Known JID servers on WhatsApp.
pub const DEFAULT_USER_SERVER: &str = "s.whatsapp.net";
pub const GROUP_SERVER: &str = "g.us";
pub const NEWSLETTER_SERVER: &str = "newsletter";
pub const BROADCAST_SERVER: &str = "broadcast";

/// JID represents a WhatsApp user/entity ID (user@server).
///
/// The gateway addresses chats, groups and newsletters with these. Inbound
/// webhook payloads keep JIDs as plain strings so nothing is lost on
/// unusual formats; this type is for request building, where the caller
/// controls the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Jid {
    pub user: String,
    pub server: String,
}

impl Jid {
    /// New JID (user@server).
    pub fn new(user: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            server: server.into(),
        }
    }

    /// User JID on the default server.
    pub fn user(user: impl Into<String>) -> Self {
        Self::new(user, DEFAULT_USER_SERVER)
    }

    /// Group JID.
    pub fn group(id: impl Into<String>) -> Self {
        Self::new(id, GROUP_SERVER)
    }

    /// Newsletter (channel) JID.
    pub fn newsletter(id: impl Into<String>) -> Self {
        Self::new(id, NEWSLETTER_SERVER)
    }

    pub fn is_group(&self) -> bool {
        self.server == GROUP_SERVER
    }

    pub fn is_newsletter(&self) -> bool {
        self.server == NEWSLETTER_SERVER
    }

    pub fn is_broadcast(&self) -> bool {
        self.server == BROADCAST_SERVER
    }
}

impl FromStr for Jid {
    type Err = JidParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('@') {
            None => Ok(Self::new("", s)),
            Some((user, server)) if !server.is_empty() && !server.contains('@') => {
                Ok(Self::new(user, server))
            }
            Some(_) => Err(JidParseError),
        }
    }
}

#[derive(Debug)]
pub struct JidParseError;

impl fmt::Display for JidParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JID format")
    }
}

impl std::error::Error for JidParseError {}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user.is_empty() {
            write!(f, "{}", self.server)
        } else {
            write!(f, "{}@{}", self.user, self.server)
        }
    }
}

impl serde::Serialize for Jid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Jid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Jid::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jid_new_and_display() {
        let j = Jid::user("123456789");
        assert_eq!(j.to_string(), "123456789@s.whatsapp.net");
        assert!(!j.is_group());
    }

    #[test]
    fn jid_parse_roundtrip() {
        let s = "123456789@g.us";
        let j: Jid = s.parse().unwrap();
        assert_eq!(j.user, "123456789");
        assert_eq!(j.server, "g.us");
        assert!(j.is_group());
        assert_eq!(j.to_string(), s);
    }

    #[test]
    fn jid_parse_server_only() {
        let j: Jid = "g.us".parse().unwrap();
        assert_eq!(j.user, "");
        assert_eq!(j.to_string(), "g.us");
    }

    #[test]
    fn jid_parse_rejects_double_at() {
        assert!("a@b@c".parse::<Jid>().is_err());
    }

    #[test]
    fn jid_serde_as_string() {
        let j = Jid::newsletter("abc123");
        let s = serde_json::to_string(&j).unwrap();
        assert_eq!(s, "\"abc123@newsletter\"");
        let back: Jid = serde_json::from_str(&s).unwrap();
        assert_eq!(back, j);
    }
}
