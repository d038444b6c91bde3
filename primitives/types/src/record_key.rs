//! Resolver record keys.
//!
//! The resolver stores key/value records against a name identifier. Only
//! the keys below are accepted by the deployed resolver, so they are
//! modelled as a closed enum rather than free-form strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TypesError;

/// Allow-listed resolver record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKey {
    /// Ethereum address
    #[serde(rename = "eth")]
    Eth,
    /// Bitcoin address
    #[serde(rename = "btc")]
    Btc,
    /// Polkadot address
    #[serde(rename = "dot")]
    Dot,
    /// NFT reference
    #[serde(rename = "nft")]
    Nft,
    /// IPv4 address
    #[serde(rename = "ipv4")]
    Ipv4,
    /// IPv6 address
    #[serde(rename = "ipv6")]
    Ipv6,
    /// Nostr public key
    #[serde(rename = "nostr")]
    Nostr,
    /// Canonical name alias
    #[serde(rename = "cname")]
    Cname,
    /// Content hash
    #[serde(rename = "contenthash")]
    ContentHash,
    /// Contact e-mail
    #[serde(rename = "profile.email")]
    ProfileEmail,
    /// Homepage URL
    #[serde(rename = "profile.url")]
    ProfileUrl,
    /// Avatar URL
    #[serde(rename = "profile.avatar")]
    ProfileAvatar,
    /// Free-form description
    #[serde(rename = "profile.description")]
    ProfileDescription,
    /// Twitter handle
    #[serde(rename = "social.twitter")]
    SocialTwitter,
    /// GitHub handle
    #[serde(rename = "social.github")]
    SocialGithub,
}

impl RecordKey {
    /// Every key the resolver accepts, in registry order.
    pub const ALL: [RecordKey; 15] = [
        RecordKey::Eth,
        RecordKey::Btc,
        RecordKey::Dot,
        RecordKey::Nft,
        RecordKey::Ipv4,
        RecordKey::Ipv6,
        RecordKey::Nostr,
        RecordKey::Cname,
        RecordKey::ContentHash,
        RecordKey::ProfileEmail,
        RecordKey::ProfileUrl,
        RecordKey::ProfileAvatar,
        RecordKey::ProfileDescription,
        RecordKey::SocialTwitter,
        RecordKey::SocialGithub,
    ];

    /// Get the on-chain string form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::Eth => "eth",
            RecordKey::Btc => "btc",
            RecordKey::Dot => "dot",
            RecordKey::Nft => "nft",
            RecordKey::Ipv4 => "ipv4",
            RecordKey::Ipv6 => "ipv6",
            RecordKey::Nostr => "nostr",
            RecordKey::Cname => "cname",
            RecordKey::ContentHash => "contenthash",
            RecordKey::ProfileEmail => "profile.email",
            RecordKey::ProfileUrl => "profile.url",
            RecordKey::ProfileAvatar => "profile.avatar",
            RecordKey::ProfileDescription => "profile.description",
            RecordKey::SocialTwitter => "social.twitter",
            RecordKey::SocialGithub => "social.github",
        }
    }
}

impl FromStr for RecordKey {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| TypesError::UnknownRecordKey(s.to_string()))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_every_listed_key() {
        for key in RecordKey::ALL {
            assert_eq!(key.as_str().parse::<RecordKey>(), Ok(key));
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!(
            "ETH".parse::<RecordKey>(),
            Err(TypesError::UnknownRecordKey("ETH".to_string()))
        );
        assert!("profile".parse::<RecordKey>().is_err());
        assert!("social.mastodon".parse::<RecordKey>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&RecordKey::SocialTwitter).expect("serialize");
        assert_eq!(json, "\"social.twitter\"");
        let key: RecordKey = serde_json::from_str("\"contenthash\"").expect("deserialize");
        assert_eq!(key, RecordKey::ContentHash);
    }
}
