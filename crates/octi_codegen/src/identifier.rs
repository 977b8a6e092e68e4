//! Identifiers for icons, in mixed caps.
use std::collections::HashMap;

use phf::phf_set;

use crate::error::Error;

/// The set of initialisms which stay uppercase in mixed caps.
static INITIALISMS: phf::Set<&'static str> = phf_set! {
    "API",
    "ASCII",
    "CPU",
    "CSS",
    "DNS",
    "EOF",
    "GUID",
    "HTML",
    "HTTP",
    "HTTPS",
    "ID",
    "IP",
    "JSON",
    "LHS",
    "QPS",
    "RAM",
    "RHS",
    "RPC",
    "SLA",
    "SMTP",
    "SQL",
    "SSH",
    "TCP",
    "TLS",
    "TTL",
    "UDP",
    "UI",
    "UID",
    "UUID",
    "URI",
    "URL",
    "UTF8",
    "VM",
    "XML",
    "XSRF",
    "XSS",

    "RSS",
};

/// Identifiers that would shadow names the generated source refers to, or can't be declared.
static RESERVED: phf::Set<&'static str> = phf_set! {
    "ICONS",
    "None",
    "Option",
    "Self",
    "Some",
};

/// Converts `"string-url-append"` to the `"StringURLAppend"` form.
pub fn dash_sep_to_mixed_caps(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for token in name.split('-') {
        let initialism = token.to_uppercase();
        if INITIALISMS.contains(initialism.as_str()) {
            result.push_str(&initialism);
            continue;
        }

        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Whether the identifier can be declared as an item of the generated source
pub fn is_valid_identifier(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|char| char.is_alphanumeric() || char == '_')
        && identifier != "_"
        && !RESERVED.contains(identifier)
}

#[derive(Default, Debug)]
/// Claims identifiers for icon names, ensuring no two names share one.
pub struct Identifiers {
    claimed: HashMap<String, String>,
}

impl Identifiers {
    /// Creates the identifier for the name and claims it.
    ///
    /// # Errors
    ///
    /// If the identifier is invalid or was already claimed by another name
    pub fn claim(&mut self, name: &str) -> Result<String, Error> {
        let identifier = dash_sep_to_mixed_caps(name);
        if !is_valid_identifier(&identifier) {
            return Err(Error::InvalidIdentifier {
                name: name.to_string(),
                identifier,
            });
        }
        if let Some(first) = self.claimed.get(&identifier) {
            if first != name {
                return Err(Error::IdentifierCollision {
                    identifier,
                    first: first.clone(),
                    second: name.to_string(),
                });
            }
        } else {
            self.claimed.insert(identifier.clone(), name.to_string());
        }
        Ok(identifier)
    }
}

#[test]
fn mixed_caps() {
    assert_eq!(dash_sep_to_mixed_caps("octicon-url-api"), "OcticonURLAPI");
    assert_eq!(dash_sep_to_mixed_caps("string-url-append"), "StringURLAppend");
    assert_eq!(dash_sep_to_mixed_caps("home"), "Home");
    assert_eq!(dash_sep_to_mixed_caps("rss"), "RSS");
    assert_eq!(dash_sep_to_mixed_caps("file-3d"), "File3d");
    assert_eq!(dash_sep_to_mixed_caps("mark-github"), "MarkGithub");
    assert_eq!(dash_sep_to_mixed_caps("link-external"), "LinkExternal");
    assert_eq!(dash_sep_to_mixed_caps("arrow--up"), "ArrowUp");
    assert_eq!(dash_sep_to_mixed_caps("ui-kitCase"), "UIKitCase");
}

#[test]
fn mixed_caps_is_deterministic() {
    for name in ["git-pull-request", "key-asterisk", "id-badge"] {
        assert_eq!(dash_sep_to_mixed_caps(name), dash_sep_to_mixed_caps(name));
    }
    assert_eq!(dash_sep_to_mixed_caps("id-badge"), "IDBadge");
}

#[test]
fn valid_identifiers() {
    assert!(is_valid_identifier("Alert"));
    assert!(is_valid_identifier("_Alert"));
    assert!(!is_valid_identifier(""));
    assert!(!is_valid_identifier("3Bars"));
    assert!(!is_valid_identifier("Self"));
    assert!(!is_valid_identifier("Git.Branch"));
}

#[test]
fn reserved_identifiers() {
    for identifier in ["None", "Some", "Option", "ICONS", "Self"] {
        assert!(!is_valid_identifier(identifier), "{identifier}");
    }
    assert!(is_valid_identifier("Icons"));
    assert!(is_valid_identifier("NoneFill"));

    let mut identifiers = Identifiers::default();
    for name in ["none", "some", "option", "ICONS"] {
        assert!(matches!(
            identifiers.claim(name),
            Err(Error::InvalidIdentifier { name: invalid, .. }) if invalid == name
        ));
    }
    assert_eq!(identifiers.claim("icons").unwrap(), "Icons");
}

#[test]
fn claim() {
    let mut identifiers = Identifiers::default();
    assert_eq!(identifiers.claim("url").unwrap(), "URL");
    assert_eq!(identifiers.claim("url").unwrap(), "URL");
    assert!(matches!(
        identifiers.claim("URL"),
        Err(Error::IdentifierCollision { identifier, first, second })
            if identifier == "URL" && first == "url" && second == "URL"
    ));
    assert!(matches!(
        identifiers.claim("3-bars"),
        Err(Error::InvalidIdentifier { identifier, .. }) if identifier == "3Bars"
    ));
    assert!(matches!(
        identifiers.claim("self"),
        Err(Error::InvalidIdentifier { .. })
    ));
}
