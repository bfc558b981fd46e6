use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Mysql,
    Postgresql,
    Redis,
    Unknown,
}

struct KindMatcher {
    kind: ServiceKind,
    tags: &'static [&'static str],
    schemes: &'static [&'static str],
}

const MATCHERS: &[KindMatcher] = &[
    KindMatcher {
        kind: ServiceKind::Mysql,
        tags: &["mysql"],
        schemes: &["mysql"],
    },
    KindMatcher {
        kind: ServiceKind::Postgresql,
        tags: &["postgres"],
        schemes: &["postgres", "postgresql"],
    },
    KindMatcher {
        kind: ServiceKind::Redis,
        tags: &["redis"],
        schemes: &["redis", "rediss"],
    },
];

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Mysql => "mysql",
            ServiceKind::Postgresql => "postgresql",
            ServiceKind::Redis => "redis",
            ServiceKind::Unknown => "unknown",
        }
    }

    pub fn classify(entry: &ServiceEntry) -> Self {
        MATCHERS
            .iter()
            .find(|matcher| matcher.accepts(entry))
            .map(|matcher| matcher.kind)
            .unwrap_or(ServiceKind::Unknown)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl KindMatcher {
    fn accepts(&self, entry: &ServiceEntry) -> bool {
        self.tags_match(entry) || self.label_matches(entry) || self.uri_matches(entry)
    }

    fn tags_match(&self, entry: &ServiceEntry) -> bool {
        entry
            .tags
            .iter()
            .any(|tag| self.tags.iter().any(|known| tag.eq_ignore_ascii_case(known)))
    }

    fn label_matches(&self, entry: &ServiceEntry) -> bool {
        let Some(label) = entry.label.as_deref() else {
            return false;
        };

        let label = label.to_ascii_lowercase();
        self.tags.iter().any(|tag| label.starts_with(tag))
    }

    fn uri_matches(&self, entry: &ServiceEntry) -> bool {
        self.candidate_uri_keys().iter().any(|key| {
            entry
                .credential_str(key)
                .and_then(|raw| Url::parse(raw).ok())
                .is_some_and(|uri| self.schemes.iter().any(|scheme| *scheme == uri.scheme()))
        })
    }

    fn candidate_uri_keys(&self) -> Vec<String> {
        let mut keys = vec!["uri".to_string(), "url".to_string()];
        for scheme in self.schemes {
            keys.push(format!("{scheme}Uri"));
            keys.push(format!("{scheme}uri"));
            keys.push(format!("{scheme}Url"));
        }
        keys
    }
}

/// One service instance as the platform describes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub credentials: Map<String, Value>,
}

impl ServiceEntry {
    fn credential_str(&self, key: &str) -> Option<&str> {
        self.credentials.get(key).and_then(Value::as_str)
    }
}

/// A backing service attached to the application by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBinding {
    pub name: String,
    pub label: Option<String>,
    pub plan: Option<String>,
    pub tags: Vec<String>,
    pub kind: ServiceKind,
}

impl ServiceBinding {
    pub fn new(name: impl Into<String>, kind: ServiceKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            plan: None,
            tags: Vec::new(),
            kind,
        }
    }

    /// `offering` is the key the entry was listed under. It stands in for a
    /// missing label or name.
    pub fn from_entry(offering: &str, mut entry: ServiceEntry) -> Self {
        if entry.label.is_none() {
            entry.label = Some(offering.to_string());
        }

        let kind = ServiceKind::classify(&entry);
        let name = entry.name.take().unwrap_or_else(|| offering.to_string());

        Self {
            name,
            label: entry.label,
            plan: entry.plan,
            tags: entry.tags,
            kind,
        }
    }
}
