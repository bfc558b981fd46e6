/// The host side of profile activation: which profiles are already active,
/// and a way to activate more.
pub trait HostEnvironment {
    fn active_profiles(&self) -> Vec<String>;
    fn add_active_profile(&mut self, name: &str);
}

/// Ordered, duplicate-free set of active profile names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveProfiles {
    names: Vec<String>,
}

impl ActiveProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut profiles = Self::new();
        for name in names {
            profiles.add_active_profile(name.as_ref());
        }
        profiles
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|active| active == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl HostEnvironment for ActiveProfiles {
    fn active_profiles(&self) -> Vec<String> {
        self.names.clone()
    }

    fn add_active_profile(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return;
        }

        self.names.push(name.to_string());
    }
}

/// Splits comma separated profile lists, dropping blanks.
pub fn parse_profile_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
