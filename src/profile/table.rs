use crate::platform::ServiceKind;

/// Profile activated when nothing else is selected. Points to in-memory storage.
pub const DEFAULT_PROFILE: &str = "default";

pub const CLOUD_SUFFIX: &str = "cloud";
pub const LOCAL_SUFFIX: &str = "local";

/// Which persistence profiles may be selected, and how platform services map to them.
#[derive(Debug, Clone, Copy)]
pub struct ProfileTable {
    bindings: &'static [(ServiceKind, &'static str)],
    local: &'static [&'static str],
}

impl ProfileTable {
    pub const STANDARD: ProfileTable =
        ProfileTable::new(&[(ServiceKind::Mysql, "mysql")], &["mysql"]);

    pub const fn new(
        bindings: &'static [(ServiceKind, &'static str)],
        local: &'static [&'static str],
    ) -> Self {
        Self { bindings, local }
    }

    pub fn profile_for(&self, kind: ServiceKind) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, profile)| *profile)
    }

    pub fn is_valid_local(&self, name: &str) -> bool {
        self.local.iter().any(|candidate| *candidate == name)
    }

    pub fn binding_profiles(&self) -> Vec<String> {
        self.bindings
            .iter()
            .map(|(_, profile)| (*profile).to_string())
            .collect()
    }

    pub fn local_profiles(&self) -> Vec<String> {
        self.local.iter().map(|name| (*name).to_string()).collect()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub fn profile_names(base: &str, suffix: &str) -> Vec<String> {
    vec![base.to_string(), format!("{base}-{suffix}")]
}
