use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::platform::{CloudContext, PlatformProvider};

use super::environment::HostEnvironment;
use super::table::{CLOUD_SUFFIX, DEFAULT_PROFILE, LOCAL_SUFFIX, ProfileTable, profile_names};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    Cloud,
    Local,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub source: ProfileSource,
    pub profiles: Vec<String>,
}

impl Resolution {
    fn default_profile() -> Self {
        Self {
            source: ProfileSource::Default,
            profiles: vec![DEFAULT_PROFILE.to_string()],
        }
    }
}

/// Picks the persistence profile to activate at startup.
///
/// Without a profile, in-memory persistence is used. With one, the resolver
/// activates `<name>` together with `<name>-cloud` or `<name>-local` depending
/// on where the choice came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileResolver {
    table: ProfileTable,
}

impl ProfileResolver {
    pub fn new(table: ProfileTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ProfileTable {
        &self.table
    }

    /// Looks up the platform context and resolves against it.
    pub fn run<P, H>(&self, provider: &P, host: &mut H) -> AppResult<Resolution>
    where
        P: PlatformProvider + ?Sized,
        H: HostEnvironment + ?Sized,
    {
        debug!("checking for a cloud context");
        let cloud = provider.try_context();
        self.resolve(cloud.as_ref(), host)
    }

    pub fn resolve<H>(&self, cloud: Option<&CloudContext>, host: &mut H) -> AppResult<Resolution>
    where
        H: HostEnvironment + ?Sized,
    {
        let chosen = match cloud {
            Some(cloud) => {
                debug!("running in a cloud context, checking bound services");
                self.cloud_profile(cloud)?
            }
            None => {
                debug!("running in a local context, checking active profiles");
                self.local_profile(&host.active_profiles())?
            }
        };

        let resolution = chosen.unwrap_or_else(|| {
            debug!("no profile given and no usable service bound, using default profile");
            Resolution::default_profile()
        });

        for name in &resolution.profiles {
            host.add_active_profile(name);
        }

        Ok(resolution)
    }

    fn cloud_profile(&self, cloud: &CloudContext) -> AppResult<Option<Resolution>> {
        let bindings = cloud.service_bindings();
        let names: Vec<&str> = bindings.iter().map(|binding| binding.name.as_str()).collect();
        info!(services = %names.join(", "), "found service bindings");

        let matched: Vec<_> = bindings
            .iter()
            .filter_map(|binding| match self.table.profile_for(binding.kind) {
                Some(profile) => Some((binding, profile)),
                None => {
                    debug!(service = %binding.name, kind = %binding.kind, "ignoring unrecognized service");
                    None
                }
            })
            .collect();

        match matched.as_slice() {
            [] => Ok(None),
            [(_, profile)] => Ok(Some(selected(ProfileSource::Cloud, profile, CLOUD_SUFFIX))),
            _ => Err(AppError::AmbiguousBinding {
                allowed: self.table.binding_profiles(),
                bound: matched
                    .iter()
                    .map(|(binding, profile)| format!("{} ({profile})", binding.name))
                    .collect(),
            }),
        }
    }

    fn local_profile(&self, active: &[String]) -> AppResult<Option<Resolution>> {
        let mut matched: Vec<&String> = Vec::new();
        for name in active {
            if self.table.is_valid_local(name) && !matched.contains(&name) {
                matched.push(name);
            }
        }

        match matched.as_slice() {
            [] => Ok(None),
            [profile] => Ok(Some(selected(ProfileSource::Local, profile, LOCAL_SUFFIX))),
            _ => Err(AppError::AmbiguousLocalProfile {
                allowed: self.table.local_profiles(),
                active: matched.into_iter().cloned().collect(),
            }),
        }
    }
}

fn selected(source: ProfileSource, base: &str, suffix: &str) -> Resolution {
    let profiles = profile_names(base, suffix);
    info!(profiles = %profiles.join(", "), "setting profile names");
    Resolution { source, profiles }
}
