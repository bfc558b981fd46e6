use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::config::{self, Settings};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::platform::{EnvSource, PlatformProvider};
use crate::profile::{ActiveProfiles, ProfileResolver, ProfileSource};

#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub source: ProfileSource,
    pub resolved: Vec<String>,
    pub active: Vec<String>,
}

pub fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    let report = build_report(
        &ctx.resolver,
        &ctx.platform,
        &ctx.env,
        &ctx.settings,
        &args.profiles,
    )?;
    ctx.output.emit(&text_line(&report), &report)
}

/// Seeds the host with the active profile flags, then resolves on top of them.
pub fn build_report<P, E>(
    resolver: &ProfileResolver,
    platform: &P,
    env: &E,
    settings: &Settings,
    cli_profiles: &[String],
) -> AppResult<ResolveReport>
where
    P: PlatformProvider + ?Sized,
    E: EnvSource + ?Sized,
{
    let flags = config::active_profile_flags(cli_profiles, env, settings);
    let mut host = ActiveProfiles::from_names(&flags);
    let resolution = resolver.run(platform, &mut host)?;

    Ok(ResolveReport {
        source: resolution.source,
        resolved: resolution.profiles,
        active: host.as_slice().to_vec(),
    })
}

fn text_line(report: &ResolveReport) -> String {
    report.active.join(",")
}
