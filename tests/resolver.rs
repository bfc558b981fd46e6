use persistence_profile::error::AppError;
use persistence_profile::platform::{
    CloudContext, NoPlatform, ServiceBinding, ServiceKind, StaticPlatform,
};
use persistence_profile::profile::{
    ActiveProfiles, HostEnvironment, ProfileResolver, ProfileSource, ProfileTable,
};

fn cloud(bindings: Vec<ServiceBinding>) -> CloudContext {
    CloudContext::new(Some("autosleep".to_string()), bindings)
}

#[test]
fn defaults_without_context_or_flags() {
    let mut host = ActiveProfiles::new();
    let resolution = ProfileResolver::default()
        .resolve(None, &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.source, ProfileSource::Default);
    assert_eq!(resolution.profiles, ["default"]);
    assert_eq!(host.active_profiles(), ["default"]);
}

#[test]
fn selects_local_profile_from_active_flag() {
    let mut host = ActiveProfiles::from_names(["mysql"]);
    let resolution = ProfileResolver::default()
        .resolve(None, &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.source, ProfileSource::Local);
    assert_eq!(resolution.profiles, ["mysql", "mysql-local"]);
    assert_eq!(host.active_profiles(), ["mysql", "mysql-local"]);
}

#[test]
fn rejects_two_valid_local_profiles() {
    const WIDE: ProfileTable = ProfileTable::new(
        &[(ServiceKind::Mysql, "mysql"), (ServiceKind::Postgresql, "postgresql")],
        &["mysql", "postgresql"],
    );
    let mut host = ActiveProfiles::from_names(["postgresql", "metrics", "mysql"]);
    let err = ProfileResolver::new(WIDE)
        .resolve(None, &mut host)
        .expect_err("two local profiles must be rejected");

    match err {
        AppError::AmbiguousLocalProfile { allowed, active } => {
            assert_eq!(allowed, ["mysql", "postgresql"]);
            assert_eq!(active, ["postgresql", "mysql"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(host.active_profiles(), ["postgresql", "metrics", "mysql"]);
}

#[test]
fn defaults_when_cloud_has_no_recognized_binding() {
    let context = cloud(vec![
        ServiceBinding::new("cache", ServiceKind::Redis),
        ServiceBinding::new("logs", ServiceKind::Unknown),
    ]);
    let mut host = ActiveProfiles::new();
    let resolution = ProfileResolver::default()
        .resolve(Some(&context), &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.source, ProfileSource::Default);
    assert_eq!(resolution.profiles, ["default"]);
}

#[test]
fn selects_cloud_profile_from_single_mysql_binding() {
    let context = cloud(vec![
        ServiceBinding::new("cache", ServiceKind::Redis),
        ServiceBinding::new("db", ServiceKind::Mysql),
    ]);
    let mut host = ActiveProfiles::new();
    let resolution = ProfileResolver::default()
        .resolve(Some(&context), &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.source, ProfileSource::Cloud);
    assert_eq!(resolution.profiles, ["mysql", "mysql-cloud"]);
}

#[test]
fn cloud_context_ignores_local_flags() {
    let context = cloud(Vec::new());
    let mut host = ActiveProfiles::from_names(["mysql"]);
    let resolution = ProfileResolver::default()
        .resolve(Some(&context), &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.profiles, ["default"]);
    assert_eq!(host.active_profiles(), ["mysql", "default"]);
}

#[test]
fn rejects_two_recognized_bindings() {
    let context = cloud(vec![
        ServiceBinding::new("db-a", ServiceKind::Mysql),
        ServiceBinding::new("db-b", ServiceKind::Mysql),
    ]);
    let mut host = ActiveProfiles::new();
    let err = ProfileResolver::default()
        .resolve(Some(&context), &mut host)
        .expect_err("two bindings must be rejected");

    match &err {
        AppError::AmbiguousBinding { allowed, bound } => {
            assert_eq!(allowed, &["mysql"]);
            assert_eq!(bound, &["db-a (mysql)", "db-b (mysql)"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("db-a (mysql), db-b (mysql)"));
    assert!(host.is_empty());
}

#[test]
fn repeated_resolution_on_fresh_hosts_is_identical() {
    let context = cloud(vec![ServiceBinding::new("db", ServiceKind::Mysql)]);
    let resolver = ProfileResolver::default();

    let mut first_host = ActiveProfiles::new();
    let mut second_host = ActiveProfiles::new();
    let first = resolver
        .resolve(Some(&context), &mut first_host)
        .expect("resolution should work");
    let second = resolver
        .resolve(Some(&context), &mut second_host)
        .expect("resolution should work");

    assert_eq!(first, second);
    assert_eq!(first_host, second_host);
}

#[test]
fn keeps_unrelated_active_profiles() {
    let mut host = ActiveProfiles::from_names(["metrics", "mysql", "debug"]);
    ProfileResolver::default()
        .resolve(None, &mut host)
        .expect("resolution should work");

    assert_eq!(
        host.active_profiles(),
        ["metrics", "mysql", "debug", "mysql-local"]
    );
}

#[test]
fn run_treats_missing_platform_as_local() {
    let mut host = ActiveProfiles::from_names(["mysql"]);
    let resolution = ProfileResolver::default()
        .run(&NoPlatform, &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.source, ProfileSource::Local);
}

#[test]
fn run_uses_platform_context() {
    let platform = StaticPlatform::new(cloud(vec![ServiceBinding::new("db", ServiceKind::Mysql)]));
    let mut host = ActiveProfiles::new();
    let resolution = ProfileResolver::default()
        .run(&platform, &mut host)
        .expect("resolution should work");

    assert_eq!(resolution.profiles, ["mysql", "mysql-cloud"]);
}

#[test]
fn active_profiles_skip_duplicates_and_blanks() {
    let mut host = ActiveProfiles::from_names(["mysql", " ", "mysql", " debug "]);
    host.add_active_profile("debug");

    assert_eq!(host.active_profiles(), ["mysql", "debug"]);
}

struct ListHost(Vec<String>);

impl HostEnvironment for ListHost {
    fn active_profiles(&self) -> Vec<String> {
        self.0.clone()
    }

    fn add_active_profile(&mut self, name: &str) {
        self.0.push(name.to_string());
    }
}

#[test]
fn repeated_local_flag_counts_once() {
    let mut host = ListHost(vec!["mysql".to_string(), "mysql".to_string()]);
    let resolution = ProfileResolver::default()
        .resolve(None, &mut host)
        .expect("a repeated flag is not ambiguous");

    assert_eq!(resolution.source, ProfileSource::Local);
    assert_eq!(resolution.profiles, ["mysql", "mysql-local"]);
}
