pub mod binding;
pub mod cloud;
pub mod env;

pub use binding::{ServiceBinding, ServiceEntry, ServiceKind};
pub use cloud::{
    CloudContext, CloudFoundryProvider, NoPlatform, PlatformProvider, StaticPlatform,
    parse_services,
};
pub use env::{EnvSource, MapEnv, ProcessEnv};
