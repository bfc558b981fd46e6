pub mod environment;
pub mod resolver;
pub mod table;

pub use environment::{ActiveProfiles, HostEnvironment, parse_profile_list};
pub use resolver::{ProfileResolver, ProfileSource, Resolution};
pub use table::{DEFAULT_PROFILE, ProfileTable};
