pub mod client;
pub mod remote;
pub mod types;

pub use client::{DEFAULT_BASE_URL, ErgastClient};
pub use remote::{FetchError, RacingApi};
pub use types::{ConstructorRef, Driver, DriverPage, DriverRef, RacePage, RaceResult, ResultEntry};
