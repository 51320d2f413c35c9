//! Authentication: password hashing, sessions and the login gate.

mod clock;
mod gate;
mod password;
pub mod session;
mod store;

pub use clock::{Clock, SystemClock};
pub use gate::{require_login, CurrentUser};
pub use password::{HasherConfig, PasswordHasher};
pub use session::{DEFAULT_SESSION_TTL, SESSION_USER_ID_KEY};
pub use store::ClockedStore;

#[cfg(test)]
pub(crate) use clock::ManualClock;
#[cfg(test)]
pub(crate) use password::test_hasher;
