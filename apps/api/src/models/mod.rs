pub mod job;
pub mod resume;
pub mod user;

use serde::{Deserialize, Deserializer};

pub use job::{Job, JobDraft};
pub use resume::{Resume, ResumeDraft};
pub use user::{Role, User, UserDraft, UserView};

/// Reads an explicit `null` as the type's default. Pair with `#[serde(default)]`
/// so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
