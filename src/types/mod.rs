// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod git_ref;
mod id;
mod repository;
mod state;

pub use git_ref::{GitRef, GitRefError};
pub use id::{DeploymentId, Id, StatusId};
pub use repository::{Repository, RepositoryError};
pub use state::{DeploymentState, UnknownStateError, is_state_valid};
