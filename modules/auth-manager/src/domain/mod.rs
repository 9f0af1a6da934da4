pub mod error;
mod extensions;
pub mod ids;
pub mod manager;
pub mod no_permission;
pub mod resources;
pub mod scope;

mod cancel;

pub use error::{
    AuthManagerError, DeniedResource, InconsistentScopeError, LookupError, PolicyDecisionError,
};
pub use manager::AuthManager;
pub use no_permission::{NoPermissionResp, Permission, PermissionResource};
pub use resources::AuthResource;
