//! Public API trait for the process service.

use ac_security::SecurityContext;
use async_trait::async_trait;

use crate::error::ProcessError;
use crate::models::{ListServiceTemplateOption, ServiceTemplateList};

/// Lookup API of the process service.
///
/// ```ignore
/// let list = process
///     .list_service_templates(&ctx, ListServiceTemplateOption::by_ids(vec![1, 2]))
///     .await?;
/// ```
#[async_trait]
pub trait ProcessClient: Send + Sync {
    /// List the service templates matching `option` in a single call.
    ///
    /// Unknown ids are not an error: the result holds only the templates
    /// that exist, and callers compare it with the ids they asked for.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing service cannot be reached
    /// - `Internal` for unexpected errors
    async fn list_service_templates(
        &self,
        ctx: &SecurityContext,
        option: ListServiceTemplateOption,
    ) -> Result<ServiceTemplateList, ProcessError>;
}
