use super::error::InconsistentScopeError;
use super::resources::AuthResource;

/// Business id shared by every record of the batch.
///
/// Records without a business id are skipped. An empty batch, or one where no
/// record carries a business id, yields `0`.
///
/// # Errors
///
/// Returns [`InconsistentScopeError`] naming the first record whose business
/// id differs from the one established by the records before it.
pub fn extract_business_id<R: AuthResource>(records: &[R]) -> Result<i64, InconsistentScopeError> {
    let mut expected: Option<i64> = None;

    for record in records {
        let Some(found) = record.business_id() else {
            continue;
        };
        match expected {
            None => expected = Some(found),
            Some(first) if first != found => {
                return Err(InconsistentScopeError {
                    resource_type: R::RESOURCE_TYPE,
                    expected: first,
                    found,
                    instance_id: record.instance_id(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(expected.unwrap_or_default())
}
