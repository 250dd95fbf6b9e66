// Ownership and visibility policy
//
// Every resource with an author and a public flag goes through the same
// two checks. The fetch-then-authorize helpers keep the NotFound /
// Forbidden distinction in one place instead of reimplemented per
// resource.

use crate::error::ApiError;

/// A resource owned by a user, with an independent visibility flag
pub trait OwnedResource {
    fn author_id(&self) -> i32;
    fn is_public(&self) -> bool;
}

/// Read access: public resources are readable by anyone, private ones
/// by their owner only
pub fn can_read<R: OwnedResource>(resource: &R, requester_id: i32) -> bool {
    resource.is_public() || resource.author_id() == requester_id
}

/// Write access: owner only, regardless of visibility
pub fn can_modify<R: OwnedResource>(resource: &R, requester_id: i32) -> bool {
    resource.author_id() == requester_id
}

/// Resolve a fetched row against the read policy
///
/// None maps to NotFound; a present row the requester may not read maps
/// to Forbidden. The two are never conflated.
pub fn authorize_read<R: OwnedResource>(
    found: Option<R>,
    requester_id: i32,
    resource_name: &str,
    id: i32,
) -> Result<R, ApiError> {
    let resource = found.ok_or_else(|| ApiError::NotFound {
        resource: resource_name.to_string(),
        id: id.to_string(),
    })?;

    if !can_read(&resource, requester_id) {
        tracing::warn!(
            "Read denied: user {} on private {} {}",
            requester_id,
            resource_name,
            id
        );
        return Err(ApiError::Forbidden("Access denied".to_string()));
    }

    Ok(resource)
}

/// Resolve a fetched row against the owner-only policy
///
/// Used for update, delete, and association mutations.
pub fn authorize_modify<R: OwnedResource>(
    found: Option<R>,
    requester_id: i32,
    resource_name: &str,
    id: i32,
) -> Result<R, ApiError> {
    let resource = found.ok_or_else(|| ApiError::NotFound {
        resource: resource_name.to_string(),
        id: id.to_string(),
    })?;

    if !can_modify(&resource, requester_id) {
        tracing::warn!(
            "Modification denied: user {} is not the owner of {} {}",
            requester_id,
            resource_name,
            id
        );
        return Err(ApiError::Forbidden(format!(
            "You are not authorized to modify this {}",
            resource_name.to_lowercase()
        )));
    }

    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        author_id: i32,
        is_public: bool,
    }

    impl OwnedResource for Fixture {
        fn author_id(&self) -> i32 {
            self.author_id
        }

        fn is_public(&self) -> bool {
            self.is_public
        }
    }

    const OWNER: i32 = 1;
    const STRANGER: i32 = 2;

    fn private_resource() -> Fixture {
        Fixture {
            author_id: OWNER,
            is_public: false,
        }
    }

    fn public_resource() -> Fixture {
        Fixture {
            author_id: OWNER,
            is_public: true,
        }
    }

    #[test]
    fn test_private_read_denied_for_non_owner() {
        assert!(!can_read(&private_resource(), STRANGER));
    }

    #[test]
    fn test_private_read_allowed_for_owner() {
        assert!(can_read(&private_resource(), OWNER));
    }

    #[test]
    fn test_public_read_allowed_for_anyone() {
        assert!(can_read(&public_resource(), STRANGER));
        assert!(can_read(&public_resource(), OWNER));
    }

    #[test]
    fn test_modify_denied_for_non_owner_even_when_public() {
        assert!(!can_modify(&public_resource(), STRANGER));
    }

    #[test]
    fn test_modify_allowed_for_owner_only() {
        assert!(can_modify(&private_resource(), OWNER));
        assert!(can_modify(&public_resource(), OWNER));
        assert!(!can_modify(&private_resource(), STRANGER));
    }

    #[test]
    fn test_authorize_read_absent_row_is_not_found() {
        let result = authorize_read::<Fixture>(None, STRANGER, "Exercise", 42);
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[test]
    fn test_authorize_read_private_row_is_forbidden() {
        let result = authorize_read(Some(private_resource()), STRANGER, "Exercise", 42);
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_authorize_read_owner_gets_private_row() {
        let result = authorize_read(Some(private_resource()), OWNER, "Exercise", 42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_authorize_modify_public_row_still_owner_only() {
        let result = authorize_modify(Some(public_resource()), STRANGER, "Training plan", 7);
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_authorize_modify_absent_row_is_not_found() {
        let result = authorize_modify::<Fixture>(None, OWNER, "Training plan", 7);
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }
}
