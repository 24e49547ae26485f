// Identifier extraction: the last step of a name lookup.
//
// Callers of the lookup service only want identifiers back, so resolved
// profiles are projected down to a deduplicated set of UUIDs.

use std::collections::HashSet;

use anyhow::Result;
use uuid::Uuid;

use super::client::ProfileResolver;
use super::model::PlayerProfile;

/// Collect the distinct identifiers from a list of profiles.
pub fn extract_identifiers(profiles: &[PlayerProfile]) -> HashSet<Uuid> {
    profiles.iter().map(PlayerProfile::id).collect()
}

/// Resolve names to the set of identifiers of the players that exist.
pub async fn lookup_identifiers(
    resolver: &dyn ProfileResolver,
    names: &[String],
) -> Result<HashSet<Uuid>> {
    let profiles = resolver.fetch_by_names(names).await?;
    Ok(extract_identifiers(&profiles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_coalesce() {
        let id = Uuid::from_u128(0x069a79f444e94726a5befca90e38aaf5);
        let profiles = vec![
            PlayerProfile::new(id, "Notch"),
            PlayerProfile::new(id, "notch"),
        ];
        assert_eq!(extract_identifiers(&profiles).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_identifiers(&[]).is_empty());
    }
}
