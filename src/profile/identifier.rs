// Player identifier parsing.
//
// Mojang returns UUIDs as 32 contiguous hex digits, while everything we
// hand back to callers uses the dashed 8-4-4-4-12 form. Both spellings
// must parse to the same value before they are compared or serialized.

use uuid::Uuid;

use super::model::EntryError;

/// Length of an undashed identifier (`069a79f444e94726a5befca90e38aaf5`).
const UNDASHED_LEN: usize = 32;

/// Length of a dashed identifier (`069a79f4-44e9-4726-a5be-fca90e38aaf5`).
const DASHED_LEN: usize = 36;

/// Parse an identifier in either undashed or dashed form.
///
/// `Uuid::parse_str` also accepts braced and `urn:uuid:` spellings, which
/// the upstream never sends, so those are rejected by length first.
pub fn parse_identifier(raw: &str) -> Result<Uuid, EntryError> {
    let invalid = || EntryError::InvalidIdentifier(raw.to_string());

    match raw.len() {
        UNDASHED_LEN => {
            if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
        }
        DASHED_LEN => {
            let groups: Vec<&str> = raw.split('-').collect();
            let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
            if lengths != [8, 4, 4, 4, 12] {
                return Err(invalid());
            }
        }
        _ => return Err(invalid()),
    }

    Uuid::parse_str(raw).map_err(|_| invalid())
}

/// The undashed lowercase form used in upstream URL paths.
pub fn undashed(id: &Uuid) -> String {
    id.simple().to_string()
}

/// The canonical dashed lowercase form returned to callers.
pub fn dashed(id: &Uuid) -> String {
    id.hyphenated().to_string()
}
