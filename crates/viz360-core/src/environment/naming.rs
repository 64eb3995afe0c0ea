//! Identifier derivation and display-name casing.
//!
//! The identifier is recomputed from the user-supplied name on every
//! operation, so [`derive_id`] must stay pure.

use crate::error::{Error, Result};

/// Lowercase the name and replace each space with a hyphen.
///
/// `derive_id("Living Room") == "living-room"`. Applying it to its own output
/// is a no-op.
pub fn derive_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Reject names whose identifier cannot be used as a single path segment.
pub fn validate_name(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "name is empty",
        });
    }
    let id = derive_id(name);
    if id == "." || id == ".." {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "identifier cannot be a relative path component",
        });
    }
    if id.contains('/') || id.contains('\\') {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "identifier cannot contain path separators",
        });
    }
    Ok(id)
}

/// Title-case the way the registry has always stored names: the first cased
/// character after any uncased character is uppercased, the rest are lowercased.
///
/// `title_case("sala 2") == "Sala 2"`, `title_case("LIVING room") == "Living Room"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_cased = false;
    for c in name.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        // Uncased letters (CJK, digits) start a new word like punctuation does.
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_id() {
        assert_eq!(derive_id("Living Room"), "living-room");
        assert_eq!(derive_id("Sala 2"), "sala-2");
        assert_eq!(derive_id("cozinha"), "cozinha");
        assert_eq!(derive_id("Área  Gourmet"), "área--gourmet");
    }

    #[test]
    fn test_derive_id_is_idempotent() {
        for name in ["Living Room", "Sala 2", "ÁREA Externa", "a-b c"] {
            let once = derive_id(name);
            assert_eq!(derive_id(&once), once);
        }
    }

    #[test]
    fn test_validate_name_rejects_unsafe_ids() {
        assert!(validate_name("   ").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert_eq!(validate_name("Sala 2").unwrap(), "sala-2");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sala 2"), "Sala 2");
        assert_eq!(title_case("LIVING room"), "Living Room");
        assert_eq!(title_case("área gourmet"), "Área Gourmet");
        assert_eq!(title_case("suite-master"), "Suite-Master");
        assert_eq!(title_case("2nd floor"), "2Nd Floor");
        assert_eq!(title_case("中a b"), "中A B");
    }
}
