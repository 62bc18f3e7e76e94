//! Catalog domain entities
//!
//! Four flat name catalogs share one shape: email domains, organizations
//! (universities), academic levels and academic fields. They are admin-
//! maintained reference data attached to user profiles.

/// Which catalog a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Domain,
    Organization,
    AcademicLevel,
    AcademicField,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Organization => "organization",
            Self::AcademicLevel => "academic_level",
            Self::AcademicField => "academic_field",
        }
    }

    /// Name used in export filenames, matching the resource name.
    pub fn export_name(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Organization => "Organization",
            Self::AcademicLevel => "AcademicLevel",
            Self::AcademicField => "AcademicField",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "domain" => Some(Self::Domain),
            "organization" => Some(Self::Organization),
            "academic_level" => Some(Self::AcademicLevel),
            "academic_field" => Some(Self::AcademicField),
            _ => None,
        }
    }
}

/// A named catalog row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: i32,
    pub kind: CatalogKind,
    pub name: String,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        for kind in [
            CatalogKind::Domain,
            CatalogKind::Organization,
            CatalogKind::AcademicLevel,
            CatalogKind::AcademicField,
        ] {
            assert_eq!(CatalogKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(CatalogKind::from_str("other"), None);
    }
}
