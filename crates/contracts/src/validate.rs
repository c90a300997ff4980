/// Client-side required-field validation for draft records.
///
/// The check is intentionally shallow: it only guards against empty required
/// fields before a request is issued. Range and format rules belong to the
/// backend, which is the source of truth for all records.
pub trait Validate {
    /// `Err` carries a field-level message ready for display.
    fn validate(&self) -> Result<(), String>;
}

/// Helper for the common "field must not be blank" rule.
pub fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} wajib diisi"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fail_with_field_label() {
        assert_eq!(require("", "Nama"), Err("Nama wajib diisi".to_string()));
        assert_eq!(require("   ", "Nama"), Err("Nama wajib diisi".to_string()));
        assert_eq!(require("Sepatu", "Nama"), Ok(()));
    }
}
