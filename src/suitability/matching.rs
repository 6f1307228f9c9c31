//! Soil and nutrient matching
//!
//! Both checks are all-or-nothing: exact, case-sensitive comparison against
//! the values stored in the crop database.

/// The only nutrient the matcher checks
pub const NITROGEN: &str = "Nitrogen";

/// True if `selected` is one of the crop's acceptable soil types
pub fn match_soil<S: AsRef<str>>(selected: &str, acceptable: &[S]) -> bool {
    acceptable.iter().any(|soil| soil.as_ref() == selected)
}

/// True if `selected` equals the crop's required Nitrogen level.
/// A crop with no Nitrogen requirement never matches.
pub fn match_nutrient(selected: &str, required: Option<&str>) -> bool {
    required.is_some_and(|level| level == selected)
}
