// src/validate.rs
use crate::utils::error::ValidationError;
use crate::volby::models::DistrictIndex;
use std::path::Path;

const OUTPUT_EXTENSION: &str = ".csv";
const OUTPUT_PREFIX: &str = "vysledky_";

/// District name as written in an output file name, e.g.
/// `vysledky_prostejov.csv` -> `prostejov`.
pub fn district_from_filename(output_filename: &str) -> String {
    let file_name = Path::new(output_filename)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_filename.to_string());

    file_name
        .to_lowercase()
        .replace(OUTPUT_EXTENSION, "")
        .replace(OUTPUT_PREFIX, "")
        .replace('_', " ")
        .trim()
        .to_string()
}

/// Checks the output file name and that it names the district `user_url` points at.
///
/// The district check is a plain substring test against the matched district's
/// name, so it is only a sanity check. Returns the matched district name.
pub fn validate_user_input(
    user_url: &str,
    output_filename: &str,
    districts: &DistrictIndex,
) -> Result<String, ValidationError> {
    if !output_filename.to_lowercase().ends_with(OUTPUT_EXTENSION)
        || output_filename.contains('"')
        || output_filename.contains('\'')
    {
        return Err(ValidationError::InvalidFilename);
    }

    let wanted = district_from_filename(output_filename);

    let user_url = user_url.trim();
    let district = districts
        .iter()
        .find(|(_, url)| url.trim() == user_url)
        .map(|(name, _)| name.to_lowercase())
        .ok_or(ValidationError::NoMatchingDistrict)?;

    if !district.contains(&wanted) {
        return Err(ValidationError::DistrictMismatch(wanted));
    }

    tracing::debug!("Output file '{}' matches district '{}'", output_filename, district);
    Ok(district)
}

/// The URL must be one of the district pages, character for character.
pub fn ensure_listed(user_url: &str, districts: &DistrictIndex) -> Result<(), ValidationError> {
    if districts.values().any(|url| url == user_url) {
        Ok(())
    } else {
        Err(ValidationError::UrlNotListed)
    }
}
