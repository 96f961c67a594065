use std::collections::BTreeMap;

use crate::models::LicenseStats;

/// Count literal license strings.
///
/// Strings are taken exactly as each dependency reports them, so `"MIT"` and
/// `"mit"` are counted separately and `"UNKNOWN"` counts like any license.
pub fn aggregate_stats<S: AsRef<str>>(licenses: &[S]) -> LicenseStats {
    let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
    for license in licenses {
        *distribution.entry(license.as_ref().to_string()).or_insert(0) += 1;
    }

    LicenseStats {
        total: licenses.len(),
        unique: distribution.len(),
        distribution,
    }
}
