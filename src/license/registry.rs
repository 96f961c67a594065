use crate::models::LicenseDefinition;

/// Licenses a permissive project can take on without changing its terms.
const PERMISSIVE_DEPS: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "ISC",
    "Unlicense",
    "MPL-2.0",
    "LGPL-3.0",
];

const BUILTIN: &[LicenseDefinition] = &[
    LicenseDefinition {
        key: "MIT",
        name: "MIT License",
        permissive: true,
        copyleft: false,
        public_domain: false,
        compatible: PERMISSIVE_DEPS,
        template: include_str!("templates/mit.txt"),
    },
    LicenseDefinition {
        key: "Apache-2.0",
        name: "Apache License 2.0",
        permissive: true,
        copyleft: false,
        public_domain: false,
        compatible: PERMISSIVE_DEPS,
        template: include_str!("templates/apache-2.0.txt"),
    },
    LicenseDefinition {
        key: "GPL-3.0",
        name: "GNU General Public License v3.0",
        permissive: false,
        copyleft: true,
        public_domain: false,
        compatible: &["GPL-3.0", "LGPL-3.0"],
        template: include_str!("templates/gpl-3.0.txt"),
    },
    LicenseDefinition {
        key: "GPL-2.0",
        name: "GNU General Public License v2.0",
        permissive: false,
        copyleft: true,
        public_domain: false,
        compatible: &["GPL-2.0"],
        template: include_str!("templates/gpl-2.0.txt"),
    },
    LicenseDefinition {
        key: "AGPL-3.0",
        name: "GNU Affero General Public License v3.0",
        permissive: false,
        copyleft: true,
        public_domain: false,
        compatible: &["AGPL-3.0", "GPL-3.0", "LGPL-3.0"],
        template: include_str!("templates/agpl-3.0.txt"),
    },
    LicenseDefinition {
        key: "LGPL-3.0",
        name: "GNU Lesser General Public License v3.0",
        permissive: false,
        copyleft: true,
        public_domain: false,
        compatible: &["LGPL-3.0"],
        template: include_str!("templates/lgpl-3.0.txt"),
    },
    LicenseDefinition {
        key: "MPL-2.0",
        name: "Mozilla Public License 2.0",
        permissive: false,
        copyleft: true,
        public_domain: false,
        compatible: &["MPL-2.0"],
        template: include_str!("templates/mpl-2.0.txt"),
    },
    LicenseDefinition {
        key: "BSD-2-Clause",
        name: "BSD 2-Clause \"Simplified\" License",
        permissive: true,
        copyleft: false,
        public_domain: false,
        compatible: PERMISSIVE_DEPS,
        template: include_str!("templates/bsd-2-clause.txt"),
    },
    LicenseDefinition {
        key: "BSD-3-Clause",
        name: "BSD 3-Clause \"New\" or \"Revised\" License",
        permissive: true,
        copyleft: false,
        public_domain: false,
        compatible: PERMISSIVE_DEPS,
        template: include_str!("templates/bsd-3-clause.txt"),
    },
    LicenseDefinition {
        key: "ISC",
        name: "ISC License",
        permissive: true,
        copyleft: false,
        public_domain: false,
        compatible: PERMISSIVE_DEPS,
        template: include_str!("templates/isc.txt"),
    },
    LicenseDefinition {
        key: "Unlicense",
        name: "The Unlicense",
        permissive: true,
        copyleft: false,
        public_domain: true,
        compatible: &[
            "Unlicense",
            "MIT",
            "Apache-2.0",
            "BSD-2-Clause",
            "BSD-3-Clause",
            "ISC",
        ],
        template: include_str!("templates/unlicense.txt"),
    },
];

/// Immutable license catalog.
///
/// Keys are exact and case-sensitive (`"Apache-2.0"`, never `"apache-2.0"`).
/// Spelling variants are resolved by [`normalize`](crate::license::spdx::normalize)
/// before anything reaches the registry.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    licenses: &'static [LicenseDefinition],
}

impl Registry {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self { licenses: BUILTIN }
    }

    #[cfg(test)]
    pub fn from_static(licenses: &'static [LicenseDefinition]) -> Self {
        Self { licenses }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static LicenseDefinition> {
        self.licenses.iter().find(|l| l.key == key)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static LicenseDefinition> {
        self.licenses.iter()
    }

    pub fn keys(&self) -> Vec<String> {
        self.licenses.iter().map(|l| l.key.to_string()).collect()
    }
}
