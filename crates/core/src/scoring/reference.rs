//! Curated reference tables for trust scoring.
//!
//! The tables are walked in declaration order and the first trusted-group
//! match wins, so the ordering here is part of the observable behavior.
//! Category and subcategory identifiers keep the naming the published
//! verdicts have always used.

const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * MB;

/// Expectations for one release subcategory.
#[derive(Debug)]
pub struct SubcategorySpec {
    pub name: &'static str,
    /// Release groups treated as a positive trust signal. Matched against
    /// whole name tokens.
    pub trusted_groups: &'static [&'static str],
    /// Plausible release size bounds, inclusive.
    pub min_size: u64,
    pub max_size: u64,
    /// File extensions a release of this kind usually ships under.
    pub extensions: &'static [&'static str],
}

/// A top-level content category.
#[derive(Debug)]
pub struct CategorySpec {
    pub name: &'static str,
    pub subcategories: &'static [SubcategorySpec],
}

pub static CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "JOGOS",
        subcategories: &[
            SubcategorySpec {
                name: "PC",
                trusted_groups: &[
                    "CODEX", "SKIDROW", "PLAZA", "EMPRESS", "FITGIRL", "DODI", "RELOADED", "GOG",
                ],
                min_size: 50 * MB,
                max_size: 150 * GB,
                extensions: &[".ISO", ".BIN"],
            },
            SubcategorySpec {
                name: "CONSOLE",
                trusted_groups: &["DUPLEX", "BIGBLUEBOX", "VENOM", "HR"],
                min_size: 100 * MB,
                max_size: 100 * GB,
                extensions: &[".PKG", ".NSP", ".XCI"],
            },
        ],
    },
    CategorySpec {
        name: "FILMES",
        subcategories: &[
            SubcategorySpec {
                name: "BLURAY",
                trusted_groups: &["SPARKS", "AMIABLE", "GECKOS", "DRONES", "ROVERS"],
                min_size: 4 * GB,
                max_size: 60 * GB,
                extensions: &[".MKV", ".MP4"],
            },
            SubcategorySpec {
                name: "WEB",
                trusted_groups: &["FLUX", "NTB", "CMRG", "TEPES"],
                min_size: 500 * MB,
                max_size: 15 * GB,
                extensions: &[".MKV", ".MP4"],
            },
        ],
    },
    CategorySpec {
        name: "SERIES",
        subcategories: &[
            SubcategorySpec {
                name: "EPISODIO",
                trusted_groups: &["DIMENSION", "LOL", "KILLERS", "SVA", "TBS"],
                min_size: 100 * MB,
                max_size: 5 * GB,
                extensions: &[".MKV", ".MP4"],
            },
            SubcategorySpec {
                name: "TEMPORADA",
                trusted_groups: &["BATV", "AJP69", "MEMENTO"],
                min_size: 2 * GB,
                max_size: 80 * GB,
                extensions: &[".MKV"],
            },
        ],
    },
    CategorySpec {
        name: "PROGRAMAS",
        subcategories: &[
            SubcategorySpec {
                name: "WINDOWS",
                trusted_groups: &["ZWT", "CORE", "TBE", "RADIKAL"],
                min_size: MB,
                max_size: 20 * GB,
                extensions: &[".ISO", ".IMG"],
            },
            SubcategorySpec {
                name: "MAC",
                trusted_groups: &["TNT", "HCISO"],
                min_size: MB,
                max_size: 20 * GB,
                extensions: &[".DMG", ".PKG"],
            },
        ],
    },
    CategorySpec {
        name: "MUSICA",
        subcategories: &[SubcategorySpec {
            name: "ALBUM",
            trusted_groups: &["PMEDIA", "YARD", "ESG"],
            min_size: 10 * MB,
            max_size: 2 * GB,
            extensions: &[".FLAC", ".MP3"],
        }],
    },
];

/// Uploader labels known to distribute malware. Matched as substrings of
/// the uppercased name.
pub static MALICIOUS_GROUPS: &[&str] = &[
    "FREE-DOWNLOAD",
    "DOWNLOAD-FREE",
    "FULLGAMES",
    "TORRENT4ALL",
    "CPY-CRACKS",
];

/// Naming patterns that correlate with fake or trojanized uploads.
/// Matched as substrings of the uppercased name.
pub static SUSPICIOUS_PATTERNS: &[&str] = &[
    "CRACK", "KEYGEN", "ACTIVATOR", "SERIAL", "PATCHER", "LOADER",
];

/// File extensions that should never be the payload of a media release.
/// Matched as suffixes of the uppercased name.
pub static DANGEROUS_EXTENSIONS: &[&str] = &[
    ".EXE", ".MSI", ".BAT", ".CMD", ".SCR", ".VBS", ".ZIP", ".RAR",
];
