use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::catalog::CatalogSource;
use crate::config::SiteConfig;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/static",
    "website/static/css",
    "website/static/data",
    "website/static/img",
];

/// Static assets the pages link to
const EXPECTED_STATIC: &[&str] = &["website/static/css/site.css"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and warns about missing files. Nothing here
/// is fatal: without a catalog the storefront shows its "cannot load" message.
pub fn run(config: &SiteConfig) {
    info!("Etalase boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Static assets ───────────────────────────────
    for file in EXPECTED_STATIC {
        if !Path::new(file).exists() {
            warn!("  Missing static asset: {} (pages will be unstyled)", file);
            warnings += 1;
        }
    }

    // ── 3. Catalog ─────────────────────────────────────
    match CatalogSource::parse(&config.catalog) {
        CatalogSource::Local(path) => {
            if !path.is_file() {
                warn!("  Catalog file not found: {}", path.display());
                warnings += 1;
            }
        }
        CatalogSource::Remote(url) => info!("  Catalog is remote: {}", url),
    }

    if errors > 0 {
        error!("Boot check finished with {} error(s), {} warning(s)", errors, warnings);
    } else if warnings > 0 {
        warn!("Boot check finished with {} warning(s)", warnings);
    } else {
        info!("Boot check passed");
    }
}
