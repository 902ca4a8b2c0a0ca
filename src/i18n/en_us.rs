// ============================================================================
// LinguaX - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//   - ❌ Should not contain dynamic translation generation
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Check command related
    ("cli.check.start", "Starting catalog check..."),
    ("check.all_good", "All catalog files look good"),
    ("check.file.start", "Checking catalog file: {}"),
    ("check.file.clean", "{}: no issues found"),
    ("check.file.found", "Found {} issue(s) in {}"),
    // Stats command related
    ("cli.stats.start", "Collecting translation statistics..."),
    ("stats.file.start", "Analyzing catalog file: {}"),
    ("stats.file.header", "Catalog file: {}"),
    // Lookup command related
    ("lookup.file", "Looking up in catalog file: {}"),
    (
        "lookup.context_missing",
        "Context '{}' not found in catalog, falling back to source text",
    ),
    // Init command related
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite the existing configuration file",
    ),
    ("init.config_created", "Configuration file created: {}"),
    ("init.create_failed", "Failed to create configuration file: {}"),
    (
        "init.catalogs_found",
        "Found {} catalog file(s); the first one is set as catalog.default_file",
    ),
    (
        "init.no_catalogs_found",
        "No .ts files found; edit linguax.toml to point catalog.root at them",
    ),
    // Error messages
    (
        "error.catalog_root_not_exist",
        "Catalog root directory does not exist: {}",
    ),
    ("error.no_catalog_files", "No .ts catalog files found under {}"),
    ("error.load_failed", "Failed to load catalog file {}: {}"),
    (
        "error.no_catalog_file_specified",
        "No catalog file specified: pass --file or set catalog.default_file in linguax.toml",
    ),
    (
        "error.unknown_plural_rule",
        "Unknown plural rule '{}' (expected one, two-en, two-fr or three-slavic)",
    ),
    // Output related
    ("output.check_result", "Check Result"),
    ("output.issue_total", "{} issue(s) total"),
    ("output.stats_result", "Translation Statistics"),
    ("output.language", "Target language: {}"),
    ("output.total_contexts", "Contexts: {}"),
    ("output.total_messages", "Messages: {}"),
    ("output.finished", "Finished: {}"),
    ("output.unfinished", "Unfinished: {}"),
    ("output.retired", "Vanished/obsolete: {}"),
    ("output.completion", "Completion: {}%"),
    ("output.duration", "Analysis took {}ms"),
    ("output.context_breakdown", "Per-context breakdown"),
    ("output.numerus_messages", "{} plural message(s)"),
    (
        "output.usage_tip",
        "Use -d for details, -f json for JSON output",
    ),
];
