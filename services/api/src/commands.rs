use clap::Args;
use property_schema::catalog::SchemaRegistry;
use property_schema::config::AppConfig;
use property_schema::error::AppError;
use property_schema::validation::{
    ListingSubmission, ListingValidator, ListingVerdict, UnknownFieldPolicy,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogSourceArgs {
    /// Catalog document to load instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogShowArgs {
    /// Category code, e.g. HOUSE or LAND
    pub(crate) category: String,
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogExportArgs {
    /// Destination file; prints to stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Category code the listing is filed under
    #[arg(long)]
    pub(crate) category: String,
    /// JSON file with `specifications` and `amenities`
    #[arg(long)]
    pub(crate) submission: PathBuf,
    /// Report specification keys the category does not declare
    #[arg(long)]
    pub(crate) reject_unknown_fields: bool,
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
}

fn load_registry(source: &CatalogSourceArgs) -> Result<SchemaRegistry, AppError> {
    let config = AppConfig::load()?;
    registry_for(source, &config)
}

fn registry_for(
    source: &CatalogSourceArgs,
    config: &AppConfig,
) -> Result<SchemaRegistry, AppError> {
    let registry = match &source.catalog {
        Some(path) => SchemaRegistry::load_from_path(path)?,
        None => config.catalog.registry()?,
    };
    Ok(registry)
}

/// The flag can only tighten the configured policy, never relax it.
fn unknown_field_policy(reject_flag: bool, config: &AppConfig) -> UnknownFieldPolicy {
    if reject_flag {
        UnknownFieldPolicy::Reject
    } else {
        config.catalog.unknown_fields
    }
}

pub(crate) fn run_catalog_list(args: CatalogSourceArgs) -> Result<(), AppError> {
    let registry = load_registry(&args)?;
    print!("{}", render_category_list(&registry));
    Ok(())
}

pub(crate) fn run_catalog_show(args: CatalogShowArgs) -> Result<(), AppError> {
    let registry = load_registry(&args.source)?;
    let schema = registry.schema(&args.category)?;
    println!("{}", serde_json::to_string_pretty(schema)?);
    Ok(())
}

pub(crate) fn run_catalog_export(args: CatalogExportArgs) -> Result<(), AppError> {
    let registry = load_registry(&args.source)?;
    let rendered = registry.to_document().to_json_pretty()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!(
                "Catalog v{} with {} categories written to {}",
                registry.version(),
                registry.schemas().len(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Prints the verdict and returns whether the listing was accepted.
pub(crate) fn run_validate(args: ValidateArgs) -> Result<bool, AppError> {
    let config = AppConfig::load()?;
    let registry = registry_for(&args.source, &config)?;
    let policy = unknown_field_policy(args.reject_unknown_fields, &config);

    let raw = std::fs::read_to_string(&args.submission)?;
    let submission: ListingSubmission = serde_json::from_str(&raw)?;

    let verdict = ListingValidator::new(&registry)
        .with_unknown_fields(policy)
        .validate(&args.category, &submission)?;

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    if !verdict.valid {
        eprint!("{}", render_error_summary(&verdict));
    }
    Ok(verdict.valid)
}

fn render_category_list(registry: &SchemaRegistry) -> String {
    let mut output = format!("Property catalog v{}\n", registry.version());
    for schema in registry.schemas() {
        let required = schema.required_fields().count();
        output.push_str(&format!(
            "  {:<12} {:<18} {} fields ({} required), {} amenities\n",
            schema.category.as_str(),
            schema.label,
            schema.fields.len(),
            required,
            schema.amenities.len()
        ));
    }
    output
}

fn render_error_summary(verdict: &ListingVerdict) -> String {
    let mut output = format!("Listing rejected for {}:\n", verdict.category);
    let messages = verdict
        .specifications
        .messages()
        .into_iter()
        .chain(verdict.amenities.messages());
    for message in messages {
        output.push_str(&format!("  - {message}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "property-schema-{name}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("temp file writable");
        path
    }

    fn standard_catalog_file(name: &str) -> PathBuf {
        let document = SchemaRegistry::standard()
            .to_document()
            .to_json_pretty()
            .expect("document renders");
        write_temp(name, &document)
    }

    #[test]
    fn category_list_mentions_every_category() {
        let registry = SchemaRegistry::standard();
        let listing = render_category_list(&registry);
        assert!(listing.starts_with("Property catalog v1"));
        for category in registry.categories() {
            assert!(listing.contains(category.as_str()), "{category} missing");
        }
    }

    #[test]
    fn error_summary_lists_each_violation() {
        let registry = SchemaRegistry::standard();
        let submission: ListingSubmission = serde_json::from_value(json!({
            "specifications": { "area": 20, "topografia": "montañoso" },
            "amenities": ["wifi"]
        }))
        .expect("submission deserializes");

        let verdict = ListingValidator::new(&registry)
            .validate("LAND", &submission)
            .expect("land registered");
        let summary = render_error_summary(&verdict);

        assert!(summary.starts_with("Listing rejected for LAND"));
        assert_eq!(summary.lines().count(), 4);
        assert!(summary.contains("plano, inclinado, escarpado"));
        assert!(summary.contains("amenity 'wifi'"));
    }

    #[test]
    fn validate_command_reports_invalid_listing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        std::env::remove_var("APP_UNKNOWN_FIELDS");
        let submission = write_temp(
            "submission-range",
            r#"{"specifications": {"capacidad": 9, "bano_privado": true}}"#,
        );
        let catalog = standard_catalog_file("catalog-range");

        let valid = run_validate(ValidateArgs {
            category: "ROOM".to_string(),
            submission: submission.clone(),
            reject_unknown_fields: false,
            source: CatalogSourceArgs {
                catalog: Some(catalog.clone()),
            },
        })
        .expect("command runs");

        std::fs::remove_file(&submission).ok();
        std::fs::remove_file(&catalog).ok();
        assert!(!valid);
    }

    #[test]
    fn validate_command_follows_configured_unknown_field_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        let submission = write_temp(
            "submission-undeclared",
            r#"{"specifications": {"capacidad": 1, "bano_privado": true, "jacuzzi": true}}"#,
        );
        let catalog = standard_catalog_file("catalog-undeclared");
        let args = || ValidateArgs {
            category: "ROOM".to_string(),
            submission: submission.clone(),
            reject_unknown_fields: false,
            source: CatalogSourceArgs {
                catalog: Some(catalog.clone()),
            },
        };

        std::env::set_var("APP_UNKNOWN_FIELDS", "reject");
        let strict = run_validate(args());
        std::env::set_var("APP_UNKNOWN_FIELDS", "ignore");
        let tolerant = run_validate(args());
        std::env::remove_var("APP_UNKNOWN_FIELDS");

        std::fs::remove_file(&submission).ok();
        std::fs::remove_file(&catalog).ok();
        assert!(!strict.expect("command runs"), "undeclared key accepted under reject");
        assert!(tolerant.expect("command runs"));
    }

    #[test]
    fn reject_flag_overrides_tolerant_configuration() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        std::env::set_var("APP_UNKNOWN_FIELDS", "ignore");
        let config = AppConfig::load().expect("config loads");
        std::env::remove_var("APP_UNKNOWN_FIELDS");

        assert_eq!(
            unknown_field_policy(false, &config),
            UnknownFieldPolicy::Ignore
        );
        assert_eq!(
            unknown_field_policy(true, &config),
            UnknownFieldPolicy::Reject
        );
    }
}
