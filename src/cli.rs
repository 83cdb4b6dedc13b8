// this_file: fontindex/src/cli.rs
//
// Command-line interface for fontindex

use crate::{
    collect::collect_and_write,
    font::FontDescription,
    query::{FontQuery, QueryCriteria},
    source::{GoogleFontsClient, DEFAULT_API_URL},
    utils::read_index,
    FontindexError, Result,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for fontindex
#[derive(Parser, Debug)]
#[command(
    version,
    about = "A tool to build a searchable index of the Google Fonts catalog",
    long_about = "fontindex downloads the complete Google Fonts catalog in a single request and \
                  writes it as a compact JSON index of font families plus an inverted tag index. \
                  The resulting snapshot can then be searched by category, subset and variant."
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(
        short,
        long,
        global = true,
        help = "Enable verbose output",
        long_help = "Enable verbose output mode that logs the catalog request \
                    and the progress of index building."
    )]
    pub verbose: bool,

    /// Output as JSON
    #[arg(
        short,
        long,
        global = true,
        help = "Output as JSON",
        long_help = "Output results in JSON format for machine processing. \
                    If not specified, results are output as human-readable text."
    )]
    pub json: bool,
}

/// Subcommands for fontindex
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the catalog and write the index file
    Collect(CollectArgs),

    /// Find families in an index file by tag
    Search(SearchArgs),

    /// Show one family of an index file
    Show(ShowArgs),
}

/// Arguments for the collect command
#[derive(ClapArgs, Debug)]
pub struct CollectArgs {
    /// Google Web Fonts API key
    #[arg(
        long,
        env = "GOOGLE_WEB_FONTS_API_KEY",
        hide_env_values = true,
        help = "Google Web Fonts API key"
    )]
    pub api_key: Option<String>,

    /// File to write the index to
    #[arg(
        short,
        long,
        env = "OUTPUT_FILE",
        help = "File to write the index to",
        long_help = "Path of the JSON index to write. Missing parent directories \
                    are created and an existing file is replaced."
    )]
    pub output: Option<PathBuf>,

    /// Base URL of the web fonts API
    #[arg(
        long,
        env = "GOOGLE_WEB_FONTS_API_URL",
        default_value = DEFAULT_API_URL,
        help = "Base URL of the web fonts API"
    )]
    pub api_url: String,
}

/// Validated configuration of a collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    /// API key sent with the listing request
    pub api_key: String,

    /// Index file to write
    pub output: PathBuf,

    /// Base URL of the web fonts API
    pub api_url: String,
}

impl CollectArgs {
    /// Check that every required setting is present
    pub fn resolve(&self) -> Result<CollectConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                FontindexError::Config(
                    "Must specify Google API key through --api-key or the \
                     GOOGLE_WEB_FONTS_API_KEY environment variable."
                        .to_string(),
                )
            })?;

        let output = self
            .output
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| {
                FontindexError::Config(
                    "Must specify output file through --output or the \
                     OUTPUT_FILE environment variable."
                        .to_string(),
                )
            })?;

        Ok(CollectConfig {
            api_key: api_key.to_string(),
            output: output.clone(),
            api_url: self.api_url.clone(),
        })
    }
}

/// Arguments for the search command
#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
    /// Index file written by collect
    #[arg(required = true, help = "Index file written by collect")]
    pub index: PathBuf,

    /// Categories to search for
    #[arg(
        short,
        long = "category",
        value_delimiter = ',',
        help = "Categories to search for (e.g., serif,display)"
    )]
    pub categories: Vec<String>,

    /// Subsets to search for
    #[arg(
        short,
        long = "subset",
        value_delimiter = ',',
        help = "Subsets to search for (e.g., latin,cyrillic)"
    )]
    pub subsets: Vec<String>,

    /// Variants to search for
    #[arg(
        long = "variant",
        value_delimiter = ',',
        help = "Variants to search for (e.g., regular,700italic)"
    )]
    pub variants: Vec<String>,

    /// Raw index tags to search for
    #[arg(
        short,
        long = "tag",
        value_delimiter = ',',
        help = "Raw index tags to search for (e.g., type:serif,subset:latin)",
        long_help = "Comma-separated list of tags exactly as stored in the index. \
                    Tags have the form type:<category>, subset:<subset> or \
                    variant:<variant>."
    )]
    pub tags: Vec<String>,
}

/// Arguments for the show command
#[derive(ClapArgs, Debug)]
pub struct ShowArgs {
    /// Index file written by collect
    #[arg(required = true)]
    pub index: PathBuf,

    /// Font id, e.g. open-sans
    #[arg(required = true)]
    pub id: String,
}

/// Execute the command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Collect(args) => {
            let config = args.resolve()?;

            let client = GoogleFontsClient::new(config.api_key, config.api_url)?;
            collect_and_write(&client, &config.output)?;

            println!("Success!");
        }
        Commands::Search(args) => {
            let indices = read_index(&args.index)?;

            let criteria = args_to_query_criteria(args);
            let results = FontQuery::new(&criteria).execute(&indices);

            output_results(&results, cli.json)?;
        }
        Commands::Show(args) => {
            let indices = read_index(&args.index)?;

            let desc = indices.families.get(&args.id).ok_or_else(|| {
                FontindexError::Other(format!("No family with id {}", args.id))
            })?;

            output_font_description(desc, cli.json)?;
        }
    }

    Ok(())
}

/// Convert CLI arguments to a query criteria
pub fn args_to_query_criteria(args: &SearchArgs) -> QueryCriteria {
    QueryCriteria {
        categories: args.categories.clone(),
        subsets: args.subsets.clone(),
        variants: args.variants.clone(),
        tags: args.tags.clone(),
    }
}

/// Output results
fn output_results(results: &[&FontDescription], json_output: bool) -> Result<()> {
    if json_output {
        let json = serde_json::to_string_pretty(results)?;
        println!("{}", json);
    } else {
        for desc in results {
            println!("{}", desc.id);
        }
    }

    Ok(())
}

/// Output a single font description
fn output_font_description(desc: &FontDescription, json_output: bool) -> Result<()> {
    if json_output {
        let json = serde_json::to_string_pretty(desc)?;
        println!("{}", json);
    } else {
        println!("Name: {}", desc.display_name);
        println!("Id: {}", desc.id);
        println!("Version: {}", desc.version);
        match desc.last_modified {
            Some(seconds) => println!("Last modified: {}", seconds),
            None => println!("Last modified: unknown"),
        }
        println!("Tags: {}", desc.tags.join(", "));
        for variant in &desc.variants {
            if let Some(url) = desc.file_url(variant) {
                println!("  {}: {}", variant, url);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_args(api_key: Option<&str>, output: Option<&str>) -> CollectArgs {
        CollectArgs {
            api_key: api_key.map(str::to_string),
            output: output.map(PathBuf::from),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    #[test]
    fn test_resolve_config() {
        let config = collect_args(Some("key"), Some("out/google.json"))
            .resolve()
            .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.output, PathBuf::from("out/google.json"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_missing_settings() {
        let err = collect_args(None, Some("out.json")).resolve().unwrap_err();
        assert!(matches!(err, FontindexError::Config(_)));
        assert!(err.to_string().contains("GOOGLE_WEB_FONTS_API_KEY"));

        let err = collect_args(Some(""), Some("out.json")).resolve().unwrap_err();
        assert!(matches!(err, FontindexError::Config(_)));

        let err = collect_args(Some("key"), None).resolve().unwrap_err();
        assert!(err.to_string().contains("OUTPUT_FILE"));
    }

    #[test]
    fn test_parse_collect() {
        let cli = Cli::parse_from([
            "fontindex",
            "collect",
            "--api-key",
            "key",
            "--output",
            "google.json",
            "--api-url",
            "http://localhost:8080/v1",
        ]);
        match cli.command {
            Commands::Collect(args) => {
                let config = args.resolve().unwrap();
                assert_eq!(config.api_url, "http://localhost:8080/v1");
                assert_eq!(config.output, PathBuf::from("google.json"));
            }
            _ => panic!("Expected collect command"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "fontindex",
            "search",
            "google.json",
            "-c",
            "serif,display",
            "--variant",
            "700",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Search(args) => {
                let criteria = args_to_query_criteria(&args);
                assert_eq!(criteria.categories, vec!["serif", "display"]);
                assert_eq!(
                    criteria.to_tags(),
                    vec!["type:serif", "type:display", "variant:700"]
                );
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_show_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("google.json");
        crate::utils::write_json(&index, &crate::index::Indices::new()).unwrap();

        let cli = Cli::parse_from([
            "fontindex",
            "show",
            index.to_str().unwrap(),
            "roboto",
        ]);
        assert!(execute(cli).is_err());
    }
}
