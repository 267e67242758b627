//! Sheet Localizator CLI - localization tables from shared spreadsheets

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sheet_localizator::prelude::*;
use sheet_localizator::feed_url;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheet-localizator")]
#[command(
    author,
    version,
    about = "Build localization tables from publicly shared spreadsheets"
)]
struct Cli {
    /// Log more (-v: info, -vv: debug, -vvv: trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the key -> value table of one language as JSON
    Localize {
        /// Cell feed JSON file ("-" for stdin)
        input: PathBuf,

        /// Language to extract (default: the configured default language)
        #[arg(short, long)]
        language: Option<String>,

        /// Fallback language when --language is not given
        #[arg(long)]
        default_language: Option<String>,

        /// Fail if the language is not in the title row
        #[arg(long)]
        strict: bool,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// List the languages named in the title row
    Languages {
        /// Cell feed JSON file ("-" for stdin)
        input: PathBuf,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Print the public feed URL of a shared sheet
    Url {
        /// Sheet id, as found in the sheet's share link
        sheet_id: String,
    },
}

/// Options describing the sheet layout
#[derive(Args)]
struct TableArgs {
    /// JSON file with localization options; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Column holding the keys (default: A)
    #[arg(short, long)]
    key_column: Option<ColumnCode>,

    /// Row holding the language labels (default: 1)
    #[arg(short, long)]
    title_row: Option<u32>,

    /// Skip cells with malformed labels instead of failing
    #[arg(long)]
    skip_malformed: bool,
}

impl TableArgs {
    fn options(&self) -> Result<LocalizationOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => LocalizationOptions::default(),
        };
        if let Some(column) = &self.key_column {
            options.key_column = column.clone();
        }
        if let Some(row) = self.title_row {
            options.title_row = row;
        }
        if self.skip_malformed {
            options.malformed_cells = MalformedCellPolicy::Skip;
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Localize {
            input,
            language,
            default_language,
            strict,
            output,
            table,
        } => {
            let mut options = table.options()?;
            if let Some(default_language) = default_language {
                options.default_language = default_language;
            }
            localize(&input, language.as_deref(), options, strict, output.as_deref())
        }
        Commands::Languages { input, table } => list_languages(&input, table.options()?),
        Commands::Url { sheet_id } => print_url(&sheet_id),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn load_options(path: &Path) -> Result<LocalizationOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid config '{}'", path.display()))
}

fn open_feed(input: &Path) -> Result<JsonFeed> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read feed from stdin")?;
        Ok(JsonFeed::text(text))
    } else {
        Ok(JsonFeed::file(input))
    }
}

fn localize(
    input: &Path,
    language: Option<&str>,
    options: LocalizationOptions,
    strict: bool,
    output: Option<&Path>,
) -> Result<()> {
    let localizator = SheetLocalizator::new(open_feed(input)?).with_options(options);

    let map = match localizator
        .resolve(language)
        .with_context(|| format!("Failed to localize '{}'", input.display()))?
    {
        Resolution::Found(map) => map,
        Resolution::LanguageNotFound {
            language,
            available,
        } => {
            if strict {
                bail!(
                    "Language '{}' not found (available: {})",
                    language,
                    available.join(", ")
                );
            }
            log::warn!("Language '{language}' not found, writing an empty table");
            LocalizationMap::new()
        }
    };

    let mut json = serde_json::to_string_pretty(&map).context("Failed to serialize table")?;
    json.push('\n');

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        log::info!("Wrote {} entries to '{}'", map.len(), output_path.display());
    } else {
        io::stdout()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn list_languages(input: &Path, options: LocalizationOptions) -> Result<()> {
    let localizator = SheetLocalizator::new(open_feed(input)?).with_options(options);
    let languages = localizator
        .languages()
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    for language in languages {
        println!("{}", language);
    }

    Ok(())
}

fn print_url(sheet_id: &str) -> Result<()> {
    let url = feed_url(sheet_id)?;
    println!("{}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_localize() {
        let cli = Cli::try_parse_from([
            "sheet-localizator",
            "localize",
            "feed.json",
            "--language",
            "EN",
            "--key-column",
            "b",
            "--title-row",
            "2",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Localize {
                input,
                language,
                strict,
                table,
                ..
            } => {
                assert_eq!(input, PathBuf::from("feed.json"));
                assert_eq!(language.as_deref(), Some("EN"));
                assert!(strict);

                let options = table.options().unwrap();
                assert_eq!(options.key_column, "B");
                assert_eq!(options.title_row, 2);
                assert_eq!(options.malformed_cells, MalformedCellPolicy::Abort);
            }
            _ => panic!("expected localize"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_column() {
        assert!(Cli::try_parse_from(["sheet-localizator", "languages", "-", "-k", "A1"]).is_err());
    }

    #[test]
    fn test_config_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"key_column": "C", "title_row": 3, "default_language": "SV"}"#)
            .unwrap();

        let table = TableArgs {
            config: Some(file.path().to_path_buf()),
            key_column: None,
            title_row: Some(1),
            skip_malformed: true,
        };
        let options = table.options().unwrap();
        assert_eq!(options.key_column, "C");
        assert_eq!(options.title_row, 1);
        assert_eq!(options.default_language, "SV");
        assert_eq!(options.malformed_cells, MalformedCellPolicy::Skip);
    }

    #[test]
    fn test_localize_writes_output() {
        let mut feed = tempfile::NamedTempFile::new().unwrap();
        feed.write_all(
            br#"{"feed": {"entry": [
                {"title": {"$t": "A1"}, "content": {"$t": "Key"}},
                {"title": {"$t": "B1"}, "content": {"$t": "EN"}},
                {"title": {"$t": "A2"}, "content": {"$t": "greeting"}},
                {"title": {"$t": "B2"}, "content": {"$t": "Hello"}}
            ]}}"#,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("en.json");

        localize(
            feed.path(),
            Some("EN"),
            LocalizationOptions::default(),
            false,
            Some(&out),
        )
        .unwrap();
        let written: LocalizationMap =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.get("greeting").map(String::as_str), Some("Hello"));

        let err = localize(
            feed.path(),
            Some("FR"),
            LocalizationOptions::default(),
            true,
            Some(&out),
        )
        .unwrap_err();
        assert!(err.to_string().contains("'FR' not found"));
    }
}
