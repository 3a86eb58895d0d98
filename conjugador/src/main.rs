use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use conjugador_lib::conjugation::conjugate_tense;
use conjugador_lib::lexicon::{dedup_catalog, parse_catalog};
use conjugador_lib::output::{group_by_initial, render_results, render_table};
use conjugador_lib::{Irregulars, Lexicon, SearchOptions, Session, Tense, VerbEntry};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conjugador", about = "Portuguese verb conjugator and form lookup")]
struct Cli {
    /// Verb catalog to use instead of the built-in one (verb, gloss,
    /// regular|irregular; tab separated).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Exception table to use instead of the built-in one (JSON).
    #[arg(long, global = true)]
    irregulars: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full paradigm of a verb.
    Conjugate {
        verb: String,

        /// Mark every slot spelled like this form.
        #[arg(long)]
        highlight: Option<String>,

        /// Only this tense, e.g. "Presente" or "Futuro do Presente".
        #[arg(long)]
        tense: Option<String>,

        #[command(flatten)]
        format: Format,
    },
    /// Search verbs by name or gloss and inflected forms by spelling.
    Search {
        /// Query. If omitted, reads one query per line from stdin.
        query: Option<String>,

        /// Maximum number of form matches.
        #[arg(short = 'n', long, default_value_t = conjugador_lib::search::DEFAULT_FORM_LIMIT)]
        limit: usize,

        /// Restrict verb matches to these verbs (comma separated).
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        #[command(flatten)]
        format: Format,
    },
    /// List the catalog grouped by initial letter.
    List {
        /// Only verbs flagged irregular.
        #[arg(long)]
        irregular: bool,

        #[command(flatten)]
        format: Format,
    },
}

#[derive(Args)]
struct Format {
    /// Output JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

impl Format {
    fn print(&self, value: &serde_json::Value) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        println!("{}", text.context("JSON serialization failed")?);
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = load_lexicon(&cli)?;
    tracing::debug!(
        verbs = lexicon.verbs().len(),
        irregular = lexicon.irregulars().len(),
        "lexicon loaded"
    );

    match &cli.command {
        Command::Conjugate {
            verb,
            highlight,
            tense,
            format,
        } => conjugate(Session::new(lexicon), verb, highlight.as_deref(), tense.as_deref(), format),
        Command::Search {
            query,
            limit,
            only,
            format,
        } => {
            let session = Session::with_options(lexicon, SearchOptions { limit: *limit });
            search(&session, query.as_deref(), only, format)
        }
        Command::List { irregular, format } => list(&lexicon, *irregular, format),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    let mut lexicon = Lexicon::new();
    if let Some(path) = &cli.catalog {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let parsed = parse_catalog(&text)
            .with_context(|| format!("invalid catalog {}", path.display()))?;
        let verbs = dedup_catalog(parsed);
        lexicon = lexicon.with_verbs(verbs);
    }
    if let Some(path) = &cli.irregulars {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read exception table {}", path.display()))?;
        let irregulars = Irregulars::from_json(&text)
            .with_context(|| format!("invalid exception table {}", path.display()))?;
        lexicon = lexicon.with_irregulars(irregulars);
    }
    Ok(lexicon)
}

fn conjugate(
    session: Session,
    verb: &str,
    highlight: Option<&str>,
    tense: Option<&str>,
    format: &Format,
) -> Result<()> {
    let entry = session.lexicon().lookup(verb);
    if entry.is_none() {
        tracing::warn!(verb, "not in the catalog; conjugating anyway");
    }

    if let Some(name) = tense {
        let Some(tense) = Tense::from_name(name) else {
            bail!("unknown tense {name:?}");
        };
        let Some(forms) = conjugate_tense(verb, tense, session.irregulars()) else {
            bail!("{verb} has no {tense}");
        };
        if format.json {
            return format.print(&json!({ "verb": verb, "tense": tense, "forms": forms }));
        }
        for form in forms {
            println!("{form}");
        }
        return Ok(());
    }

    let table = session.conjugate(verb);
    if table.is_empty() {
        bail!("no conjugation known for {verb:?}");
    }

    if format.json {
        return format.print(&json!({
            "verb": verb,
            "gloss": entry.map(|e| e.gloss.as_str()),
            "irregular": entry.map(|e| e.irregular),
            "tenses": &*table,
        }));
    }
    print!("{}", render_table(verb, entry, &table, highlight));
    Ok(())
}

fn search(session: &Session, query: Option<&str>, only: &[String], format: &Format) -> Result<()> {
    match query {
        Some(q) => search_one(session, q, only, format),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                if !line.trim().is_empty() {
                    search_one(session, &line, only, format)?;
                }
            }
            Ok(())
        }
    }
}

fn search_one(session: &Session, query: &str, only: &[String], format: &Format) -> Result<()> {
    let results = if only.is_empty() {
        session.search(query)
    } else {
        let view = session
            .catalog()
            .iter()
            .filter(|v| only.iter().any(|o| o == &v.verb));
        session.search_within(query, view)
    };

    if format.json {
        return format.print(&json!({ "query": query, "results": results }));
    }
    if results.is_empty() {
        println!("Nenhum resultado para \"{}\"", query.trim());
    } else {
        print!("{}", render_results(&results));
    }
    Ok(())
}

fn list(lexicon: &Lexicon, irregular_only: bool, format: &Format) -> Result<()> {
    let verbs: Vec<&VerbEntry> = lexicon
        .verbs()
        .iter()
        .filter(|v| !irregular_only || v.irregular)
        .collect();

    if format.json {
        return format.print(&json!(verbs));
    }
    for (letter, members) in group_by_initial(verbs) {
        println!("{letter}");
        for v in members {
            let badge = if v.irregular { " [irr.]" } else { "" };
            println!("  {} — {}{badge}", v.verb, v.gloss);
        }
    }
    Ok(())
}
