//! Graph Poet CLI — word-affinity poetry from a corpus.
//!
//! Usage:
//!   graph-poet poem --corpus path [words...]
//!   graph-poet bridge --corpus path <first> <second>
//!   graph-poet graph --corpus path [--json]

use clap::{Parser, Subcommand, ValueEnum};
use graph_poet::config::default_config_path;
use graph_poet::{Corpus, Graph, GraphPoet, PoetConfig, TieBreak};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(
    name = "graph-poet",
    version,
    about = "Word-affinity poetry generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Rule for equal-score bridge words (overrides the config file)
    #[arg(long, global = true, value_enum)]
    tie_break: Option<TieBreakArg>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a poem by bridging adjacent input words
    Poem {
        /// Corpus file (falls back to the config file's corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Input words; read from stdin when omitted
        words: Vec<String>,
    },
    /// Show the bridge word chosen between two words
    Bridge {
        #[arg(long)]
        corpus: Option<PathBuf>,
        first: String,
        second: String,
    },
    /// Print the affinity graph built from a corpus
    Graph {
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Emit a JSON snapshot instead of the text listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Smallest,
    Largest,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Smallest => TieBreak::Smallest,
            TieBreakArg::Largest => TieBreak::Largest,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<PoetConfig, String> {
    let result = match path {
        Some(path) => PoetConfig::load(&path),
        None => match default_config_path() {
            Some(path) => PoetConfig::load_or_default(&path),
            None => Ok(PoetConfig::default()),
        },
    };
    result.map_err(|e| e.to_string())
}

fn open_poet(corpus: Option<PathBuf>, config: &PoetConfig) -> Result<GraphPoet, String> {
    let path = corpus.or_else(|| config.corpus.clone()).ok_or_else(|| {
        "no corpus given (use --corpus or set `corpus` in the config)".to_string()
    })?;
    let corpus = Corpus::load(&path).map_err(|e| e.to_string())?;
    let poet: GraphPoet = GraphPoet::from_corpus(&corpus)
        .map_err(|e| e.to_string())?
        .with_tie_break(config.tie_break);
    info!(
        "Loaded corpus {} ({} words, {} distinct)",
        path.display(),
        poet.affinity().token_count(),
        poet.affinity().graph().vertex_count()
    );
    Ok(poet)
}

fn cmd_poem(poet: &GraphPoet, words: Vec<String>) -> Result<i32, String> {
    let input = if words.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        buf
    } else {
        words.join(" ")
    };
    println!("{}", poet.poem(&input));
    Ok(0)
}

fn cmd_bridge(poet: &GraphPoet, first: &str, second: &str) -> Result<i32, String> {
    match poet.bridge(first, second) {
        Some(bridge) => {
            println!("{} (score {})", bridge.word, bridge.score);
            Ok(0)
        }
        None => {
            eprintln!("No bridge between '{}' and '{}'", first, second);
            Ok(1)
        }
    }
}

fn cmd_graph(poet: &GraphPoet, json: bool) -> Result<i32, String> {
    if json {
        let mut snapshot = poet.affinity().graph().snapshot();
        snapshot.vertices.sort();
        snapshot
            .edges
            .sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
        let text = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print!("{}", poet);
    }
    Ok(0)
}

fn run(cli: Cli) -> Result<i32, String> {
    let mut config = load_config(cli.config)?;
    if let Some(tie_break) = cli.tie_break {
        config.tie_break = tie_break.into();
    }
    match cli.command {
        Commands::Poem { corpus, words } => {
            let poet = open_poet(corpus, &config)?;
            cmd_poem(&poet, words)
        }
        Commands::Bridge {
            corpus,
            first,
            second,
        } => {
            let poet = open_poet(corpus, &config)?;
            cmd_bridge(&poet, &first, &second)
        }
        Commands::Graph { corpus, json } => {
            let poet = open_poet(corpus, &config)?;
            cmd_graph(&poet, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}
