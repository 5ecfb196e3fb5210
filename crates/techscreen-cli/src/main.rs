mod tagger;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use techscreen_core::{Blacklist, DEFAULT_MAX_EXTRA_LABELS, EvalConfig};
use techscreen_eval::BatchRunner;
use techscreen_eval::report::BatchReport;
use techscreen_store::{DirectoryLoader, ExampleLoader};

use crate::tagger::{TaggerKind, TaggerSettings, build_tagger};

/// Score a technology tagger against labelled training screens.
///
/// Example: `techscreen-eval 10 5` processes 5 examples starting at index 10.
#[derive(Debug, Parser)]
#[command(name = "techscreen-eval", version)]
struct Cli {
    /// Index of the first example to process (examples are sorted by file name)
    #[arg(default_value_t = 0)]
    start_index: usize,

    /// Number of examples to process; 0 processes all remaining
    #[arg(default_value_t = 0)]
    run_count: usize,

    /// Directory of training-screen JSON files
    #[arg(long, env = "TECHSCREEN_EXAMPLES_DIR", default_value = "training-screens")]
    examples_dir: PathBuf,

    /// Which tagger to evaluate
    #[arg(long, value_enum, env = "TECHSCREEN_TAGGER", default_value_t = TaggerKind::Keyword)]
    tagger: TaggerKind,

    /// Question repository supplying the keyword tagger's vocabulary
    #[arg(long, env = "TECHSCREEN_QUESTION_REPO", default_value = "repos/question-repo.json")]
    question_repo: PathBuf,

    /// Tagging service URL for the remote tagger
    #[arg(long, env = "TECHSCREEN_ENDPOINT")]
    endpoint: Option<String>,

    /// Artificial latency for the empty tagger, in milliseconds
    #[arg(long, default_value_t = 0)]
    stub_delay_ms: u64,

    /// An example passes only with fewer extra labels than this
    #[arg(long, env = "TECHSCREEN_MAX_EXTRA", default_value_t = DEFAULT_MAX_EXTRA_LABELS)]
    max_extra: usize,

    /// Maximum tagger calls in flight
    #[arg(long, env = "TECHSCREEN_CONCURRENCY", default_value_t = 1)]
    concurrency: usize,

    /// Per-example tagger timeout in seconds
    #[arg(long, env = "TECHSCREEN_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Do not filter generic technologies (Git, Agile, ...) out of suggestions
    #[arg(long)]
    no_blacklist: bool,

    /// Print the batch result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn eval_config(&self) -> EvalConfig {
        EvalConfig::default()
            .with_max_extra_labels(self.max_extra)
            .with_concurrency(self.concurrency)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }

    fn tagger_settings(&self) -> TaggerSettings {
        TaggerSettings {
            kind: self.tagger,
            question_repo: self.question_repo.clone(),
            endpoint: self.endpoint.clone(),
            stub_delay: Duration::from_millis(self.stub_delay_ms),
            blacklist: if self.no_blacklist {
                Blacklist::empty()
            } else {
                Blacklist::default()
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    tracing::info!("techscreen-eval v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.eval_config();
    config.validate().context("invalid evaluation settings")?;

    let tagger = build_tagger(cli.tagger_settings()).await?;

    let loader = DirectoryLoader::new(&cli.examples_dir);
    let examples = loader
        .list_examples()
        .await
        .with_context(|| format!("listing examples in {}", cli.examples_dir.display()))?;

    let runner = BatchRunner::new(tagger, config)?;
    let batch = runner.run(&examples, cli.start_index, cli.run_count).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print!("{}", BatchReport(&batch));
    }
    Ok(())
}
