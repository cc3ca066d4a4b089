//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sdglens_classifier::{ClassifierConfig, FallbackOrchestrator};
use sdglens_domain::{DocumentText, PredictionResult};
use sdglens_model::{LocalModelStrategy, ModelConfig, ModelLoader};
use sdglens_zeroshot::{RemoteZeroShotStrategy, ZeroShotConfig};
use tracing::debug;

/// Execute the classify command.
pub async fn execute_classify(
    args: ClassifyArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let result = classify(args, config).await?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Run the pipeline for `args` and return the ranked result.
pub async fn classify(args: ClassifyArgs, config: &Config) -> Result<PredictionResult> {
    let top_k = args.top_k;
    let orchestrator = build_orchestrator(&args, config)?;
    let document = read_document(args)?;

    Ok(orchestrator.classify_document(&document, top_k).await?)
}

fn read_document(args: ClassifyArgs) -> Result<DocumentText> {
    let full_text = match (&args.file, args.text) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(text)) => text,
        (None, None) => String::new(),
    };

    let document = DocumentText {
        title: args.title.unwrap_or_default(),
        abstract_text: args.abstract_text.unwrap_or_default(),
        keywords: args.keywords,
        full_text,
    };

    if document.is_blank() {
        return Err(CliError::InvalidInput(
            "Nothing to classify: pass a file, --text, --title, --abstract or --keyword".to_string(),
        ));
    }
    Ok(document)
}

fn build_orchestrator(
    args: &ClassifyArgs,
    config: &Config,
) -> Result<FallbackOrchestrator<RemoteZeroShotStrategy, LocalModelStrategy>> {
    let mut zero_shot = ZeroShotConfig::default();
    if let Some(endpoint) = &config.zero_shot_endpoint {
        zero_shot = zero_shot.with_endpoint(endpoint.clone());
    }
    if !args.offline {
        if let Some(token) = &args.api_token {
            zero_shot = zero_shot.with_api_token(token.clone());
        }
    }
    let remote = RemoteZeroShotStrategy::new(&zero_shot)?;

    let loader = match &args.model {
        Some(path) => ModelLoader::with_candidates(vec![path.clone()]),
        None => {
            let model_config = match &config.model_directory {
                Some(dir) => ModelConfig::with_directory(dir.clone()),
                None => ModelConfig::default(),
            };
            ModelLoader::new(&model_config)
        }
    };
    let local = LocalModelStrategy::from_loader(&loader);

    debug!(
        "Tiers: remote={}, local={}",
        zero_shot.has_token(),
        loader.is_loaded()
    );

    Ok(FallbackOrchestrator::try_new(
        remote,
        local,
        ClassifierConfig::default(),
    )?)
}
