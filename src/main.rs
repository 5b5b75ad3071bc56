// src/main.rs
use clap::Parser;
use resume_extractor::backend::{self, ExtractionBackend, FileBackend};
use resume_extractor::config::{EducationStrategy, ExtractorConfig, MissingPolicy, NameStrategy};
use resume_extractor::document::{DocumentProcessor, ExtractionReport};
use resume_extractor::extractors::tagger::{LexiconTagger, PosTagger};
use resume_extractor::storage::StorageManager;
use resume_extractor::utils::{self, AppError};
use std::path::PathBuf;
use std::sync::Arc;

/// Command Line Interface for the résumé extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Uploaded document (.txt, .html, .pdf; images need an OCR backend)
    #[arg(short, long)]
    file: PathBuf,

    /// Job description to score against (comma or newline separated skills)
    #[arg(short, long, conflicts_with = "job_file")]
    job_description: Option<String>,

    /// Read the job description from a file instead
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// How the candidate name is found
    #[arg(long, value_enum, default_value_t = NameStrategy::Titlecase)]
    name_strategy: NameStrategy,

    /// How education entries are found
    #[arg(long, value_enum, default_value_t = EducationStrategy::Header)]
    education_strategy: EducationStrategy,

    /// How missing table cells are written (falls back to RESUME_TABLE_POLICY, then null)
    #[arg(long, value_enum)]
    missing_policy: Option<MissingPolicy>,

    /// Append tagger pattern matches to education, experience and skills
    #[arg(long)]
    tagger: bool,

    /// Save the report to this directory instead of printing it
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Debug mode - save an annotated HTML copy of the extracted text
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    if args.file.file_name().map_or(true, |n| n.is_empty()) {
        return Err(AppError::Config("No file selected".to_string()));
    }

    // 3. Build the processor; the tagger is created once and shared read-only
    let config = ExtractorConfig {
        name_strategy: args.name_strategy,
        education_strategy: args.education_strategy,
        missing_policy: args
            .missing_policy
            .or_else(MissingPolicy::from_env)
            .unwrap_or_default(),
        tagger_supplement: args.tagger,
    };
    let tagger: Arc<dyn PosTagger> = Arc::new(LexiconTagger::new());
    let processor = Arc::new(DocumentProcessor::from_config(&config, tagger));
    let file_backend: Arc<dyn ExtractionBackend> = Arc::new(FileBackend::new());

    // 4. Extract and process the upload
    let document = backend::process_upload(Arc::clone(&processor), file_backend, args.file.clone()).await?;
    tracing::info!(
        "Processed {} ({} chars, {} tables)",
        args.file.display(),
        document.text.len(),
        document.tables.len()
    );

    // 5. Optional job description scoring
    let job_description = match (&args.job_description, &args.job_file) {
        (Some(jd), _) => Some(jd.clone()),
        (None, Some(path)) => Some(tokio::fs::read_to_string(path).await?),
        (None, None) => None,
    };
    let job_match = job_description.map(|jd| {
        let result = processor.score_against_job(&document.text, &jd);
        tracing::info!(
            "Job match: {}% ({} skills)",
            result.match_percentage,
            result.matching_skills.len()
        );
        result
    });

    let stem = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    // 6. Debug annotation
    if args.debug {
        let debug_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("./output"))
            .join("debug");
        std::fs::create_dir_all(&debug_dir)?;
        let debug_path = debug_dir.join(format!("{}_annotated.html", stem));
        if let Err(e) = utils::html_debug::create_debug_html(&document.text, &debug_path, processor.assembler()) {
            tracing::warn!("Failed to create debug HTML: {}", e);
        }
    }

    let report = ExtractionReport { document, job_match };

    // 7. Save or print the report
    match &args.output_dir {
        Some(dir) => {
            let storage = StorageManager::new(dir)?;
            let path = storage.save_report(&stem, &report)?;
            tracing::info!("Saved report to: {}", path.display());
            match storage.save_report_metadata(&stem, &report) {
                Ok(path) => tracing::info!("Saved report metadata to: {}", path.display()),
                Err(e) => tracing::error!("Failed to save report metadata: {}", e),
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
