use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use claims::format::score_label;
use claims::record::{AMOUNT, CATEGORY, FRAUD_RISK, RANK_SCORE};
use claims::{
    ApiError, Bucket, BucketCounts, ClaimDraft, ClaimRecord, InsuranceType, ModelStatus, TrainResponse,
    TrainingFileError, TrainingPreview,
};
use serde_json::Value;


const NO_MODEL: &str = "No model active. Please train the system.";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    TrainingFile(#[from] TrainingFileError),
    #[error("invalid claim: {}", .0.join("; "))]
    InvalidClaim(Vec<String>),
    #[error("No claims to export.")]
    NothingToExport,
    #[error("timestamp formatting failed: {0}")]
    Time(#[from] time::error::Format),
}

#[derive(Parser, Debug)]
#[command(name = "claims-cli", about = "Insurance claims intake and review CLI")]
struct Cli {
    #[arg(long, env = "CLAIMS_API_BASE", default_value = claims::DEFAULT_API_BASE)]
    base_url: String,

    /// Log requests and responses to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    client: reqwest::Client,
}

impl CliContext {
    fn url(&self, path: &str) -> String {
        claims::endpoint_url(&self.base_url, path)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the active model status.
    Status,
    /// List claims in one bucket, highest rank first.
    List(ListArgs),
    /// Submit a claim.
    Submit(SubmitArgs),
    /// Validate a training CSV and print its preview without uploading.
    Preview { file: PathBuf },
    /// Upload a training CSV and retrain the model.
    Train { file: PathBuf },
    /// Export one bucket to CSV.
    Export(ExportArgs),
    /// Delete a claim by customer id and timestamp.
    Delete {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        timestamp: String,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, value_parser = parse_bucket, default_value = "manual")]
    bucket: Bucket,

    /// Print the raw records as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long, value_parser = parse_bucket, default_value = "manual")]
    bucket: Bucket,

    /// Output path; defaults to `claims_export_<timestamp>.csv`.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long, value_parser = parse_insurance_type, default_value = "Health")]
    insurance_type: InsuranceType,
    #[arg(long)]
    policy_number: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    date_of_incident: String,
    #[arg(long)]
    amount: String,
    #[arg(long, default_value = "1")]
    tenure: String,
    #[arg(long)]
    location: String,
    #[arg(long)]
    description: String,
}

impl SubmitArgs {
    fn into_draft(self) -> ClaimDraft {
        ClaimDraft {
            insurance_type: self.insurance_type,
            policy_number: self.policy_number,
            email: self.email,
            date_of_incident: self.date_of_incident,
            claim_amount: self.amount,
            tenure: self.tenure,
            location: self.location,
            description: self.description,
            attachment_name: None,
        }
    }
}

fn parse_bucket(raw: &str) -> Result<Bucket, String> {
    Bucket::parse(raw).ok_or_else(|| format!("unknown bucket `{raw}` (expected manual, authentic, or fraud)"))
}

fn parse_insurance_type(raw: &str) -> Result<InsuranceType, String> {
    InsuranceType::parse(raw).ok_or_else(|| format!("unknown insurance type `{raw}` (expected Health, Accident, or Theft)"))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    let ctx = CliContext { base_url: cli.base_url.trim_end_matches('/').to_owned(), client: reqwest::Client::new() };

    if let Err(e) = run(&ctx, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Status => run_status(ctx).await,
        Command::List(args) => run_list(ctx, args).await,
        Command::Submit(args) => run_submit(ctx, args).await,
        Command::Preview { file } => run_preview(&file).await.map(|_| ()),
        Command::Train { file } => run_train(ctx, &file).await,
        Command::Export(args) => run_export(ctx, args).await,
        Command::Delete { customer_id, timestamp } => run_delete(ctx, &customer_id, &timestamp).await,
    }
}

async fn run_status(ctx: &CliContext) -> Result<(), CliError> {
    let body = read_json(ctx.client.get(ctx.url(claims::MODEL_STATUS_PATH)).send().await?).await?;
    let status: ModelStatus = serde_json::from_value(body)?;
    println!("{}", status_report(&status));
    Ok(())
}

async fn run_list(ctx: &CliContext, args: ListArgs) -> Result<(), CliError> {
    let records = fetch_claims(ctx).await?;
    let visible = claims::filter_ranked(&records, args.bucket);
    if args.json {
        let rows: Vec<&serde_json::Map<String, Value>> = visible.iter().map(|r| r.fields()).collect();
        print_json(&serde_json::to_value(rows)?)?;
        return Ok(());
    }

    let counts = BucketCounts::tally(&records);
    println!("{} ({} of {})", args.bucket.label(), counts.get(args.bucket), counts.total());
    if visible.is_empty() {
        println!("No claims in this category.");
        return Ok(());
    }
    for record in visible {
        println!("{}", table_row(record));
    }
    Ok(())
}

async fn run_submit(ctx: &CliContext, args: SubmitArgs) -> Result<(), CliError> {
    let draft = args.into_draft();
    let problems = draft.problems();
    if !problems.is_empty() {
        return Err(CliError::InvalidClaim(problems));
    }

    let submission = draft.to_submission();
    tracing::debug!(customer_id = %submission.customer_id, "submitting claim");
    let body = read_json(ctx.client.post(ctx.url(claims::CLAIMS_PATH)).json(&submission).send().await?).await?;
    print_json(&body)
}

async fn run_preview(file: &Path) -> Result<(String, Vec<u8>), CliError> {
    let file_name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    claims::training::check_file_name(&file_name)?;
    let bytes = tokio::fs::read(file).await?;
    let preview = TrainingPreview::parse(&String::from_utf8_lossy(&bytes))?;
    println!("{}", preview_report(&file_name, &preview));
    Ok((file_name, bytes))
}

async fn run_train(ctx: &CliContext, file: &Path) -> Result<(), CliError> {
    let (file_name, bytes) = run_preview(file).await?;

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name).mime_str("text/csv")?;
    let form = reqwest::multipart::Form::new().part(claims::endpoint::TRAIN_FILE_FIELD, part);
    let body = read_json(ctx.client.post(ctx.url(claims::TRAIN_PATH)).multipart(form).send().await?).await?;
    let response: TrainResponse = serde_json::from_value(body)?;

    println!("Training Complete!");
    println!("{}", status_report(&ModelStatus::trained(response.meta)));
    Ok(())
}

async fn run_export(ctx: &CliContext, args: ExportArgs) -> Result<(), CliError> {
    let records = fetch_claims(ctx).await?;
    let visible = claims::filter_ranked(&records, args.bucket);
    let csv = claims::export_csv(&visible).ok_or(CliError::NothingToExport)?;

    let path = match args.output {
        Some(path) => path,
        None => PathBuf::from(claims::export_filename(&now_iso()?)),
    };
    tokio::fs::write(&path, csv).await?;
    println!("wrote {} claims to {}", visible.len(), path.display());
    Ok(())
}

async fn run_delete(ctx: &CliContext, customer_id: &str, timestamp: &str) -> Result<(), CliError> {
    let request = ctx
        .client
        .delete(ctx.url(claims::CLAIMS_PATH))
        .query(&[("customer_id", customer_id), ("timestamp", timestamp)]);
    let body = read_json(request.send().await?).await?;
    print_json(&body)
}

async fn fetch_claims(ctx: &CliContext) -> Result<Vec<ClaimRecord>, CliError> {
    let body = read_json(ctx.client.get(ctx.url(claims::CLAIMS_PATH)).send().await?).await?;
    match body {
        Value::Array(items) => Ok(items.into_iter().filter_map(ClaimRecord::from_value).collect()),
        other => Err(ApiError::Decode(format!("expected a JSON array of claims, got {other}")).into()),
    }
}

/// Decode a response body, turning non-2xx statuses into rejections.
async fn read_json(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.json::<Value>().await.ok();
    tracing::debug!(%url, status = status.as_u16(), "response");

    if !status.is_success() {
        return Err(ApiError::rejected(status.as_u16(), body.as_ref()).into());
    }
    body.ok_or_else(|| ApiError::Decode(format!("{url} returned a non-JSON body")).into())
}

fn status_report(status: &ModelStatus) -> String {
    if !status.active {
        return NO_MODEL.to_owned();
    }
    let meta = status.meta.clone().unwrap_or_default();
    format!(
        "Active\nTrained At: {}\nTraining Count: {}",
        meta.timestamp.unwrap_or_default(),
        meta.training_count.map(|n| n.to_string()).unwrap_or_default()
    )
}

fn table_row(record: &ClaimRecord) -> String {
    [
        record.customer_id(),
        score_label(record.authenticity_score()),
        score_label(record.priority_score()),
        score_label(record.number(RANK_SCORE)),
        record.text(CATEGORY),
        format!("${}", record.text(AMOUNT)),
        record.text(FRAUD_RISK),
    ]
    .join("\t")
}

fn preview_report(file_name: &str, preview: &TrainingPreview) -> String {
    let mut lines = vec![format!("{file_name}: {} records", preview.record_count), preview.headers.join(",")];
    lines.extend(preview.rows.iter().map(|row| row.join(",")));
    lines.extend(preview.warnings().into_iter().map(|w| format!("warning: {w}")));
    lines.join("\n")
}

fn now_iso() -> Result<String, CliError> {
    Ok(time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
