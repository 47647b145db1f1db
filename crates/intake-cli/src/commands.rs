use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::info;

use intake_engine::{Session, SubmitOutcome};
use intake_model::{FieldValue, FormState, QuestionnaireDefinition};
use intake_relay::{HttpRelay, Relay, RelayConfig};
use intake_report::{SubmitMeta, format_submission};
use intake_schemas::SchemaRegistry;
use intake_validate::validate_submission;

use crate::answers::load_answers;
use crate::cli::{CheckArgs, PreviewArgs, SendArgs, ShowArgs};
use crate::summary::{apply_table_style, print_issue_table};

pub fn run_variants() -> Result<()> {
    let registry = SchemaRegistry::load().context("load embedded variants")?;
    let mut table = Table::new();
    table.set_header(vec!["Variant", "Title", "Sections", "Questions", "Consent"]);
    apply_table_style(&mut table);
    for definition in registry.variants() {
        table.add_row(vec![
            definition.id.clone(),
            definition.title.clone(),
            definition.sections.len().to_string(),
            definition.question_count().to_string(),
            if definition.consent.is_some() { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let registry = SchemaRegistry::load().context("load embedded variants")?;
    let definition = lookup(&registry, &args.variant)?;

    println!("{} ({})", definition.title, definition.id);
    for section in &definition.sections {
        println!("\n{}", section.title);
        let mut table = Table::new();
        table.set_header(vec!["Question", "Label", "Kind", "Required", "Shown when"]);
        apply_table_style(&mut table);
        for question in &section.questions {
            let shown_when = question
                .reveal
                .as_ref()
                .map(|reveal| format!("{} = {}", reveal.question, reveal.equals))
                .unwrap_or_else(|| "always".to_string());
            table.add_row(vec![
                question.id.clone(),
                question.label.clone(),
                question.kind.to_string(),
                if question.required { "yes" } else { "no" }.to_string(),
                shown_when,
            ]);
        }
        println!("{table}");
    }
    if let Some(consent) = &definition.consent {
        println!("\nConsent clause: {}", consent.prompt);
    }
    Ok(())
}

/// Returns the process exit code: 0 for a clean report, 1 for a dirty one.
pub fn run_check(args: &CheckArgs) -> Result<i32> {
    let registry = SchemaRegistry::load().context("load embedded variants")?;
    let definition = lookup(&registry, &args.variant)?;
    let answers = load_answers(&args.answers)?;

    let report = validate_submission(definition, &answers);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        );
    } else if report.is_clean() {
        println!("{}: answers are complete", definition.id);
    } else {
        print_issue_table(&report);
    }
    Ok(if report.is_clean() { 0 } else { 1 })
}

pub fn run_preview(args: &PreviewArgs) -> Result<i32> {
    let registry = SchemaRegistry::load().context("load embedded variants")?;
    let definition = lookup(&registry, &args.variant)?;
    let answers = load_answers(&args.answers)?;

    // Preview renders even a dirty state, but says so.
    let report = validate_submission(definition, &answers);
    if !report.is_clean() {
        print_issue_table(&report);
        println!();
    }

    let meta = submit_meta(args.source_page.as_deref(), &definition.id);
    let document = format_submission(definition, &answers, &meta);
    println!("Subject: {}", document.subject);
    println!("Category: {}", document.category);
    println!("Reply-to: {}", document.reply_to);
    println!();
    print!("{}", document.body);
    Ok(if report.is_clean() { 0 } else { 1 })
}

pub fn run_send(args: &SendArgs) -> Result<i32> {
    let registry = SchemaRegistry::load().context("load embedded variants")?;
    let definition = lookup(&registry, &args.variant)?.clone();
    let answers = load_answers(&args.answers)?;

    let relay = HttpRelay::new(RelayConfig {
        endpoint: args.endpoint.clone(),
        access_key: args.access_key.clone(),
    });
    let mut session = Session::new(definition, relay);
    apply_answers(&mut session, &answers);

    let meta = submit_meta(args.source_page.as_deref(), &args.variant);
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    info!(variant = %args.variant, endpoint = %args.endpoint, "sending submission");

    match runtime.block_on(session.submit(meta)) {
        SubmitOutcome::Accepted { message } => {
            println!("delivered: {message}");
            Ok(0)
        }
        SubmitOutcome::Rejected(report) => {
            print_issue_table(&report);
            Ok(1)
        }
        SubmitOutcome::Failed { message } => {
            eprintln!("delivery failed: {message}");
            Ok(1)
        }
        SubmitOutcome::InFlight
        | SubmitOutcome::AlreadyCompleted
        | SubmitOutcome::Superseded => {
            eprintln!("submission refused by the session lifecycle");
            Ok(1)
        }
    }
}

fn lookup<'a>(
    registry: &'a SchemaRegistry,
    variant: &str,
) -> Result<&'a QuestionnaireDefinition> {
    registry.get(variant).with_context(|| {
        let known: Vec<&str> = registry.ids().collect();
        format!("unknown variant '{variant}' (known: {})", known.join(", "))
    })
}

fn submit_meta(source_page: Option<&str>, variant: &str) -> SubmitMeta {
    let source_page = source_page
        .map(str::to_string)
        .unwrap_or_else(|| format!("/questionnaires/{variant}"));
    SubmitMeta::new(source_page, Utc::now())
}

fn apply_answers<R: Relay>(session: &mut Session<R>, answers: &FormState) {
    for (question_id, value) in answers.entries() {
        match value {
            FieldValue::Single(single) => session.set_single(question_id, single.clone()),
            FieldValue::Multi(set) => {
                for option in set.iter() {
                    session.toggle_multi(question_id, option);
                }
            }
        }
    }
    session.set_consent(answers.consent_given());
}
