use chrono::Local;
use clap::Parser;
use colored::*;
use console::Term;
use preamble::api::{BlogDraft, BlogMeta, BlogPlan, CmdMessage, DiaryDraft, MessageLevel, PreambleApi};
use preamble::chat::ChatClient;
use preamble::config::ModelsConfig;
use preamble::error::Result;
use preamble::model::ContentKind;
use preamble::store::fs::FileStore;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

mod args;
mod prompt;
use args::{Cli, Commands, KindArg, ScaffoldArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {
        command,
        root,
        models,
    } = Cli::parse();
    let mut api = PreambleApi::new(FileStore::new(root));

    match command {
        Commands::Process {
            kind: KindArg::Blog,
            auto,
        } => handle_process_blog(&mut api, models.as_deref(), auto),
        Commands::Process {
            kind: KindArg::Diary,
            ..
        }
        | Commands::Stamp => handle_stamp(&mut api),
        Commands::New { kind, scaffold } => handle_new(&mut api, kind, scaffold),
    }
}

fn handle_process_blog(
    api: &mut PreambleApi<FileStore>,
    models: Option<&Path>,
    auto: bool,
) -> Result<()> {
    let client = load_client(models);
    if client.is_none() {
        println!(
            "{}",
            "No model endpoint configured, using rule-based generation.".dimmed()
        );
    }

    let pending = api.pending(ContentKind::Blog)?;
    print_messages(&pending.messages);
    if pending.entries.is_empty() {
        println!("Nothing to process.");
        return Ok(());
    }

    let mut processed = Vec::new();
    for name in &pending.entries {
        // One bad entry never stops the batch.
        match process_entry(api, client.as_ref(), name, auto) {
            Ok(row) => processed.push(row),
            Err(e) => eprintln!("{}", format!("Failed to process {}: {}", name, e).red()),
        }
    }

    if !processed.is_empty() {
        println!(
            "\n{}",
            format!("Processed {} entries:", processed.len()).green()
        );
        print_report(&processed);
    }
    Ok(())
}

fn process_entry(
    api: &mut PreambleApi<FileStore>,
    client: Option<&ChatClient>,
    name: &str,
    auto: bool,
) -> Result<(String, String)> {
    let plan = api.plan_blog(client, name, Local::now())?;
    println!("\n{} {}", "Processing".bold(), name);
    println!("  title: {}", plan.title);
    println!(
        "  file:  {} ({})",
        plan.new_name,
        plan.strategy.label().dimmed()
    );

    let meta = if auto {
        let (tags, summary) = api.suggest_meta(client, &plan.title, &plan.body);
        println!("  tags: {}", tags.join(", "));
        println!("  summary: {}", summary);
        BlogMeta {
            tags,
            summary,
            weather: Some("晴".to_string()),
            rating: Some(3),
            draft: false,
        }
    } else {
        prompt_blog_meta(api, client, &plan)?
    };

    let result = api.apply_blog(&plan, &meta)?;
    print_messages(&result.messages);
    let final_name = result
        .entries
        .first()
        .cloned()
        .unwrap_or_else(|| plan.new_name.clone());
    Ok((name.to_string(), final_name))
}

fn prompt_blog_meta(
    api: &PreambleApi<FileStore>,
    client: Option<&ChatClient>,
    plan: &BlogPlan,
) -> Result<BlogMeta> {
    let term = Term::stdout();
    let preview: String = plan.body.chars().take(100).collect();
    println!("  {}", preview.replace('\n', " ").dimmed());

    // Both suggestions come from one generation pass; only run it if the
    // user actually declines manual entry somewhere.
    let mut suggestion: Option<(Vec<String>, String)> = None;

    let tags: Vec<String> = if prompt::confirm(&term, "Enter tags manually?", false)? {
        let raw = prompt::input(&term, "Tags (comma separated, up to 3)", Some("随笔"))?;
        parse_tags(&raw, &["随笔"]).into_iter().take(3).collect()
    } else {
        let (tags, _) = suggestion
            .get_or_insert_with(|| api.suggest_meta(client, &plan.title, &plan.body))
            .clone();
        println!("  generated tags: {}", tags.join(", "));
        tags
    };

    let summary: String = if prompt::confirm(&term, "Enter summary manually?", false)? {
        let raw = prompt::input(&term, "Summary (30 chars max)", None)?;
        raw.chars().take(30).collect()
    } else {
        let (_, summary) = suggestion
            .get_or_insert_with(|| api.suggest_meta(client, &plan.title, &plan.body))
            .clone();
        println!("  generated summary: {}", summary);
        summary
    };

    let (weather, rating) = if prompt::confirm(&term, "Add weather and mood rating?", false)? {
        let weather = prompt::input(&term, "Weather (text or emoji)", Some("晴"))?;
        let rating = prompt::rating(&term, None)?;
        (Some(weather), Some(rating))
    } else {
        (None, None)
    };

    Ok(BlogMeta {
        tags,
        summary,
        weather,
        rating,
        draft: false,
    })
}

fn handle_stamp(api: &mut PreambleApi<FileStore>) -> Result<()> {
    let result = api.stamp(ContentKind::Diary)?;
    print_report(&result.details);
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(
    api: &mut PreambleApi<FileStore>,
    kind: KindArg,
    args: ScaffoldArgs,
) -> Result<()> {
    let term = Term::stdout();
    let now = Local::now();

    let result = match kind {
        KindArg::Blog => {
            let title = prompt::preset_or_input(&term, args.title, "Title", None)?;
            let default_summary: String = title.chars().take(30).collect();
            let summary = prompt::preset_or_input(
                &term,
                args.summary,
                "Summary (30 chars max)",
                Some(&default_summary),
            )?;
            let tags_raw =
                prompt::preset_or_input(&term, args.tags, "Tags (comma separated)", Some("随笔"))?;
            let tags = parse_tags(&tags_raw, &["随笔"]);
            let weather =
                prompt::preset_or_input(&term, args.weather, "Weather (text or emoji)", Some("☀️"))?;
            let mood =
                prompt::preset_or_input(&term, args.mood, "Mood (text or emoji)", Some("😊"))?;
            let rating = prompt::rating(&term, args.rating)?;
            let draft = BlogDraft {
                title,
                summary,
                tags,
                weather,
                mood,
                rating,
                filename: args.filename,
                draft: args.draft,
            };
            api.scaffold_blog(&draft, now)?
        }
        KindArg::Diary => {
            let title = match args.title {
                Some(t) => Some(t),
                None => {
                    let t = prompt::input_allow_empty(&term, "Title (optional)")?;
                    if t.is_empty() { None } else { Some(t) }
                }
            };
            let weather =
                prompt::preset_or_input(&term, args.weather, "Weather (text or emoji)", Some("☀️"))?;
            let mood =
                prompt::preset_or_input(&term, args.mood, "Mood (text or emoji)", Some("😊"))?;
            let rating = prompt::rating(&term, args.rating)?;
            let tags_raw = match args.tags {
                Some(t) => t,
                None => prompt::input_allow_empty(&term, "Tags (optional, comma separated)")?,
            };
            let tags = if tags_raw.trim().is_empty() {
                Vec::new()
            } else {
                parse_tags(&tags_raw, &[])
            };
            let draft = DiaryDraft {
                title,
                weather,
                mood,
                rating,
                tags,
                filename: args.filename,
            };
            api.scaffold_diary(&draft, now)?
        }
    };

    print_messages(&result.messages);
    Ok(())
}

fn load_client(models: Option<&Path>) -> Option<ChatClient> {
    let path = ModelsConfig::discover(models)?;
    let config = match ModelsConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: could not read {}: {}", path.display(), e).yellow()
            );
            return None;
        }
    };
    let endpoint = config.primary()?.clone();
    match ChatClient::new(endpoint) {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: could not build HTTP client: {}", e).yellow()
            );
            None
        }
    }
}

fn parse_tags(raw: &str, fallback: &[&str]) -> Vec<String> {
    let parts: Vec<String> = raw
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        parts
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_report(rows: &[(String, String)]) {
    if rows.is_empty() {
        return;
    }
    let width = rows.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
    for (name, detail) in rows {
        let padding = width.saturating_sub(name.width());
        println!("  {}{}  {}", name, " ".repeat(padding), detail.dimmed());
    }
}
