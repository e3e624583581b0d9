use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use qtrack::api::TrackerApi;
use qtrack::error::{Result, TrackerError};
use qtrack::model::{Difficulty, Theme};
use qtrack::store::fs::FileStore;
use qtrack::view::{Progress, QuestionView};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = TrackerApi::new(FileStore::new(data_dir()));

    match cli.command {
        Some(Commands::Topics) | None => handle_topics(&api),
        Some(Commands::List { topic }) => handle_list(&mut api, topic),
        Some(Commands::Add {
            topic,
            title,
            link,
            difficulty,
        }) => handle_add(&mut api, topic, title, link, difficulty),
        Some(Commands::Remove { topic, id }) => handle_remove(&mut api, topic, id),
        Some(Commands::Toggle { id }) => handle_toggle(&mut api, id),
        Some(Commands::Theme { theme }) => handle_theme(&mut api, theme),
    }
}

fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("QTRACK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "qtrack", "qtrack").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_topics(api: &TrackerApi<FileStore>) -> Result<()> {
    let topics = api.list_topics();
    let name_width = topics.iter().map(|t| t.topic.width()).max().unwrap_or(0);

    for entry in &topics {
        let progress = api.progress(&entry.topic);
        let padding = " ".repeat(name_width.saturating_sub(entry.topic.width()));
        println!(
            "{}{}  {:>3}  {}",
            entry.topic.bold(),
            padding,
            entry.count,
            format_progress(&progress).dimmed()
        );
    }
    Ok(())
}

fn handle_list(api: &mut TrackerApi<FileStore>, topic: Option<String>) -> Result<()> {
    if let Some(topic) = topic {
        api.select_topic(&topic);
    }
    let progress = api.progress(api.selected_topic());
    println!(
        "{}  {}",
        api.selected_topic().bold(),
        format_progress(&progress).dimmed()
    );

    let views = api.display_selected();
    if views.is_empty() {
        println!("No questions yet.");
        return Ok(());
    }
    print_questions(&views);
    Ok(())
}

fn handle_add(
    api: &mut TrackerApi<FileStore>,
    topic: String,
    title: String,
    link: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    // Out-of-range difficulty falls back to the default rather than erroring
    let difficulty: Difficulty = difficulty
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let added = api.add_question(&topic, &title, link.as_deref().unwrap_or(""), difficulty)?;
    match added {
        Some(q) => println!("{}", format!("Added to {}: {}", topic, q.title).green()),
        None => println!("{}", "Nothing added: title is empty.".yellow()),
    }
    Ok(())
}

fn handle_remove(api: &mut TrackerApi<FileStore>, topic: String, id: String) -> Result<()> {
    let id = parse_id(&id)?;
    api.remove_question(&topic, &id)?;
    println!("{}", format!("Removed from {}.", topic).green());
    Ok(())
}

fn handle_toggle(api: &mut TrackerApi<FileStore>, id: String) -> Result<()> {
    let id = parse_id(&id)?;
    api.toggle_solved(&id)?;
    if api.is_solved(&id) {
        println!("{}", "Marked solved.".green());
    } else {
        println!("Marked unsolved.");
    }
    Ok(())
}

fn handle_theme(api: &mut TrackerApi<FileStore>, theme: Option<String>) -> Result<()> {
    match theme {
        None => println!("{}", api.current_theme()),
        Some(raw) => {
            let theme: Theme = raw
                .parse()
                .map_err(TrackerError::Api)?;
            api.set_theme(theme)?;
            println!("{}", format!("Theme set to {}.", theme).green());
        }
    }
    Ok(())
}

fn parse_id(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|_| TrackerError::Api(format!("Invalid question id: {}", s)))
}

fn format_progress(p: &Progress) -> String {
    format!("{} / {} solved • {}%", p.solved, p.total, p.percent)
}

const TITLE_WIDTH: usize = 40;

fn print_questions(views: &[QuestionView]) {
    for view in views {
        let q = &view.question;
        let marker = if view.solved {
            "✓".green()
        } else {
            " ".normal()
        };

        let title = truncate_to_width(&q.title, TITLE_WIDTH);
        let padding = " ".repeat(TITLE_WIDTH.saturating_sub(title.width()));

        let difficulty = match q.difficulty {
            Difficulty::Easy => "Easy  ".green(),
            Difficulty::Medium => "Medium".yellow(),
            Difficulty::Hard => "Hard  ".red(),
        };

        println!(
            "{} {}{}  {}  {}  {}",
            marker,
            title,
            padding,
            difficulty,
            format_time_ago(q.date_added).dimmed(),
            q.id.to_string().dimmed()
        );
        if !q.link.is_empty() {
            println!("   {}", q.link.as_str().blue());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

const TIME_WIDTH: usize = 14;

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
