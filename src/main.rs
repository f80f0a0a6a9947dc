use chrono::Local;
use clap::Parser;
use devdiary::application::{init::init, AppState, ConfigService};
use devdiary::cli::{self, Cli, Commands};
use devdiary::domain::{parse_day, DateRange, EntryForm, FilterSpec, Theme};
use devdiary::error::{DiaryError, Result};
use devdiary::infrastructure::{Config, EditorSession, FileStorage};
use devdiary::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized devdiary journal at {}", path.display());
            Ok(())
        }
        Commands::New {
            title,
            content,
            tags,
            favorite,
        } => {
            let storage = FileStorage::discover()?;
            let mut form = EntryForm {
                title,
                content,
                tags: Some(tags),
                favorite: Some(favorite),
            };
            if form.content.is_none() {
                form.validate_title()?;
                form.content = Some(compose(&storage, "")?);
            }
            let new_entry = form.validate()?;

            let mut state = AppState::open(storage);
            let entry = state.journal.create(new_entry)?;
            println!("Created entry {}", entry.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            tags,
            clear_tags,
            favorite,
            unfavorite,
        } => {
            let storage = FileStorage::discover()?;
            let mut state = AppState::open(storage.clone());
            let Some(id) = resolve(&state, &id)? else {
                return Ok(());
            };

            let mut form = EntryForm {
                title,
                content,
                tags: if clear_tags {
                    Some(Vec::new())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(tags)
                },
                favorite: if favorite {
                    Some(true)
                } else if unfavorite {
                    Some(false)
                } else {
                    None
                },
            };
            if form.title.is_none()
                && form.content.is_none()
                && form.tags.is_none()
                && form.favorite.is_none()
            {
                let current = state
                    .journal
                    .get(&id)
                    .map(|e| e.content.clone())
                    .unwrap_or_default();
                form.content = Some(compose(&storage, &current)?);
            }

            let update = form.validate_update()?;
            state.journal.update(&id, update)?;
            println!("Updated entry {}", cli::short_id(&id));
            Ok(())
        }
        Commands::Delete { id } => {
            let mut state = AppState::open(FileStorage::discover()?);
            let Some(id) = resolve(&state, &id)? else {
                return Ok(());
            };
            state.journal.delete(&id)?;
            println!("Deleted entry {}", cli::short_id(&id));
            Ok(())
        }
        Commands::Fav { id } => {
            let mut state = AppState::open(FileStorage::discover()?);
            let Some(id) = resolve(&state, &id)? else {
                return Ok(());
            };
            state.journal.toggle_favorite(&id)?;
            let favorite = state.journal.get(&id).is_some_and(|e| e.favorite);
            if favorite {
                println!("Added {} to favorites", cli::short_id(&id));
            } else {
                println!("Removed {} from favorites", cli::short_id(&id));
            }
            Ok(())
        }
        Commands::Show { id } => {
            let state = AppState::open(FileStorage::discover()?);
            let Some(id) = resolve(&state, &id)? else {
                return Ok(());
            };
            if let Some(entry) = state.journal.get(&id) {
                print!("{}", cli::format_entry_detail(entry, &Local));
            }
            Ok(())
        }
        Commands::List {
            search,
            tags,
            from,
            to,
            favorites,
            json,
        } => {
            let spec = FilterSpec {
                search_term: search,
                tags,
                date_range: DateRange {
                    start: from.as_deref().map(parse_day).transpose()?,
                    end: to.as_deref().map(parse_day).transpose()?,
                },
                favorites_only: favorites,
            };

            let state = AppState::open(FileStorage::discover()?);
            let visible = state.visible(&spec);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible.entries)?);
            } else if visible.entries.is_empty() {
                println!("{}", cli::empty_message(visible.filtered));
            } else {
                print!(
                    "{}",
                    cli::format_entry_list(&visible.entries, &Local::now())
                );
            }
            Ok(())
        }
        Commands::Tags => {
            let state = AppState::open(FileStorage::discover()?);
            println!("{}", cli::format_tag_list(&state.journal.all_tags()).trim_end());
            Ok(())
        }
        Commands::Theme { value } => {
            let mut state = AppState::open(FileStorage::discover()?);
            let value = value.map(|v| v.trim().to_lowercase());
            let theme = match value.as_deref() {
                None => state.theme.current(),
                Some("toggle") => state.theme.toggle()?,
                Some(name) => {
                    let theme: Theme = name.parse().map_err(DiaryError::Config)?;
                    state.theme.set(theme)?;
                    theme
                }
            };
            println!("{}", theme);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileStorage::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: devdiary config [--list | <key> [<value>]]");
                println!("Valid keys: editor, created");
                Ok(())
            }
        }
    }
}

/// Expand an id prefix; unknown ids are reported and left alone
fn resolve(state: &AppState<FileStorage>, id: &str) -> Result<Option<String>> {
    let resolved = state.journal.resolve_id(id)?;
    if resolved.is_none() {
        println!("No entry matches '{}'", id);
    }
    Ok(resolved)
}

/// Write entry text in the configured editor
fn compose(storage: &FileStorage, initial: &str) -> Result<String> {
    let config = Config::load_from_dir(&storage.root)?;
    EditorSession::new(config.get_editor()).capture(&storage.data_dir(), initial)
}
