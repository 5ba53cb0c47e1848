//! Command-line front end for the routine store.
//!
//! Opens (or creates) a SQLite routine file, applies one command and prints
//! the result as plain text.

mod cli;

use std::error::Error;
use std::fs;
use std::process::ExitCode;

use cli::{Args, Command, DraftArgs};
use routine_core::db::open_db;
use routine_core::{
    default_log_level, encode_stored_range, init_logging, ClockFormat, EventColor, EventDraft,
    RoutineService, TimelineConfig, TimelineView,
};
use uuid::Uuid;

fn main() -> ExitCode {
    let args = cli::parse(std::env::args().skip(1).collect());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &args.log_dir {
        init_logging(default_log_level(), log_dir)?;
    }

    let config = match &args.config_path {
        Some(path) => TimelineConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => TimelineConfig::default(),
    };

    let conn = open_db(&args.db_path)?;
    let service = RoutineService::sqlite(&conn);

    match args.command {
        Command::List => {
            let state = service.load_state()?;
            for event in &state.events {
                println!(
                    "{}  {:<20} {:<7} {}",
                    event.id,
                    encode_stored_range(&event.start, &event.end, state.clock),
                    event.color.as_str(),
                    event.display_title()
                );
            }
        }
        Command::Layout => print_timeline(&service.timeline(&config)?),
        Command::Add(draft) => {
            let id = service.save_event(None, &to_draft(draft)?)?;
            println!("created {id}");
        }
        Command::Edit { id, draft } => {
            let id = Uuid::parse_str(&id)?;
            service.save_event(Some(id), &to_draft(draft)?)?;
            println!("updated {id}");
        }
        Command::Delete { id } => {
            let id = Uuid::parse_str(&id)?;
            service.delete_event(id)?;
            println!("deleted {id}");
        }
        Command::Clock { use_24h } => {
            service.set_clock_format(ClockFormat::from_use_24h(use_24h))?;
            println!("clock format set to {}h", if use_24h { 24 } else { 12 });
        }
        Command::ImportLegacy { path } => {
            let report = service.import_legacy(&fs::read_to_string(path)?)?;
            if report.store_was_empty {
                println!(
                    "imported {} events, skipped {}",
                    report.imported, report.skipped
                );
            } else {
                println!("routine already has events; nothing imported");
            }
        }
    }

    Ok(())
}

fn to_draft(args: DraftArgs) -> Result<EventDraft, String> {
    let color = match args.color.as_deref() {
        Some(tag) => EventColor::parse(tag).ok_or_else(|| format!("unknown color '{tag}'"))?,
        None => EventColor::default(),
    };
    Ok(EventDraft::new(args.title, args.start, args.end, color))
}

fn print_timeline(timeline: &TimelineView) {
    println!(
        "view {:02}:00 - {:02}:00 ({} hours)",
        timeline.view.start, timeline.view.end, timeline.grid_cells
    );
    for zone in &timeline.zones {
        println!(
            "zone {:<10} top={:>6.1}px height={:>6.1}px",
            zone.label, zone.top_px, zone.height_px
        );
    }
    for card in &timeline.cards {
        println!(
            "{:<20} left={:>5.1}% width={:>5.1}% top={:>6.1}px height={:>6.1}px{} {}",
            card.time_label,
            card.left_percent,
            card.width_percent,
            card.top_px,
            card.height_px,
            if card.compact { " compact" } else { "" },
            card.title
        );
    }
}
