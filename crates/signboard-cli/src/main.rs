#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use signboard_model::{
    BoardClock, Clipboard, SignupDraft, Slot, SlotDate, SystemClock,
};
use signboard_store::{clone_daily, CloneJob, LocalFsStore, SlotStore};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

#[derive(Parser)]
#[command(name = "signboard")]
#[command(about = "Signboard operations CLI")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Duplicate a template file once per calendar day of an inclusive
    /// range, each copy named by its ISO date.
    CloneDaily {
        #[arg(long)]
        template: PathBuf,
        #[arg(long)]
        dest: PathBuf,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    Slot {
        #[command(subcommand)]
        command: SlotCommand,
    },
    /// Parse every slot file under the root and report record counts.
    Validate {
        #[arg(long)]
        root: PathBuf,
    },
}

#[derive(Subcommand)]
enum SlotCommand {
    Show {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        clipboard: String,
        #[arg(long)]
        date: String,
    },
    /// Append a record from the command line (tablet-less fallback entry).
    Add {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        clipboard: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        operator_id: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

fn main() -> ProcessExitCode {
    match run() {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ProcessExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Commands::CloneDaily {
            template,
            dest,
            start,
            end,
        } => run_clone_daily(template, dest, &start, &end),
        Commands::Slot { command } => match command {
            SlotCommand::Show {
                root,
                clipboard,
                date,
            } => show_slot(root, &clipboard, &date, cli.json),
            SlotCommand::Add {
                root,
                clipboard,
                date,
                name,
                notes,
                operator_id,
                phone,
            } => add_signup(AddSignupArgs {
                root,
                clipboard,
                date,
                name,
                notes,
                operator_id,
                phone,
            }),
        },
        Commands::Validate { root } => validate_root(root, cli.json),
    }
}

fn parse_slot(clipboard: &str, date: &str) -> Result<Slot, String> {
    let clipboard = Clipboard::parse(clipboard).map_err(|e| e.to_string())?;
    let date = SlotDate::parse(date).map_err(|e| e.to_string())?;
    Ok(Slot::new(clipboard, date))
}

fn run_clone_daily(
    template: PathBuf,
    dest: PathBuf,
    start: &str,
    end: &str,
) -> Result<(), String> {
    let job = CloneJob {
        template,
        dest_dir: dest,
        start: SlotDate::parse(start).map_err(|e| e.to_string())?,
        end: SlotDate::parse(end).map_err(|e| e.to_string())?,
    };
    let report = clone_daily(&job).map_err(|e| e.to_string())?;
    for path in &report.created {
        println!("created {}", path.display());
    }
    println!("clone-daily: OK created={}", report.created.len());
    Ok(())
}

fn show_slot(root: PathBuf, clipboard: &str, date: &str, machine_json: bool) -> Result<(), String> {
    let slot = parse_slot(clipboard, date)?;
    let store = LocalFsStore::new(root);
    let records = store.load(&slot).map_err(|e| e.to_string())?;

    if machine_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    println!("slot {}: {} signups", slot.canonical_string(), records.len());
    for (i, record) in records.iter().enumerate() {
        let mut line = format!("{:>3}. {}", i + 1, record.name.as_str());
        if let Some(id) = &record.operator_id {
            line.push_str(&format!(" [{id}]"));
        }
        if let Some(phone) = &record.phone {
            line.push_str(&format!(" ({phone})"));
        }
        if let Some(notes) = &record.notes {
            line.push_str(&format!(" - {notes}"));
        }
        line.push_str(&format!(" @ {}", record.signed_up_at.format("%Y-%m-%d %H:%M")));
        println!("{line}");
    }
    Ok(())
}

struct AddSignupArgs {
    root: PathBuf,
    clipboard: String,
    date: String,
    name: String,
    notes: Option<String>,
    operator_id: Option<String>,
    phone: Option<String>,
}

fn add_signup(args: AddSignupArgs) -> Result<(), String> {
    let slot = parse_slot(&args.clipboard, &args.date)?;
    let draft = SignupDraft {
        name: args.name,
        notes: args.notes,
        operator_id: args.operator_id,
        phone: args.phone,
    };
    let record = draft
        .into_record(SystemClock.now())
        .map_err(|e| e.to_string())?;

    let store = LocalFsStore::new(args.root);
    let count = store.append(&slot, record).map_err(|e| e.to_string())?;
    println!("slot {}: {} signups", slot.canonical_string(), count);
    Ok(())
}

fn validate_root(root: PathBuf, machine_json: bool) -> Result<(), String> {
    let store = LocalFsStore::new(root);
    let slots = store.list_slots().map_err(|e| e.to_string())?;

    let mut counts = Vec::with_capacity(slots.len());
    for slot in &slots {
        let records = store
            .load(slot)
            .map_err(|e| format!("slot {}: {e}", slot.canonical_string()))?;
        counts.push((slot.canonical_string(), records.len()));
    }

    if machine_json {
        let payload: Vec<serde_json::Value> = counts
            .iter()
            .map(|(slot, count)| serde_json::json!({"slot": slot, "count": count}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    for (slot, count) in &counts {
        println!("slot {slot}: {count} records");
    }
    println!("validate: OK slots={}", counts.len());
    Ok(())
}
