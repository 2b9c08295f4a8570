#![forbid(unsafe_code)]
use anyhow::{anyhow, Result};
use chrono::{Datelike, Utc, Weekday};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use sked::{
    io,
    render::{CalendarRenderer, ScheduleRenderer, TextRenderer},
    scheduler::{ConflictKind, Scheduler},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de rotation hebdomadaire (état dans un fichier JSON)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'état (roster + planning)
    #[arg(long, global = true, default_value = "sked-state.json")]
    state: String,

    /// Fuseau IANA pour la saisie et l'affichage
    #[arg(long, global = true, default_value = "UTC")]
    tz: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne
    Add {
        name: String,
        /// Ordre de départage à priorité égale
        #[arg(default_value_t = 0)]
        order: i32,
    },

    /// Retirer une personne
    Remove { name: String },

    /// Lister les personnes
    List,

    /// Déclarer une indisponibilité: <[YYYY]MMDD[HH]> [--to <[YYYY]MMDD[HH]>]
    Unavail {
        name: String,
        from: String,
        #[arg(long)]
        to: Option<String>,
    },

    /// (Re)construire le planning
    Build {
        /// Début (défaut: maintenant)
        #[arg(long)]
        from: Option<String>,
        /// Horizon en semaines
        #[arg(long)]
        weeks: Option<u32>,
        /// Jour de début des créneaux (Mon, Tue, Wed, ...)
        #[arg(long)]
        anchor: Option<String>,
    },

    /// Afficher le planning (le construit s'il n'existe pas)
    Schedule,

    /// Qui est de garde en ce moment
    Current,

    /// Éditer le planning: <name> <[YYYY]MMDD[HH]> <[YYYY]MMDD[HH]>
    Edit {
        name: String,
        from: String,
        to: String,
    },

    /// Afficher le planning en calendrier
    Calendar,

    /// Vérifier le planning
    Check,

    /// Importer des personnes depuis un CSV
    ImportPeople {
        #[arg(long)]
        csv: String,
    },

    /// Exporter le planning en CSV
    Export {
        #[arg(long)]
        csv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let tz: Tz = cli
        .tz
        .parse()
        .map_err(|_| anyhow!("unknown time zone: {}", cli.tz))?;
    let now = Utc::now().with_timezone(&tz);
    let year = now.year();

    let storage = JsonStorage::open(&cli.state)?;
    let mut scheduler = Scheduler::from_state(storage.load()?);

    let code = match cli.cmd {
        Commands::Add { name, order } => {
            scheduler.add_person(&name, order)?;
            storage.save(scheduler.state())?;
            println!("{name} added with ordering {order}");
            0
        }
        Commands::Remove { name } => {
            scheduler.remove_person(&name)?;
            storage.save(scheduler.state())?;
            println!("'{name}' was removed from the list!");
            0
        }
        Commands::List => {
            let mut names: Vec<&str> = scheduler.people().iter().map(|p| p.id.as_str()).collect();
            names.sort_unstable();
            if names.is_empty() {
                println!("List is empty");
            } else {
                println!("{}", names.join(", "));
            }
            0
        }
        Commands::Unavail { name, from, to } => {
            let (start, end) = io::parse_span(&from, to.as_deref(), &tz, year)?;
            scheduler.mark_unavailable(&name, start, end)?;
            storage.save(scheduler.state())?;
            println!("Recorded: {name} is unavailable from {start} to {end}");
            0
        }
        Commands::Build {
            from,
            weeks,
            anchor,
        } => {
            let mut options = scheduler.options();
            if let Some(weeks) = weeks {
                options.weeks = weeks;
            }
            if let Some(raw) = anchor {
                options.anchor = raw
                    .parse::<Weekday>()
                    .map_err(|_| anyhow!("invalid weekday: {raw}"))?;
            }
            scheduler.set_options(options);
            let start = match from {
                Some(raw) => io::parse_when(&raw, &tz, year)?.0,
                None => now,
            };
            let report = scheduler.build_from(&start)?;
            for warning in report.warnings() {
                eprintln!("Warning: {warning}");
            }
            storage.save(scheduler.state())?;
            println!("{}", TextRenderer::new(tz).render(scheduler.schedule()));
            if report.is_complete() {
                0
            } else {
                2
            }
        }
        Commands::Schedule => {
            if scheduler.schedule().is_empty() {
                let report = scheduler.build_from(&now)?;
                for warning in report.warnings() {
                    eprintln!("Warning: {warning}");
                }
                storage.save(scheduler.state())?;
            }
            println!("{}", TextRenderer::new(tz).render(scheduler.schedule()));
            0
        }
        Commands::Current => {
            println!("{}", scheduler.current_assignment()?);
            0
        }
        Commands::Edit { name, from, to } => {
            let (start, _) = io::parse_when(&from, &tz, year)?;
            let (end, _) = io::parse_when(&to, &tz, year)?;
            scheduler.edit_shift(&name, start, end)?;
            storage.save(scheduler.state())?;
            println!("Schedule was edited");
            0
        }
        Commands::Calendar => {
            let weeks = scheduler.options().weeks;
            println!("{}", CalendarRenderer::new(tz, weeks).render(scheduler.schedule()));
            0
        }
        Commands::Check => {
            let conflicts = scheduler.detect_conflicts();
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                for c in &conflicts {
                    let kind = match &c.kind {
                        ConflictKind::OutOfOrder => "out of order".to_string(),
                        ConflictKind::Overlap => "overlaps previous shift".to_string(),
                        ConflictKind::Unassigned => "unassigned".to_string(),
                        ConflictKind::UnknownWorker(id) => format!("unknown worker {id}"),
                        ConflictKind::Unavailable(id) => format!("{id} is unavailable"),
                    };
                    println!("#{} {}: {}", c.index, c.interval, kind);
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::ImportPeople { csv } => {
            for person in io::import_people_csv(csv)? {
                scheduler.add_person(person.id.as_str(), person.order_num)?;
                for interval in person.unavailability {
                    scheduler.mark_unavailable(person.id.as_str(), interval.start(), interval.end())?;
                }
            }
            storage.save(scheduler.state())?;
            0
        }
        Commands::Export { csv } => {
            io::export_schedule_csv(csv, scheduler.schedule())?;
            0
        }
    };

    std::process::exit(code);
}
