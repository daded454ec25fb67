use chrono::{Datelike, NaiveDate};
use clap::Parser;
use cosmic_match::adapters::{JsonFileStore, SeededRandom, SystemClock, ThreadRandom};
use cosmic_match::config::{AppConfig, CliConfig, Command, ProfileAction, TimelineAction};
use cosmic_match::core::dates::weekday_name;
use cosmic_match::core::engine::display_score;
use cosmic_match::core::profiles::profile_emoji;
use cosmic_match::core::timeline::EventDraft;
use cosmic_match::core::RandomSource;
use cosmic_match::utils::error::{ErrorSeverity, MatchError};
use cosmic_match::utils::logger;
use cosmic_match::{CompatibilityReport, MatchEngine, PersonSummary, Result};

type CliEngine = MatchEngine<SystemClock, Box<dyn RandomSource>, JsonFileStore>;

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail(&e);
        }
    };

    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Resolved config: {:?}", config);

    let mut engine = build_engine(&config);

    if let Err(e) = run(cli.command, &mut engine) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        fail(&e);
    }
}

fn build_engine(config: &AppConfig) -> CliEngine {
    let rng: Box<dyn RandomSource> = match config.scoring.seed {
        Some(seed) => {
            tracing::info!("🎲 Using fixed seed {}", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    };

    let store = JsonFileStore::new(&config.storage.path);
    tracing::debug!("Store at {}", store.path().display());

    MatchEngine::new(SystemClock, rng, store).with_years_ahead(config.milestones.years_ahead)
}

fn fail(e: &MatchError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn run(command: Command, engine: &mut CliEngine) -> Result<()> {
    match command {
        Command::Sign { date } => {
            let summary = engine.summarize(date)?;
            print_summary("You", &summary);
        }
        Command::Match {
            date1,
            date2,
            breakdown,
        } => {
            let report = engine.check(date1, date2)?;
            print_report(&report, breakdown);
            print_extras(engine, date1, date2, &report);
        }
        Command::Restore => {
            let summary = engine.restore_summary()?;
            if let Some(summary) = &summary {
                print_summary("You", summary);
            }
            let inputs = engine.saved_inputs()?;
            match (engine.restore()?, inputs.person1_date, inputs.person2_date) {
                (Some(report), Some(date1), Some(date2)) => {
                    print_report(&report, false);
                    print_extras(engine, date1, date2, &report);
                }
                _ if summary.is_none() => println!("Nothing saved yet ✨"),
                _ => {}
            }
        }
        Command::Milestones {
            date1,
            date2,
            year,
            now,
        } => {
            let year = if now {
                Some(engine.today().year())
            } else {
                year
            };
            let report = engine.milestones(date1, date2, year);
            println!("📅 {}", report.year);
            println!(
                "  Person 1: {} · {} · {}",
                report.person1.age, report.person1.grade, report.person1.stage
            );
            println!(
                "  Person 2: {} · {} · {}",
                report.person2.age, report.person2.grade, report.person2.stage
            );
            println!("{}", report.message);
            for badge in &report.badges {
                println!("  {} {}", badge.emoji(), badge.label());
            }

            let predictions = engine.future_predictions(date1, date2);
            println!("{}", predictions.marriage);
            println!("{}", predictions.baby);
        }
        Command::Timeline { action } => run_timeline(action, engine)?,
        Command::Profiles { action } => run_profiles(action, engine)?,
    }
    Ok(())
}

fn run_timeline(action: TimelineAction, engine: &mut CliEngine) -> Result<()> {
    match action {
        TimelineAction::List => {
            let timeline = engine.timeline()?;
            if timeline.events().is_empty() {
                println!("No memories yet 💕");
            }
            for event in timeline.events() {
                println!("{} {}  {} [{}]", event.emoji, event.date, event.title, event.id);
                if !event.description.is_empty() {
                    println!("     {}", event.description);
                }
            }
        }
        TimelineAction::Add {
            title,
            date,
            emoji,
            description,
        } => {
            let event = engine.add_timeline_event(EventDraft {
                emoji,
                description,
                ..EventDraft::new(title, date)
            })?;
            println!("✅ Added {} {} ({})", event.emoji, event.title, event.id);
        }
        TimelineAction::Remove { id } => {
            let event = engine.remove_timeline_event(&id)?;
            println!("🗑️ Removed {}", event.title);
        }
    }
    Ok(())
}

fn run_profiles(action: ProfileAction, engine: &mut CliEngine) -> Result<()> {
    match action {
        ProfileAction::List => {
            let book = engine.profiles()?;
            if book.profiles().is_empty() {
                println!("No saved couples yet 💕");
            }
            for profile in book.profiles() {
                println!(
                    "{} {}  {} & {}  {}  [{}]",
                    profile_emoji(profile.compatibility_score),
                    profile.label,
                    profile.person1_date,
                    profile.person2_date,
                    display_score(profile.compatibility_score),
                    profile.id
                );
            }
        }
        ProfileAction::Save {
            date1,
            date2,
            label,
        } => {
            let report = engine.check(date1, date2)?;
            let score = report.outcome.score;
            let label = match label {
                Some(label) => label,
                None => engine.suggested_label(score).to_string(),
            };
            let profile = engine.save_profile(&label, date1, date2, score)?;
            println!(
                "💾 Saved '{}' ({}) as {}",
                profile.label,
                display_score(score),
                profile.id
            );
        }
        ProfileAction::Delete { id } => {
            let profile = engine.delete_profile(&id)?;
            println!("🗑️ Deleted '{}'", profile.label);
        }
        ProfileAction::Check { id } => {
            let report = engine.check_profile(&id)?;
            print_report(&report, true);
        }
    }
    Ok(())
}

fn print_summary(who: &str, summary: &PersonSummary) {
    let highlight = if summary.special { " ✨" } else { "" };
    println!("{}: {} {}{}", who, summary.symbol, summary.sign, highlight);
    println!("  📅 Born on a {}", weekday_name(summary.weekday));
    println!("  🎂 {} years old", summary.age);
}

fn print_report(report: &CompatibilityReport, with_breakdown: bool) {
    print_summary("Person 1", &report.person1);
    print_summary("Person 2", &report.person2);
    println!(
        "⏳ Age gap: {} years, {} days",
        report.age_gap.years, report.age_gap.days
    );

    let outcome = &report.outcome;
    let score = display_score(outcome.score);
    if outcome.score.is_soulmate() {
        println!("{} {}", outcome.symbol, score);
    } else {
        println!("{} {}%", outcome.symbol, score);
    }
    println!("{}", outcome.message);

    if with_breakdown {
        for line in &outcome.breakdown {
            println!("  • {}", line);
        }
    }
}

fn print_extras(
    engine: &mut CliEngine,
    date1: NaiveDate,
    date2: NaiveDate,
    report: &CompatibilityReport,
) {
    if let Some(warning) = engine.age_gap_warning(report) {
        println!("{}", warning);
    }
    if let Some(countdown) = engine.legal_countdown(date1, date2) {
        println!("{}", countdown.message);
    }
}
