mod cli;
mod config;

use cli::Args;
use config::RunOptions;
use issue_notifier::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use issue_notifier::adapters::outbound::filesystem::FileSystemReader;
use issue_notifier::adapters::outbound::in_memory::{
    InMemoryIssueCache, InMemoryRuleRepository, InMemoryUserRepository, RecordingStatisticsSink,
};
use issue_notifier::adapters::outbound::messaging::SubscriberNotificationService;
use issue_notifier::application::dto::{AnalysisFixture, RunOutcome};
use issue_notifier::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use issue_notifier::application::read_models::{RunReport, RunReportBuilder};
use issue_notifier::application::use_cases::SendIssueNotificationsUseCase;
use issue_notifier::ports::outbound::{FixtureReader, ProgressReporter};
use issue_notifier::shared::error::ExitCode;
use issue_notifier::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_for(&args)?;
    let options = config::merge(&args, config.as_ref())?;

    if options.quiet {
        replay(&args, &options, QuietProgressReporter::new())
    } else {
        eprintln!("📂 Loading analysis fixture: {}", args.fixture.display());
        replay(&args, &options, StderrProgressReporter::new())
    }
}

fn replay<PR: ProgressReporter>(args: &Args, options: &RunOptions, reporter: PR) -> Result<()> {
    let AnalysisFixture {
        request,
        rules,
        users,
        subscribers,
        issues,
    } = FileSystemReader::new().read_fixture(&args.fixture)?;

    // Create adapters (Dependency Injection)
    let notification_service =
        SubscriberNotificationService::new(request.analysis.project_uuid(), subscribers);
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(issues),
        InMemoryRuleRepository::new(rules),
        InMemoryUserRepository::new(users),
        notification_service,
        reporter,
    );

    let mut statistics = RecordingStatisticsSink::new();
    let response = use_case.execute(&request, &mut statistics)?;

    let report = RunReportBuilder::build(
        &request,
        &response,
        &use_case.notification_service().deliveries(),
    );

    if !options.quiet {
        eprintln!("{}", FormatterFactory::progress_message(options.format));
    }
    let output = FormatterFactory::create(options.format).format(&report)?;
    PresenterFactory::create(PresenterType::from_output(options.output.clone()))
        .present(&output)?;

    if !options.quiet {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    let outcome = report.outcome.as_str();
    let outcome = match report.outcome {
        RunOutcome::Completed => outcome.green().to_string(),
        RunOutcome::NoSubscribers => outcome.yellow().to_string(),
        RunOutcome::SkippedBranch => outcome.dimmed().to_string(),
    };
    eprintln!();
    eprintln!(
        "{} {} on {}: {}",
        "Run".bold(),
        report.run_id,
        report.project.key.cyan(),
        outcome
    );
    for counter in &report.counters {
        eprintln!("   {:<24} {}", counter.name, counter.value);
    }
    eprintln!(
        "   {:<24} {}",
        "total deliveries".bold(),
        report.total_deliveries()
    );
}
