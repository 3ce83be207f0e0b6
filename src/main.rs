//! WordPulse CLI entry point

use anyhow::{Context, Result};
use wordpulse::benchmark::Benchmark;
use wordpulse::config::cli::Cli;
use wordpulse::config::toml::load_config;
use wordpulse::config::validator::validate_config;
use wordpulse::config::Config;
use wordpulse::coordinator::WordCounter;
use wordpulse::input::read_text;
use wordpulse::logging;
use wordpulse::output::json::{write_json_report, JsonReport};
use wordpulse::output::text;
use wordpulse::worker::parallelism::resolve_workers;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = load_config(&cli)?;

    // Logger before validation so its warnings are shown
    logging::init(cli.verbose, config.runtime.debug)?;

    validate_config(&config).context("Configuration validation failed")?;

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let workers = resolve_workers(config.workers.threads);
    let counter = WordCounter::new(workers)
        .context("Failed to create word counter")?
        .with_strategy(config.workers.strategy);

    if config.runtime.dry_run {
        text::print_configuration(config, workers);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    log::debug!("{}", text::format_configuration(config, workers));

    let input = read_text(&config.input.path).context("Failed to load input text")?;

    let count = counter.count_detailed(&input).context("Word count failed")?;
    log::debug!("{}", text::format_workers(&count));

    if !config.output.quiet {
        match config.output.top {
            Some(k) => text::print_top_words(&count.frequencies, k),
            None => text::print_frequencies(&count.frequencies),
        }
    }

    let benchmark = if config.benchmark.enabled {
        let report = Benchmark::new(counter, config.benchmark.runs)
            .context("Failed to set up benchmark")?
            .run(&input)
            .context("Benchmark failed")?;

        text::print_results(&report);
        if config.output.show_latency {
            println!();
            text::print_latency(&report, Some(count.tokens));
        }
        Some(report)
    } else {
        None
    };

    if let Some(ref path) = config.output.json_output {
        let report = JsonReport::build(config, workers, &count, benchmark.as_ref());
        write_json_report(path, &report)?;
    }

    Ok(())
}
