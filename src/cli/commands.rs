use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::config::Config;
use crate::pipeline::{PlanEvent, PlanOrchestrator};
use crate::planner::{PlanRequest, PlanWeeks};

use super::args::Cli;
use super::render;
use super::util;

pub(crate) async fn run(cli: Cli, config: Config) -> Result<()> {
    if cli.show_config {
        show_config(&config)?;
        return Ok(());
    }

    let weeks = PlanWeeks::try_from(cli.weeks)?;
    let orchestrator = PlanOrchestrator::from_config(&config)?;

    if cli.interactive {
        let mut next = Some(cli.topic_text()).filter(|t| !t.is_empty());
        loop {
            let topic = match next.take() {
                Some(topic) => topic,
                None => match util::prompt_topic()? {
                    Some(topic) => topic,
                    None => break,
                },
            };

            // A failed cycle should not end the session.
            if let Err(err) = generate(&orchestrator, &cli, weeks, &topic).await {
                eprintln!("❌ {err:#}");
            }
        }
        orchestrator.cache().end_session();
        return Ok(());
    }

    let topic = cli.topic_text();
    if topic.is_empty() {
        bail!("Topic cannot be empty. Usage: edugenie [OPTIONS] <TOPIC>...");
    }
    generate(&orchestrator, &cli, weeks, &topic).await
}

async fn generate(
    orchestrator: &PlanOrchestrator,
    cli: &Cli,
    weeks: PlanWeeks,
    topic: &str,
) -> Result<()> {
    let request = PlanRequest::new(topic, weeks, cli.style, cli.proficiency)?;

    if !cli.json {
        println!("⏳ Creating your personalized learning plan...");
    }

    let run = orchestrator.generate_plan(&request).await?;
    log_events(&run.events);

    if cli.json {
        let json =
            serde_json::to_string_pretty(&run.plan).context("Failed to serialize learning plan")?;
        println!("{json}");
        for message in run.diagnostics() {
            eprintln!("{message}");
        }
    } else {
        render::print_run(&run);
    }

    Ok(())
}

fn log_events(events: &[PlanEvent]) {
    for event in events {
        match event {
            PlanEvent::PromptBuilt { chars } => debug!(chars, "prompt built"),
            PlanEvent::CompletionReceived { chars } => debug!(chars, "completion received"),
            PlanEvent::WeeksParsed { count } => debug!(count, "weeks parsed"),
            PlanEvent::CacheHit { courses } => debug!(courses, "course cache hit"),
            PlanEvent::CacheMiss => debug!("course cache miss"),
            PlanEvent::CoursesFound { count } => debug!(count, "courses found"),
            PlanEvent::SearchDegraded { platform, message } => {
                debug!(%platform, %message, "course search degraded")
            }
        }
    }
}

fn show_config(config: &Config) -> Result<()> {
    println!("📋 Current configuration ({}):", Config::config_path()?.display());
    println!("   LLM endpoint:    {}", config.llm.base_url);
    println!("   LLM API key:     {}", util::mask_api_key(&config.llm.api_key));
    println!("   Model:           {}", config.models.model);
    println!("   Temperature:     {}", config.models.temperature);
    println!("   Max tokens:      {}", config.models.max_tokens);
    println!("   Timeout:         {}s", config.llm.timeout_secs);
    println!("   Search endpoint: {}", config.search.base_url);
    println!("   Search API key:  {}", util::mask_api_key(&config.search.api_key));
    println!("   Cache TTL:       {}s", config.search.cache_ttl_secs);
    Ok(())
}
