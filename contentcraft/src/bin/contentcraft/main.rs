mod cli;
mod logger;
mod render;

use clap::Parser;
use cli::{AudienceCommand, BrandCommand, Cli, Command, SeoCommand};
use contentcraft::config::AppConfig;
use contentcraft::tools::{
    DemographicAdaptationRequest, HeaderAnalysisRequest, MetaTagRequest, ReadabilityRequest,
    SloganCheckRequest, ToneAnalysisRequest,
};
use contentcraft::{ContentCraft, CraftError, FormSession, Tool};
use serde::Serialize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// 2 when the user can fix the problem, 1 otherwise
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CraftError>() {
        Some(e) if e.is_user_correctable() => 2,
        _ => 1,
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(kind) = cli.provider {
        config.provider.kind = kind;
    }
    if let Some(model) = cli.model {
        config.provider.model = Some(model);
    }

    let credentials = config.credentials();
    if !credentials.is_available() {
        eprintln!("{}", render::CREDENTIAL_BANNER);
    }

    let craft = config.build_craft(credentials)?;
    let json = cli.json;

    match cli.command {
        Command::Dashboard => print!("{}", render::dashboard(craft.brand())),
        Command::Routes => print!("{}", render::routes()),
        Command::Status => print_status(&config, &craft),
        Command::Generate(args) => match submit(&craft, &args.into_brief()).await {
            Ok(output) => emit(json, &output, render::generated_content)?,
            Err(err) => {
                if let Some(raw) = err.raw_response() {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&render::raw_reply_json(raw))?);
                    } else {
                        print!("{}", render::raw_reply(raw));
                    }
                }
                return Err(err.into());
            }
        },
        Command::Seo(SeoCommand::Meta { input, keywords }) => {
            let output = submit(&craft, &MetaTagRequest::new(input.read()?, keywords)).await?;
            emit(json, &output, render::meta_tags)?;
        }
        Command::Seo(SeoCommand::Headers { input }) => {
            let output = submit(&craft, &HeaderAnalysisRequest::new(input.read()?)).await?;
            emit(json, &output, render::header_analysis)?;
        }
        Command::Seo(SeoCommand::Readability { input }) => {
            let output = submit(&craft, &ReadabilityRequest::new(input.read()?)).await?;
            emit(json, &output, render::readability)?;
        }
        Command::Brand(BrandCommand::Tone { input }) => {
            let output = submit(&craft, &ToneAnalysisRequest::new(input.read()?)).await?;
            emit(json, &output, render::tone)?;
        }
        Command::Brand(BrandCommand::Slogan { input }) => {
            let output = submit(&craft, &SloganCheckRequest::new(input.read()?)).await?;
            emit(json, &output, render::slogan)?;
        }
        Command::Audience(AudienceCommand::Adapt {
            input,
            demographics,
        }) => {
            let request = DemographicAdaptationRequest::new(input.read()?, demographics);
            let output = submit(&craft, &request).await?;
            emit(json, &output, render::adaptation)?;
        }
    }

    Ok(())
}

/// Submit one form and hand back its result
async fn submit<T>(craft: &ContentCraft, input: &T) -> Result<T::Output, CraftError>
where
    T: Tool,
    T::Output: Clone,
{
    let session = FormSession::<T>::new(craft.clone());
    tracing::info!("Generating {}...", T::CONTEXT);
    session.submit(input).await
}

fn emit<O: Serialize>(json: bool, output: &O, text: fn(&O) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        print!("{}", text(output));
    }
    Ok(())
}

fn print_status(config: &AppConfig, craft: &ContentCraft) {
    let info = craft.info();
    let generation = craft.generation_config();

    println!("Provider:    {} ({})", info.name, config.provider.kind);
    println!("Model:       {}", craft.model());
    if let Some(api_base) = &config.provider.api_base {
        println!("API base:    {}", api_base);
    }
    println!(
        "Credential:  {} (from {})",
        if craft.can_submit() { "configured" } else { "missing" },
        config.api_key_envs().join(", ")
    );
    println!(
        "Generation:  temperature={} top_p={} top_k={}",
        generation.temperature, generation.top_p, generation.top_k
    );
    println!("Brand:       {}", craft.brand().short_name);
}
