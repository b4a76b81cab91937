use clap::Parser;
use regform::config::form_file;
use regform::utils::{logger, validation::Validate};
use regform::{
    CliConfig, FormState, RegistrationWorkflow, SubmissionOutcome, SubmitAttempt, Submitter,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting regform CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let input = form_file::load_form_input(&config.input)?;
    tracing::debug!("Loaded form input from: {}", config.input);

    let workflow = RegistrationWorkflow::new(Submitter::new(config));
    let mut state = FormState::new(input);

    match workflow.submit(&mut state).await {
        SubmitAttempt::Rejected => {
            eprintln!("❌ The form was not submitted:");
            for error in &state.errors {
                eprintln!("   {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
        SubmitAttempt::Completed(SubmissionOutcome::Success(message)) => {
            println!("✅ {}", message);
        }
        SubmitAttempt::Completed(SubmissionOutcome::Failure(message)) => {
            eprintln!("❌ {}", message);
            std::process::exit(2);
        }
    }

    Ok(())
}
