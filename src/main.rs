use clap::Parser;
use employee_management::utils::{logger, validation::Validate};
use employee_management::{
    AppError, CliConfig, ConsoleSink, OutputFormat, OutputSink, ScriptConfig, ScriptRunner,
    Transcript,
};

fn main() {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Run failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), AppError> {
    config.validate()?;

    let script = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading script from: {}", path);
            ScriptConfig::from_file(path)?
        }
        None => ScriptConfig::default(),
    };
    let runner = ScriptRunner::new(script);

    let mut sink = ConsoleSink::stdout();
    match config.format {
        OutputFormat::Text => {
            runner.run(&mut sink)?;
        }
        OutputFormat::Json => {
            let mut transcript = Transcript::new();
            runner.run(&mut transcript)?;
            sink.write_line(&transcript.to_json()?)?;
        }
    }
    sink.flush()
}
