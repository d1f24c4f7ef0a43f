use clap::Parser;

mod auth;
mod commands;
mod core;
mod postman;

#[derive(Parser)]
#[command(name = "pmtoken")]
#[command(
    about = "Creates a copy of a Postman environment JSON file with an Azure client credentials token variable"
)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = crate::core::exit_code::ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);
    commands::generate::execute(&args.generate).await
}
