use clap::Parser;
use demodeck::{ContentConfig, generate, load_content};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "demodeck", version, about = "Assemble a demo/pitch PowerPoint deck")]
struct Cli {
    /// Output .pptx path (overwritten if it exists)
    #[arg(short, long, required_unless_present = "print_content")]
    output: Option<PathBuf>,

    /// Directory of screenshots named after slide numbers (4.png, Slide_05.jpg, ...)
    #[arg(long)]
    screenshots: Option<PathBuf>,

    /// Palette: default or iceberg
    #[arg(long, default_value = "default")]
    palette: String,

    /// YAML content file; template text is used for anything it leaves out
    #[arg(long)]
    content: Option<PathBuf>,

    /// Print the template content as YAML and exit
    #[arg(long, default_value_t = false)]
    print_content: bool,
}

fn run(cli: Cli) -> demodeck::Result<()> {
    if cli.print_content {
        let yaml = serde_saphyr::to_string(&ContentConfig::default())
            .map_err(|e| demodeck::Error::Other(e.to_string()))?;
        print!("{}", yaml);
        return Ok(());
    }

    let Some(output) = cli.output else {
        return Err(demodeck::Error::Configuration(
            "--output is required".to_string(),
        ));
    };

    let content = match cli.content {
        Some(ref path) => load_content(path)?,
        None => ContentConfig::default(),
    };

    let summary = generate(
        &content,
        &cli.palette,
        cli.screenshots.as_deref(),
        &output,
    )?;

    println!("✓ Generated: {}", summary.output.display());
    println!(
        "  {} slides, palette {}, {} embedded screenshot(s)",
        summary.slides, summary.palette, summary.images
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
