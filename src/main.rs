use clap::Parser;
use render_timelapse::args::Args;
use render_timelapse::encoder::CommandEncoder;
use render_timelapse::error::RenderError;
use render_timelapse::logging;
use render_timelapse::render::Renderer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<RenderError>()
            .map(RenderError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> anyhow::Result<()> {
    logging::init()?;

    let config = Args::parse().into_config()?;
    let encoder = CommandEncoder::new(config.encoder_program.clone());

    let renderer = Renderer::new(config, encoder)?;
    let rendered = renderer.render()?;
    println!(
        "Rendered {} frames to {}",
        rendered.frame_count,
        rendered.output_path.display()
    );

    Ok(())
}
