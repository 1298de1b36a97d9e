use log::{info, warn};
use mandelbrot_zoom::{ExplorerSession, MandelbrotConfig, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let mut session = ExplorerSession::new(MandelbrotConfig::default())?;

    let centre = Point { x: 300, y: 300 };
    info!("pointer at {:?} -> {:?}", centre, session.hover(centre));

    // drag across the seahorse valley
    session.press(Point { x: 280, y: 250 });
    let image = session.release(Point { x: 330, y: 290 })?;
    info!("zoomed image: {} bytes", image.buffer_size());

    // a click with no movement is rejected and the view stays put
    session.press(centre);
    if let Err(err) = session.release(centre) {
        warn!("{}", err);
    }

    info!("final view: {:?}", session.viewport());

    Ok(())
}
