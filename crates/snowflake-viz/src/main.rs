use macroquad::prelude::*;
use snowflake_viz::{ScreenMapping, TourConfig, TourPlayback, draw_region, init_logging, run};
use tracing::error;

#[macroquad::main("Snowflake Tour")]
async fn main() {
    let config = match TourConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    init_logging(&config.log_level);

    let tour_run = match run(&config) {
        Ok(tour_run) => tour_run,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    let region = tour_run.region;

    let mut playback = TourPlayback::new();
    playback.show_all(tour_run.tour.len());

    loop {
        playback.update(tour_run.tour.len());

        clear_background(Color::from_rgba(20, 20, 30, 255));

        let mapping = ScreenMapping::fit(&region, screen_width(), screen_height(), 40.0);
        playback.render(&tour_run.leaves, &tour_run.tour, &mapping);
        draw_region(&region, &mapping);

        draw_text(
            &format!("Snowflake Tour - seed {}", config.seed),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        playback.draw_ui(&tour_run.tour, &tour_run.stats, 50.0);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 135.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
