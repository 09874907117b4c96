use std::path::Path;

use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui};

use trilattice::lattice::{self, Batch};
use trilattice::params::{parse_hex_color, Params};
use trilattice::prng::MersenneTwister;

const DESIGN_SIZE: f64 = 1024.0; // fixed design-space extent for snapping
const BASE_SCALE: f64 = 8.0; // smallest lattice scale; doubles up to DESIGN_SIZE / 8
const PRESET_PATH: &str = "trilattice.json";

/// Slider state for the parameter panel. Colors stay in the preset; the
/// panel only edits the numeric fields.
struct Panel {
    seed: f32,
    count: f32,
    spawn: f32,
    offset: f32,
    fills: f32,
}

impl Panel {
    fn new(params: &Params) -> Self {
        Panel {
            seed: params.seed as f32,
            count: params.count as f32,
            spawn: params.spawn as f32,
            offset: params.offset as f32,
            fills: params.fills as f32,
        }
    }

    /// Builds the per-frame snapshot handed to the core, clamped at this
    /// boundary so the core never sees out-of-range values.
    fn snapshot(&self, colors: &Params) -> Params {
        Params {
            seed: self.seed.round() as u32,
            fg: colors.fg.clone(),
            stroke: colors.stroke.clone(),
            bg: colors.bg.clone(),
            count: self.count.round() as u32,
            spawn: self.spawn.round() as u32,
            offset: f64::from(self.offset.round()),
            fills: f64::from(self.fills),
        }
        .clamped()
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Trilattice".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

fn color_from(rgba: [f32; 4], alpha: f32) -> Color {
    Color::new(rgba[0], rgba[1], rgba[2], alpha)
}

fn draw_help(text_color: Color) {
    let lines = [
        "Trilattice Controls:",
        "P - Pause/unpause",
        "S - Save preset",
        "H - Toggle help",
        "Q - Quit",
    ];
    let y_start = 220.0;
    let line_height = 20.0;
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, y_start + i as f32 * line_height, 20.0, text_color);
    }
}

fn draw_batches(batches: &[(f32, Batch)], stroke: [f32; 4], fg: [f32; 4]) {
    let cx = screen_width() / 2.0;
    let cy = screen_height() / 2.0;
    for (alpha, batch) in batches {
        let stroke_color = color_from(stroke, *alpha);
        for seg in &batch.strokes {
            draw_line(
                seg.from.x as f32 + cx,
                seg.from.y as f32 + cy,
                seg.to.x as f32 + cx,
                seg.to.y as f32 + cy,
                1.0,
                stroke_color,
            );
        }
        let fill_color = color_from(fg, *alpha);
        for tri in &batch.fills {
            draw_triangle(
                vec2(tri.a.x as f32 + cx, tri.a.y as f32 + cy),
                vec2(tri.b.x as f32 + cx, tri.b.y as f32 + cy),
                vec2(tri.c.x as f32 + cx, tri.c.y as f32 + cy),
                fill_color,
            );
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let preset = Path::new(PRESET_PATH);
    let params = if preset.exists() {
        match Params::load(preset) {
            Ok(p) => {
                println!("Loaded preset from {}", PRESET_PATH);
                p
            }
            Err(err) => {
                println!("Ignoring preset {}: {}", PRESET_PATH, err);
                Params::default()
            }
        }
    } else {
        Params::default()
    };

    let mut panel = Panel::new(&params);
    let mut rng = MersenneTwister::new(params.seed);
    let mut batches: Vec<(f32, Batch)> = Vec::new();
    let mut vertex_count = 0usize;

    let mut paused = false;
    let mut show_help = false;
    let mut frame_count: u64 = 0;
    let mut last_fps_time = get_time();
    let mut fps = 0.0;

    loop {
        if is_key_pressed(KeyCode::Q) {
            std::process::exit(0);
        }
        if is_key_pressed(KeyCode::P) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::H) {
            show_help = !show_help;
        }

        root_ui().window(hash!(), vec2(10.0, 10.0), vec2(280.0, 160.0), |ui| {
            ui.label(None, "Params");
            ui.slider(hash!(), "seed", 0f32..64f32, &mut panel.seed);
            ui.slider(hash!(), "count", 1f32..100f32, &mut panel.count);
            ui.slider(hash!(), "spawn", 1f32..100f32, &mut panel.spawn);
            ui.slider(hash!(), "offset", 1f32..500f32, &mut panel.offset);
            ui.slider(hash!(), "fills", 0.75f32..1.0f32, &mut panel.fills);
        });

        let snapshot = panel.snapshot(&params);

        if is_key_pressed(KeyCode::S) {
            match snapshot.save(preset) {
                Ok(()) => println!("Saved preset to {}", PRESET_PATH),
                Err(err) => println!("Could not save preset: {}", err),
            }
        }

        let bg = parse_hex_color(&snapshot.bg).unwrap_or([0.0, 0.0, 0.0, 1.0]);
        let fg = parse_hex_color(&snapshot.fg).unwrap_or([1.0, 1.0, 1.0, 1.0]);
        let stroke = parse_hex_color(&snapshot.stroke).unwrap_or([1.0, 1.0, 1.0, 1.0]);
        clear_background(color_from(bg, 1.0));

        if !paused {
            // One complete synchronous pass: reseed, scatter, snap at each
            // concentric scale. The next frame redoes all of it.
            rng.reseed(snapshot.seed);
            let vertices = lattice::scatter(
                &mut rng,
                snapshot.count,
                snapshot.spawn,
                snapshot.offset,
                f64::from(screen_width()),
                get_time() * 1000.0,
            );
            vertex_count = vertices.len();

            batches.clear();
            let max_scale = DESIGN_SIZE / BASE_SCALE;
            let mut scale = BASE_SCALE;
            while scale <= max_scale {
                let alpha = ((1.0 - scale / max_scale) * 0.1) as f32;
                let batch = lattice::snap_to_lattice(
                    &mut rng,
                    &vertices,
                    scale,
                    DESIGN_SIZE,
                    DESIGN_SIZE,
                    snapshot.fills,
                );
                batches.push((alpha, batch));
                scale *= 2.0;
            }
        }

        draw_batches(&batches, stroke, fg);

        let text_color = color_from(fg, 1.0);
        let fps_text = format!("FPS: {:.1}", fps);
        let dims = measure_text(&fps_text, None, 16, 1.0);
        draw_text(
            &fps_text,
            screen_width() - dims.width - 10.0,
            20.0,
            16.0,
            text_color,
        );

        if paused {
            let text = "PAUSED";
            let dims = measure_text(text, None, 16, 1.0);
            draw_text(
                text,
                screen_width() - dims.width - 10.0,
                40.0,
                16.0,
                text_color,
            );
        }

        if show_help {
            draw_help(text_color);
        }

        frame_count += 1;
        if frame_count % 60 == 0 {
            let now = get_time();
            let elapsed = now - last_fps_time;
            fps = 60.0 / elapsed;
            last_fps_time = now;

            if !paused {
                let strokes: usize = batches.iter().map(|(_, b)| b.strokes.len()).sum();
                let fills: usize = batches.iter().map(|(_, b)| b.fills.len()).sum();
                println!("Performance metrics:");
                println!("  FPS: {:.1}", fps);
                println!("  Frame time: {:.2}ms", elapsed * 1000.0 / 60.0);
                println!("  Vertices: {}", vertex_count);
                println!("  Strokes: {} Fills: {}", strokes, fills);
            }
        }

        next_frame().await
    }
}
