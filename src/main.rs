#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use line_drawing::Bresenham;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::grid::{Grid, GridError};
use crate::sim::Simulation;
use crate::window::{create_window, SCREEN_HEIGHT, SCREEN_WIDTH};

mod cell;
mod engine;
mod grid;
mod randomizer;
mod sim;
mod window;

/// Wall-clock pause between generations once the simulation runs.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) =
        create_window("Conway's Game of Life", &event_loop);

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?;

    let mut life = Simulation::new(SCREEN_HEIGHT as usize, SCREEN_WIDTH as usize)?;
    info!(
        "{}x{} grid ready for seeding",
        life.grid().rows(),
        life.grid().columns()
    );

    println!("Click or drag to seed cells, then press ENTER to start.");
    println!("\nControls:\nENTER: start\nP: pause\nSPACE: advance one generation\nC: clear\nR: reseed at random\nESC: close");

    let mut paused = false;
    let mut last_tick = Instant::now();
    let mut draw_state: Option<bool> = None;

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            draw_grid(life.grid(), pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our game state and request a redraw.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::Return) {
                if !life.started() {
                    println!("simulation started");
                }
                life.begin();
            }
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                match paused {
                    true => println!("paused"),
                    false => println!("unpaused"),
                }
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                // Space is frame-step, so ensure we're paused
                life.begin();
                paused = true;
                println!("advanced one generation");
            }
            if input.key_pressed(VirtualKeyCode::C) {
                life.reset();
                paused = false;
                println!("grid cleared, seed and press ENTER to restart");
            }
            if input.key_pressed(VirtualKeyCode::R) {
                life.randomize();
                println!("grid reseeded at random");
            }
            // Handle mouse. This is a bit involved since we support simple
            // line drawing while the button stays held.
            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    let prev_x = mx - dx;
                    let prev_y = my - dy;

                    let (mx_i, my_i) = pixels
                        .window_pos_to_pixel((mx, my))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    let (px_i, py_i) = pixels
                        .window_pos_to_pixel((prev_x, prev_y))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    (
                        (mx_i as isize, my_i as isize),
                        (px_i as isize, py_i as isize),
                    )
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                debug!("mouse click at {:?}", mouse_cell);
                match life.toggle(mouse_cell.1 as usize, mouse_cell.0 as usize) {
                    Ok(alive) => draw_state = Some(alive),
                    Err(err) => {
                        error!("toggle failed: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                debug!("draw at {:?} => {:?}", mouse_prev_cell, mouse_cell);
                // If they either released (finishing the stroke) or are still
                // in the middle of drawing, keep going.
                if release || held {
                    if let Err(err) = paint_line(&mut life, mouse_prev_cell, mouse_cell, draw_alive)
                    {
                        error!("painting failed: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                // If they let go or are otherwise not clicking anymore, stop drawing.
                if release || !held {
                    debug!("draw end");
                    draw_state = None;
                }
            }
            // Adjust high DPI factor
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            // The tick clock; SPACE forces a step regardless of it.
            if input.key_pressed(VirtualKeyCode::Space) {
                life.tick();
            } else if !paused && last_tick.elapsed() >= TICK_INTERVAL {
                life.tick();
                last_tick = Instant::now();
            }
            window.request_redraw();
        }
    });
}

/// Render sink: one framebuffer pixel per cell, white when alive.
fn draw_grid(grid: &Grid, frame: &mut [u8]) {
    debug_assert_eq!(frame.len(), 4 * grid.cells().len());
    for (cell, pixel) in grid.cells().iter().zip(frame.chunks_exact_mut(4)) {
        let color = if cell.is_alive() {
            [0xff, 0xff, 0xff, 0xff]
        } else {
            [0, 0, 0, 0xff]
        };
        pixel.copy_from_slice(&color);
    }
}

/// Paint a stroke of cells between two framebuffer positions, clamping the
/// start into the grid and stopping at the first point outside it.
fn paint_line(
    life: &mut Simulation,
    from: (isize, isize),
    to: (isize, isize),
    alive: bool,
) -> Result<(), GridError> {
    let columns = life.grid().columns() as isize;
    let rows = life.grid().rows() as isize;
    let x0 = from.0.max(0).min(columns - 1);
    let y0 = from.1.max(0).min(rows - 1);
    for (x, y) in Bresenham::new((x0, y0), to) {
        if !(0..columns).contains(&x) || !(0..rows).contains(&y) {
            break;
        }
        life.paint(y as usize, x as usize, alive)?;
    }
    Ok(())
}
