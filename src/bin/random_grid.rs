//! A* on a randomly walled grid
//!
//! Scatters walls at a fixed density, keeps start and end open (the
//! input layer's obligation before binding them) and reports the
//! outcome. On dense grids "no path" is a perfectly normal result.

use rand::Rng;

use grid_astar::utils::Visualizer;
use grid_astar::AStarPlanner;

const WALL_DENSITY: f64 = 0.3;
const SHOW_ANIMATION: bool = true;

fn main() {
    println!("Random grid A* start!!");

    let width = 30;
    let height = 20;
    let mut planner = AStarPlanner::new(width, height).unwrap();

    let mut rng = rand::thread_rng();
    let mut wall_count = 0;
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(WALL_DENSITY) {
                planner.set_wall(x, y, true).unwrap();
                wall_count += 1;
            }
        }
    }
    println!("Created {} walls", wall_count);

    // start and end must be open cells before they are bound
    let (sx, sy) = (1, 1);
    let (ex, ey) = (width - 2, height - 2);
    planner.set_wall(sx, sy, false).unwrap();
    planner.set_wall(ex, ey, false).unwrap();
    planner.set_start(sx, sy).unwrap();
    planner.set_end(ex, ey).unwrap();

    planner.run().unwrap();

    match planner.path() {
        Some(path) => {
            println!(
                "Path found with {} cells ({} steps)",
                path.len(),
                path.step_count()
            );
        }
        None => println!("No path found!"),
    }

    if SHOW_ANIMATION {
        let mut vis = Visualizer::new();
        vis.set_title("A* on a Random Grid");
        vis.plot_scene(&planner, planner.path());

        let output_path = "random_grid_result.png";
        vis.save_png(output_path, 800, 600).unwrap();
        println!("Plot saved to: {}", output_path);

        vis.show().unwrap();
    }

    println!("Random grid A* finish!!");
}
