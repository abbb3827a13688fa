//! A* grid pathfinding demo
//!
//! Fixed scenario: a vertical wall with a single gap between start and
//! end. Plays the input layer's role, so coordinates are validated here
//! before the engine is touched.

use grid_astar::utils::Visualizer;
use grid_astar::AStarPlanner;

const SHOW_ANIMATION: bool = true;

fn main() {
    println!("A* grid pathfinding start!!");

    let width = 20;
    let height = 15;
    let mut planner = AStarPlanner::new(width, height).unwrap();

    // vertical wall across the middle with one gap at y = 7
    for y in 0..height {
        if y != 7 {
            planner.set_wall(10, y, true).unwrap();
        }
    }

    // start and end are known open cells in this layout
    planner.set_start(2, 2).unwrap();
    planner.set_end(17, 12).unwrap();

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
        vis.set_title("A* Grid Pathfinding");
        vis.plot_scene(&planner, planner.path());

        let output_path = "a_star_result.png";
        vis.save_png(output_path, 800, 600).unwrap();
        println!("Plot saved to: {}", output_path);

        vis.show().unwrap();
    }

    println!("A* grid pathfinding finish!!");
}
