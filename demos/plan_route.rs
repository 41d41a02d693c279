//! Demonstration of the full route planning pipeline on a small dungeon.

use keyroute::grid::{Cell, Coord, GridMap};
use keyroute::{RouteSolver, SolverConfig};

const DUNGEON: &str = "
    K..#....C
    ...#.##..
    ...#.#K..
    .....#...
    ####.####
    C....K..C
";

fn main() {
    let grid = GridMap::from_ascii(DUNGEON).expect("dungeon parses");
    let start = Coord::new(4, 3);

    println!("Dungeon ({}x{}), agent at {start}:", grid.width(), grid.height());
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| {
                let c = Coord::new(x, y);
                if c == start {
                    return '@';
                }
                match grid.get(c) {
                    Some(Cell::Wall) => '#',
                    Some(Cell::Key) => 'K',
                    Some(Cell::Chest) => 'C',
                    _ => '.',
                }
            })
            .collect();
        println!("  {row}");
    }

    let solver = RouteSolver::new(SolverConfig {
        seed: 7,
        ..SolverConfig::default()
    });
    let plan = solver.plan(&grid, start).expect("dungeon is solvable");

    println!("\nVisiting order (node index @ cell):");
    let graph = keyroute::graph::ItemGraph::build(&grid).expect("graph builds");
    for &node in plan.route.prefix(&graph) {
        println!("  {:?} {} @ {}", graph.kind(node), node, graph.coord(node));
    }
    println!("\nPrefix distance: {} steps", plan.route.distance);

    println!("Moves ({}):", plan.moves.len());
    let rendered: Vec<String> = plan.moves.iter().map(ToString::to_string).collect();
    println!("  {}", rendered.join(", "));
}
