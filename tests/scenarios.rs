use pixel_topology::palette::{AIR_COLOR, LOCATION_COLOR, ROAD_COLOR, WALL_COLOR};
use pixel_topology::search::greedy::GreedyBestFirst;
use pixel_topology::*;

fn cells(cells: &[(i32, i32)]) -> CellSet {
    cells.iter().map(|&c| Cell::from(c)).collect()
}

/// Builds an image from a character map: `L` location, `#` wall, `=` road, anything else air.
fn image_from_map(map: &str) -> ImageGrid {
    let rows = map
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    'L' => LOCATION_COLOR,
                    '#' => WALL_COLOR,
                    '=' => ROAD_COLOR,
                    _ => AIR_COLOR,
                })
                .collect()
        })
        .collect();
    ImageGrid::from_rows(rows).unwrap()
}

#[test]
fn open_three_by_three() {
    let image = ImageGrid::new(3, 3, AIR_COLOR);
    let path = GreedyBestFirst
        .find_path(
            &image,
            &cells(&[(0, 0)]),
            &MovementRules::neumann(),
            &ColorSet::from([AIR_COLOR]),
            &cells(&[(2, 2)]),
        )
        .unwrap()
        .unwrap();
    // Start excluded, goal included: one cell per move
    assert_eq!(path.len(), 4);
    assert_eq!(path[path.len() - 1], Cell::new(2, 2));
    assert!(!path.contains(&Cell::new(0, 0)));
}

#[test]
fn goal_inside_wall_ring() {
    let image = image_from_map(
        "
        .......
        .#####.
        .#...#.
        .#...#.
        .#####.
        .......
        ",
    );
    let result = GreedyBestFirst
        .search(
            &image,
            &cells(&[(0, 0)]),
            &MovementRules::moore(),
            &ColorSet::from([AIR_COLOR]),
            Some(&cells(&[(2, 3)])),
        )
        .unwrap();
    assert!(result.path.is_none());
    // Everything outside the ring was explored
    assert_eq!(result.visited_count(), 7 * 2 + 2 * 4);
}

#[test]
fn single_region_is_one_component() {
    let image = image_from_map(
        "
        LLLL..
        ...L..
        ...LLL
        ",
    );
    let topology = Topology::new(image, TopologyConfig::default());
    let locations = topology.points_of_interest();
    let components = topology.components(&locations).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0], locations);
}

#[test]
fn separated_stations_are_infinitely_far() {
    let image = image_from_map(
        "
        L==#==L
        ===#===
        ",
    );
    let topology = Topology::new(image, TopologyConfig::default());
    let components = topology
        .components(&topology.points_of_interest())
        .unwrap();
    assert_eq!(components.len(), 2);
    let pairs = topology.pairwise_lengths(&components).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].length, PathLength::Infinite);
    assert_eq!(pairs[0].length.to_string(), "inf");
}

#[test]
fn metro_map_report() {
    // Three stations: A and B joined by road, C reached through the road down column 8
    let image = image_from_map(
        "
        LL====LL=...
        ########=...
        ...LL...=...
        ",
    );
    for strategy in [Strategy::Greedy, Strategy::UniformCost] {
        let topology = Topology::new(
            image.clone(),
            TopologyConfig {
                strategy,
                ..TopologyConfig::default()
            },
        );
        let locations = topology.points_of_interest();
        assert_eq!(locations.len(), 6);
        let components = topology.components(&locations).unwrap();
        assert_eq!(components.len(), 3);
        let pairs = topology.pairwise_lengths(&components).unwrap();
        let reps = pairs
            .iter()
            .map(|p| (p.first, p.second))
            .collect::<Vec<_>>();
        assert_eq!(
            reps,
            vec![
                (Cell::new(0, 0), Cell::new(0, 6)),
                (Cell::new(0, 0), Cell::new(2, 3)),
                (Cell::new(0, 6), Cell::new(2, 3)),
            ]
        );
        assert!(pairs.iter().all(|p| p.length.is_finite()));
        assert_eq!(pairs[0].length, PathLength::Finite(5));
    }
}

#[test]
fn repeated_queries_agree() {
    let image = image_from_map(
        "
        L.....#.....
        .####.#.###.
        .#..#...#.L.
        .#..#####.#.
        ............
        ",
    );
    let topology = Topology::new(image, TopologyConfig::default());
    let from = cells(&[(0, 0)]);
    let to = cells(&[(2, 10)]);
    let first = topology.path_between(&from, &to).unwrap();
    assert!(first.is_some());
    for _ in 0..5 {
        assert_eq!(topology.path_between(&from, &to).unwrap(), first);
    }
}
