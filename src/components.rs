use crate::error::TopologyError;
use crate::image_grid::ImageGrid;
use crate::movement::MovementRules;
use crate::palette::ColorSet;
use crate::search::greedy::GreedyBestFirst;
use crate::search::GridSearch;
use crate::CellSet;
use log::info;

/// Partitions `locations` into groups that are mutually reachable over pixels whose color is in
/// `colors`.
///
/// Repeatedly takes the first remaining location as root, flood fills from it and collects the
/// remaining locations that were visited into one component. The root always belongs to its own
/// component, even when none of its neighbours are passable, and cells outside `locations` never
/// end up in a component, so the components are disjoint and together cover exactly `locations`.
/// Components are returned in the order their roots appear in `locations`.
pub fn label_components(
    image: &ImageGrid,
    locations: &CellSet,
    rules: &MovementRules,
    colors: &ColorSet,
) -> Result<Vec<CellSet>, TopologyError> {
    let mut remaining = locations.clone();
    let mut components = Vec::new();
    while let Some(&root) = remaining.first() {
        let starts = CellSet::from_iter([root]);
        let result = GreedyBestFirst.flood_fill(image, &starts, rules, colors)?;
        let mut component = starts;
        component.extend(result.visited().filter(|c| remaining.contains(*c)));
        remaining.retain(|c| !component.contains(c));
        components.push(component);
    }
    info!(
        "Labelled {} locations into {} components",
        locations.len(),
        components.len()
    );
    Ok(components)
}
