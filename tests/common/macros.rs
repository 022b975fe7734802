/// Asserts that the world's food counter equals the food lying on field
/// cells plus the food carried by ants.
#[macro_export]
macro_rules! assert_food_conserved {
    ($world:expr) => {
        assert_eq!(
            $world.food_quantity(),
            $world.field_food_quantity() + $world.carried_food(),
            "Food counter drifted from field + carried food at tick {}",
            $world.tick
        );
    };
}

/// Asserts that the colony has exactly the expected number of ants.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.population(), $count, "Population count mismatch");
    };
}

/// Asserts that every ant stands on a cell inside the grid.
#[macro_export]
macro_rules! assert_ants_on_grid {
    ($world:expr) => {
        let (width, height) = $world.size();
        for ant in $world.ants() {
            assert!(
                ant.location.x < width && ant.location.y < height,
                "Ant {} left the grid at {}",
                ant.id,
                ant.location
            );
        }
    };
}
