//! Statistics use cases.
//!
//! Town group placement for players, per-group text queries and the
//! server-wide town count. Only [`NotReady`](crate::entities::NotReady)
//! escapes; absence is reported through the sentinels below.

use std::sync::Arc;

use crate::entities::{Resolver, TownFilter};

mod player_town;
mod town_coordinates;
mod town_count;
mod town_mayor;
mod town_nation;

pub use player_town::PlayerTown;
pub use town_coordinates::TownCoordinates;
pub use town_count::TownCount;
pub use town_mayor::TownMayor;
pub use town_nation::TownNation;

/// Reported when a town has no home block.
pub const NOT_SET_TEXT: &str = "Not Set";

/// Reported when a town has no nation or no mayor.
pub const NONE_TEXT: &str = "None";

/// Container for statistics use cases.
pub struct StatisticsUseCases {
    pub player_town: Arc<PlayerTown>,
    pub mayor: Arc<TownMayor>,
    pub coordinates: Arc<TownCoordinates>,
    pub nation: Arc<TownNation>,
    pub town_count: Arc<TownCount>,
}

impl StatisticsUseCases {
    pub fn new(
        player_town: Arc<PlayerTown>,
        mayor: Arc<TownMayor>,
        coordinates: Arc<TownCoordinates>,
        nation: Arc<TownNation>,
        town_count: Arc<TownCount>,
    ) -> Self {
        Self {
            player_town,
            mayor,
            coordinates,
            nation,
            town_count,
        }
    }

    /// Wires every statistics use case over the same resolver and filter.
    pub fn from_entities(resolver: Arc<Resolver>, filter: Arc<TownFilter>) -> Self {
        Self::new(
            Arc::new(PlayerTown::new(resolver.clone(), filter.clone())),
            Arc::new(TownMayor::new(resolver.clone(), filter.clone())),
            Arc::new(TownCoordinates::new(resolver.clone(), filter.clone())),
            Arc::new(TownNation::new(resolver.clone(), filter.clone())),
            Arc::new(TownCount::new(resolver, filter)),
        )
    }
}
