pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_armament::Entity as AircraftArmament;
pub use super::aircraft_damage::Entity as AircraftDamage;
pub use super::aircraft_model::Entity as AircraftModel;
pub use super::crew::Entity as Crew;
pub use super::demo::Entity as Demo;
pub use super::fly::Entity as Fly;
pub use super::maintenance::Entity as Maintenance;
pub use super::mechanic::Entity as Mechanic;
pub use super::mechanic_availability::Entity as MechanicAvailability;
pub use super::mechanic_name::Entity as MechanicName;
pub use super::mission::Entity as Mission;
pub use super::mission_weather::Entity as MissionWeather;
pub use super::operate::Entity as Operate;
pub use super::performed::Entity as Performed;
