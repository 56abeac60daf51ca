use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{aircraft, crew, demo, health, maintenance, mechanic, mission},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Air Fleet Operations API"),
    paths(
        health::check_db_connection,
        aircraft::get_aircraft,
        aircraft::add_aircraft,
        aircraft::remove_aircraft,
        aircraft::add_damage,
        aircraft::assign_crew_to_aircraft,
        maintenance::max_avg_downtime,
        maintenance::add_maintenance,
        maintenance::assign_maintenance,
        maintenance::remove_maintenance,
        crew::get_crew,
        crew::get_veterans,
        crew::get_excess_roles,
        crew::add_crew,
        crew::update_rank,
        mechanic::get_mechanic,
        mechanic::max_working_hours,
        mechanic::get_mechanic_status,
        mechanic::add_mechanic,
        mechanic::assign_task,
        mission::get_missions,
        mission::add_mission,
        mission::fly,
        demo::get_demotable,
        demo::initiate_demotable,
        demo::insert_demotable,
        demo::update_name_demotable,
        demo::count_demotable,
    ),
    tags(
        (name = "health", description = "Database connectivity"),
        (name = "aircraft", description = "Aircraft, damage and crew assignments"),
        (name = "maintenance", description = "Maintenance records"),
        (name = "crew", description = "Crew members"),
        (name = "mechanic", description = "Mechanics and logged work"),
        (name = "mission", description = "Missions and flights"),
        (name = "demo", description = "Scratch table for smoke tests"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-db-connection", get(health::check_db_connection))
        .route("/get_aircraft", get(aircraft::get_aircraft))
        .route("/add-aircraft", post(aircraft::add_aircraft))
        .route("/remove-aircraft", post(aircraft::remove_aircraft))
        .route("/add-damage", post(aircraft::add_damage))
        .route(
            "/assign-crew-to-aircraft",
            post(aircraft::assign_crew_to_aircraft),
        )
        .route("/max_avg_downtime", get(maintenance::max_avg_downtime))
        .route("/add-maintenance", post(maintenance::add_maintenance))
        .route("/assign-maintenance", post(maintenance::assign_maintenance))
        .route("/remove-maintenance", post(maintenance::remove_maintenance))
        .route("/get_crew", get(crew::get_crew))
        .route("/get_Veterans", get(crew::get_veterans))
        .route("/excess_Roles", get(crew::get_excess_roles))
        .route("/add-crew", post(crew::add_crew))
        .route("/update-rank", post(crew::update_rank))
        .route("/get_mechanic", get(mechanic::get_mechanic))
        .route("/max_working_hours", get(mechanic::max_working_hours))
        .route("/get_Mechanic_Status", get(mechanic::get_mechanic_status))
        .route("/add-mechanic", post(mechanic::add_mechanic))
        .route("/assign-task", post(mechanic::assign_task))
        .route("/mission", get(mission::get_missions))
        .route("/add-mission", post(mission::add_mission))
        .route("/fly", post(mission::fly))
        .route("/demotable", get(demo::get_demotable))
        .route("/initiate-demotable", post(demo::initiate_demotable))
        .route("/insert-demotable", post(demo::insert_demotable))
        .route("/update-name-demotable", post(demo::update_name_demotable))
        .route("/count-demotable", get(demo::count_demotable))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
