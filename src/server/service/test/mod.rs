use crate::server::{
    error::{AppError, FailureKind},
    model::{
        aircraft::{AssignCrewParams, CreateAircraftParams},
        crew::UpdateRankParams,
        demo::{InsertDemoParams, RenameDemoParams},
        maintenance::AssignMaintenanceParams,
        mechanic::{AssignTaskParams, CreateMechanicParams},
        mission::FlyParams,
    },
    service::{
        aircraft::AircraftService, crew::CrewService, demo::DemoService, health::HealthService,
        maintenance::MaintenanceService, mechanic::MechanicService, mission::MissionService,
    },
};
use entity::sea_orm_active_enums::AvailabilityStatus;
use test_utils::{builder::TestBuilder, factory};
