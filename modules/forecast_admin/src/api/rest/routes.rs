use axum::routing::{get, post, put};
use axum::{Extension, Router};

use crate::api::rest::handlers::{
    contracts, downloaded_data, forecast_results, forecast_systems, forecast_zones,
    hindcast_points, ports, users,
};
use crate::domain::service::Services;

/// Mount every forecast_admin route onto `router`.
///
/// The services travel as `Extension`s; `UsersService` is present on every route
/// because the `Requester` extractor resolves tokens through it.
pub fn register_routes(router: Router, services: Services) -> anyhow::Result<Router> {
    let module = Router::new()
        // users
        .route("/users/login", post(users::login))
        .route("/users/me", get(users::me))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/password", put(users::change_password))
        // ports
        .route("/ports", get(ports::list_ports).post(ports::create_port))
        .route(
            "/ports/{id}",
            get(ports::get_port)
                .put(ports::update_port)
                .delete(ports::delete_port),
        )
        // contracts
        .route(
            "/contracts",
            get(contracts::list_contracts).post(contracts::create_contract),
        )
        .route("/contracts/my", get(contracts::my_contracts))
        .route("/contracts/assign", post(contracts::assign_contract))
        .route(
            "/contracts/remove-from-user",
            axum::routing::delete(contracts::remove_contract_from_user),
        )
        .route(
            "/contracts/{id}",
            get(contracts::get_contract)
                .put(contracts::update_contract)
                .delete(contracts::delete_contract),
        )
        // forecast systems
        .route(
            "/forecast-systems",
            get(forecast_systems::list_systems).post(forecast_systems::create_system),
        )
        .route(
            "/forecast-systems/by-contract/{contract_id}",
            get(forecast_systems::system_by_contract),
        )
        .route(
            "/forecast-systems/{id}",
            get(forecast_systems::get_system)
                .put(forecast_systems::update_system)
                .delete(forecast_systems::delete_system),
        )
        // forecast zones
        .route(
            "/forecast-zones",
            get(forecast_zones::list_zones).post(forecast_zones::create_zone),
        )
        .route(
            "/forecast-zones/by-system/{system_id}",
            get(forecast_zones::zones_by_system),
        )
        .route(
            "/forecast-zones/{id}",
            get(forecast_zones::get_zone)
                .put(forecast_zones::update_zone)
                .delete(forecast_zones::delete_zone),
        )
        // forecast results
        .route(
            "/forecast-results",
            get(forecast_results::list_results).post(forecast_results::create_result),
        )
        .route(
            "/forecast-results/latest-by-zone/{zone_id}",
            get(forecast_results::latest_by_zone),
        )
        .route(
            "/forecast-results/{id}",
            get(forecast_results::get_result).delete(forecast_results::delete_result),
        )
        // hindcast points
        .route(
            "/hindcast-points",
            get(hindcast_points::list_points).post(hindcast_points::create_point),
        )
        .route(
            "/hindcast-points/{id}",
            get(hindcast_points::get_point)
                .put(hindcast_points::update_point)
                .delete(hindcast_points::delete_point),
        )
        // downloaded data
        .route(
            "/downloaded-data",
            get(downloaded_data::list_data).post(downloaded_data::add_data),
        )
        .route(
            "/downloaded-data/latest/by-point/{point_id}",
            get(downloaded_data::latest_by_point),
        )
        .route(
            "/downloaded-data/{id}",
            get(downloaded_data::get_data).delete(downloaded_data::delete_data),
        )
        .layer(Extension(services.users))
        .layer(Extension(services.ports))
        .layer(Extension(services.contracts))
        .layer(Extension(services.forecast_systems))
        .layer(Extension(services.forecast_zones))
        .layer(Extension(services.forecast_results))
        .layer(Extension(services.hindcast_points))
        .layer(Extension(services.downloaded_data));

    Ok(router.merge(module))
}
