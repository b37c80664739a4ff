// src/application/commands/report_commands.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::application::error_handling::{CommandResult, ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::{BoxOfficeSummary, GroupBookingDetails, ShowSales};

// ============================================================================
// BOX OFFICE (store)
// ============================================================================

pub fn get_box_office_summary(state: &AppState) -> BoxOfficeSummary {
    state.statistics_service.box_office_summary()
}

pub fn get_show_sales(state: &AppState, show_id: u32) -> CommandResult<ShowSales> {
    state
        .statistics_service
        .show_sales(show_id)
        .ok_or_else(|| ErrorResponse::not_found(&format!("Show with ID {}", show_id)))
}

pub fn get_low_sales_shows(state: &AppState, threshold: u32) -> Vec<String> {
    state.statistics_service.low_sales_shows(threshold)
}

// ============================================================================
// MARKETING (database)
// ============================================================================

pub fn get_marketing_efforts(
    state: &AppState,
    event_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> CommandResult<BTreeMap<String, i64>> {
    state
        .marketing_service
        .marketing_efforts(event_id, start, end)
        .to_error_response()
}

pub fn get_ticket_sales_trends(
    state: &AppState,
    event_id: &str,
    forecast_window: &str,
) -> CommandResult<BTreeMap<NaiveDate, i64>> {
    state
        .marketing_service
        .ticket_sales_trends(event_id, forecast_window)
        .to_error_response()
}

pub fn get_low_sales_alerts(state: &AppState) -> CommandResult<Vec<String>> {
    state.marketing_service.low_sales_alerts().to_error_response()
}

pub fn get_events_needing_promotion(state: &AppState) -> CommandResult<Vec<String>> {
    state
        .marketing_service
        .events_needing_promotion()
        .to_error_response()
}

pub fn get_customer_satisfaction(
    state: &AppState,
    event_instance_id: &str,
    aspect: &str,
) -> CommandResult<f64> {
    state
        .marketing_service
        .customer_satisfaction(event_instance_id, aspect)
        .to_error_response()
}

pub fn get_group_booking_details(
    state: &AppState,
    event_name: &str,
    group_id: &str,
) -> CommandResult<GroupBookingDetails> {
    state
        .marketing_service
        .group_booking_details(event_name, group_id)
        .to_error_response()?
        .ok_or_else(|| {
            ErrorResponse::not_found(&format!("Group booking {} for '{}'", group_id, event_name))
        })
}

pub fn get_companies_booked_for_event(
    state: &AppState,
    event_name: &str,
) -> CommandResult<Vec<String>> {
    state
        .marketing_service
        .companies_booked_for_event(event_name)
        .to_error_response()
}
