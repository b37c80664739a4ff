// src/application/commands/record_commands.rs

use crate::application::error_handling::{CommandResult, ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::store::Record;

/// Whole table, in insertion order
pub fn list_records<R: Record>(state: &AppState) -> Vec<R> {
    state.venue_service.list::<R>()
}

pub fn get_record<R: Record>(state: &AppState, key: u32) -> CommandResult<R> {
    state
        .venue_service
        .get::<R>(key)
        .ok_or_else(|| ErrorResponse::not_found(&format!("{} with ID {}", R::KIND, key)))
}

pub fn add_record<R: Record>(state: &AppState, record: R) -> CommandResult<Vec<R>> {
    state.venue_service.add(record).to_error_response()?;
    Ok(list_records(state))
}

pub fn update_record<R: Record>(state: &AppState, key: u32, values: R) -> CommandResult<Vec<R>> {
    state.venue_service.update(key, values).to_error_response()?;
    Ok(list_records(state))
}

pub fn delete_record<R: Record>(state: &AppState, key: u32) -> CommandResult<Vec<R>> {
    state.venue_service.delete::<R>(key).to_error_response()?;
    Ok(list_records(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::db::create_memory_pool;
    use crate::domain::{Client, Film, Screening, Show};
    use crate::services::LogNotifier;
    use crate::store::EntityStore;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::build(
            EntityStore::with_sample_data(),
            Arc::new(create_memory_pool().unwrap()),
            Arc::new(LogNotifier),
        )
    }

    #[test]
    fn test_add_returns_refreshed_table() {
        let state = state();

        let films = add_record(&state, Film::new("Brief Encounter", "Romance")).unwrap();

        assert_eq!(films.len(), 3);
        assert_eq!(films[2].id, 3);
        assert_eq!(films[2].title, "Brief Encounter");
    }

    #[test]
    fn test_refusals_carry_store_message() {
        let state = state();

        let response = add_record(
            &state,
            Show::new("2025-05-01", "19:30", "Double Bill", "Theater 1", "10.0/0%", "Two films")
                .for_screening(1)
                .for_film(1),
        )
        .unwrap_err();
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(
            response.message,
            "A Show can be associated with either a Screening or a Film, but not both."
        );

        let response = delete_record::<Film>(&state, 1).unwrap_err();
        assert_eq!(response.error_type, ErrorType::Dependency);
        assert_eq!(
            response.message,
            "Cannot delete Film with ID 1 because it has associated Screenings, Shows, Film Orders."
        );

        let response = update_record(&state, 9, Client::new("A", "B", "C")).unwrap_err();
        assert_eq!(response.error_type, ErrorType::NotFound);
        assert_eq!(response.message, "Client with ID 9 not found.");
    }

    #[test]
    fn test_update_and_delete() {
        let state = state();

        let screenings = update_record(
            &state,
            2,
            Screening::new(2, "2025-04-13", "21:00", "Theater 1"),
        )
        .unwrap();
        assert_eq!(screenings[1].time, "21:00");

        let screenings = delete_record::<Screening>(&state, 2).unwrap();
        assert_eq!(screenings.len(), 1);
        assert_eq!(get_record::<Screening>(&state, 2).unwrap_err().error_type, ErrorType::NotFound);
    }
}
