// src/application/commands/booking_commands.rs

use crate::application::error_handling::{CommandResult, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::GroupSale;

/// Book a group onto a show; answers with the show's group sales
pub fn confirm_group_booking(
    state: &AppState,
    group_id: u32,
    show_id: u32,
    number_of_tickets: u32,
) -> CommandResult<Vec<GroupSale>> {
    state
        .booking_service
        .confirm_group_booking(group_id, show_id, number_of_tickets)
        .to_error_response()?;

    Ok(state.booking_service.group_sales_for_show(show_id))
}

/// Withdraw a group sale; answers with the remaining sales of its show
pub fn cancel_group_booking(state: &AppState, group_sale_id: u32) -> CommandResult<Vec<GroupSale>> {
    let removed = state
        .booking_service
        .cancel_group_booking(group_sale_id)
        .to_error_response()?;

    Ok(state.booking_service.group_sales_for_show(removed.show_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::db::create_memory_pool;
    use crate::services::LogNotifier;
    use crate::store::EntityStore;
    use std::sync::Arc;

    #[test]
    fn test_confirm_and_cancel() {
        let state = AppState::build(
            EntityStore::with_sample_data(),
            Arc::new(create_memory_pool().unwrap()),
            Arc::new(LogNotifier),
        );

        let sales = confirm_group_booking(&state, 2, 1, 6).unwrap();
        assert_eq!(sales.len(), 2);

        let sales = cancel_group_booking(&state, sales[1].id).unwrap();
        assert_eq!(sales.len(), 1);

        let response = confirm_group_booking(&state, 1, 404, 6).unwrap_err();
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(response.message, "Show with ID 404 does not exist.");
    }
}
