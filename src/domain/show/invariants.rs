use super::entity::Show;
use crate::domain::{require_text, DomainError, DomainResult};

/// Validates the field-level Show invariants.
/// Reference resolution happens in the store, which can see the other tables.
pub fn validate_show(show: &Show) -> DomainResult<()> {
    require_text(&show.date, "date", "Show date")?;
    require_text(&show.start_time, "start_time", "Show start time")?;
    require_text(&show.name, "name", "Show name")?;
    require_text(&show.venue, "venue", "Show venue")?;
    require_text(&show.price_discount, "price_discount", "Show price/discount")?;
    require_text(&show.description, "description", "Show description")?;
    validate_single_reference(show)?;
    Ok(())
}

/// At most one of screening_id / film_id may be set
fn validate_single_reference(show: &Show) -> DomainResult<()> {
    if show.screening_id.is_some() && show.film_id.is_some() {
        return Err(DomainError::validation(
            "screening_or_film",
            "A Show can be associated with either a Screening or a Film, but not both.",
        ));
    }
    Ok(())
}

/// Invariants that must hold true for a stored Show:
///
/// 1. All six text fields are non-empty
/// 2. Neither link, or exactly one link, is set
/// 3. A set link resolves to an existing record (checked by the store)
/// 4. The show cannot be removed while sales or held seats point at it

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Show {
        Show::new(
            "2025-04-10",
            "18:00",
            "The Great Show",
            "Theater 1",
            "20.0/10%",
            "A great show",
        )
    }

    #[test]
    fn test_valid_show_without_links() {
        assert!(validate_show(&sample()).is_ok());
    }

    #[test]
    fn test_single_link_is_valid() {
        assert!(validate_show(&sample().for_film(1)).is_ok());
        assert!(validate_show(&sample().for_screening(1)).is_ok());
    }

    #[test]
    fn test_both_links_fail() {
        let show = sample().for_film(1).for_screening(1);
        let error = validate_show(&show).unwrap_err();
        assert_eq!(error.rule(), Some("screening_or_film"));
    }

    #[test]
    fn test_empty_fields_fail() {
        let mut show = sample();
        show.venue = String::new();
        assert_eq!(validate_show(&show).unwrap_err().rule(), Some("venue"));

        let mut show = sample();
        show.description = "  ".to_string();
        assert_eq!(validate_show(&show).unwrap_err().rule(), Some("description"));
    }
}
