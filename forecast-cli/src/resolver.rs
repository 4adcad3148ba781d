use forecast_core::{Choice, Location, WeatherProvider, parse_choice};
use tracing::{debug, warn};

use crate::console::{Console, PromptError};

pub const CHOICE_PROMPT: &str = "> ";

/// Turn a free-text query into one location, asking the user to pick when
/// the geocoder returns several candidates.
///
/// Returns `Ok(None)` when nothing was found or the lookup failed; the user
/// has already been told why. Only an interrupted menu prompt is an error.
pub async fn resolve_city<C: Console + ?Sized>(
    provider: &dyn WeatherProvider,
    console: &mut C,
    query: &str,
    limit: usize,
) -> Result<Option<Location>, PromptError> {
    let mut candidates = match provider.geocode(query, limit).await {
        Ok(candidates) => candidates,
        Err(err) => {
            warn!(query, error = %err, "geocoding failed");
            console.say(&format!("Error searching for city: {err}"));
            return Ok(None);
        }
    };

    if candidates.is_empty() {
        console.say(&format!("Error: City '{query}' not found."));
        return Ok(None);
    }

    if candidates.len() == 1 {
        return Ok(candidates.pop());
    }

    console.say("Multiple matches found, which city did you mean?");
    for (i, city) in candidates.iter().enumerate() {
        console.say(&format!("{}. {}, {}", i + 1, city.name, city.country));
    }

    let answer = console.ask(CHOICE_PROMPT)?;
    let choice = parse_choice(&answer, candidates.len());
    match choice {
        Choice::Selected(_) => {}
        Choice::OutOfRange => console.say("Invalid choice. Using first city."),
        Choice::NotANumber => console.say("Invalid input. Using first city."),
    }

    debug!(?choice, "disambiguation answered");
    Ok(Some(candidates.swap_remove(choice.index())))
}
