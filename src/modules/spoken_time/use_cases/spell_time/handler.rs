// Application entry point for the spell-time use case.
//
// Purpose
// - Parse the submitted text and render it as a phrase.
//
// Responsibilities
// - Validate before rendering; malformed text never reaches the lexicon.

use crate::modules::spoken_time::core::spell::spell;
use crate::modules::spoken_time::core::time_of_day::{InvalidFormat, TimeOfDay};

pub fn handle(text: &str) -> Result<String, InvalidFormat> {
    let time: TimeOfDay = text.parse()?;
    Ok(spell(&time))
}

#[cfg(test)]
mod spell_time_handler_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("00:00", "midnight")]
    #[case("12:00", "noon")]
    #[case("00:01", "twelve oh one am")]
    #[case("01:15", "one fifteen am")]
    #[case("15:07", "three oh seven pm")]
    #[case("22:47", "ten forty seven pm")]
    #[case("23:59", "eleven fifty nine pm")]
    #[case("13:30", "one thirty pm")]
    fn it_should_spell_well_formed_times(#[case] text: &str, #[case] phrase: &str) {
        assert_eq!(handle(text).expect("handle failed"), phrase);
    }

    #[rstest]
    #[case("25:99")]
    #[case("noon")]
    #[case("12-30")]
    fn it_should_reject_malformed_times(#[case] text: &str) {
        let result = handle(text);
        assert_eq!(
            result,
            Err(InvalidFormat {
                input: text.to_string()
            })
        );
    }
}
