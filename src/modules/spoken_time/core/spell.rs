// Pure rendering of a time of day as an English phrase.
//
// Purpose
// - Turn a validated `TimeOfDay` into its spoken-word phrase.
//
// Responsibilities
// - Special-case midnight and noon before any lexicon lookup.
// - Otherwise join hour word, minute words, and meridiem with single spaces.
// - Never perform input or output.

use crate::modules::spoken_time::core::lexicon::{ONES, TENS};
use crate::modules::spoken_time::core::time_of_day::TimeOfDay;

pub fn spell(time: &TimeOfDay) -> String {
    if time.is_midnight() {
        return "midnight".to_string();
    }
    if time.is_noon() {
        return "noon".to_string();
    }

    let hour_word = ONES[time.display_hour() as usize];
    let minute_word = minute_words(time.minute());
    let meridiem = time.meridiem();

    format!("{hour_word} {minute_word} {meridiem}")
}

fn minute_words(minute: u8) -> String {
    match minute {
        0 => "o'clock".to_string(),
        1..=9 => format!("oh {}", ONES[minute as usize]),
        10..=19 => ONES[minute as usize].to_string(),
        _ => {
            let tens_word = TENS[(minute / 10) as usize];
            match minute % 10 {
                0 => tens_word.to_string(),
                ones_digit => format!("{tens_word} {}", ONES[ones_digit as usize]),
            }
        }
    }
}

#[cfg(test)]
mod spell_phrase_tests {
    use super::*;
    use rstest::rstest;

    fn time(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).expect("in range")
    }

    #[rstest]
    fn it_should_spell_midnight_and_noon_without_a_meridiem() {
        assert_eq!(spell(&time(0, 0)), "midnight");
        assert_eq!(spell(&time(12, 0)), "noon");
    }

    #[rstest]
    #[case(1, 0, "one o'clock am")]
    #[case(17, 0, "five o'clock pm")]
    fn it_should_spell_exact_hours_as_o_clock(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] phrase: &str,
    ) {
        assert_eq!(spell(&time(hour, minute)), phrase);
    }

    #[rstest]
    #[case(8, 5, "eight oh five am")]
    #[case(15, 7, "three oh seven pm")]
    fn it_should_prefix_single_digit_minutes_with_oh(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] phrase: &str,
    ) {
        assert_eq!(spell(&time(hour, minute)), phrase);
    }

    #[rstest]
    #[case(9, 10, "nine ten am")]
    #[case(14, 11, "two eleven pm")]
    #[case(7, 19, "seven nineteen am")]
    fn it_should_spell_the_teens_as_one_word(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] phrase: &str,
    ) {
        assert_eq!(spell(&time(hour, minute)), phrase);
    }

    #[rstest]
    #[case(11, 20, "eleven twenty am")]
    #[case(10, 25, "ten twenty five am")]
    #[case(16, 34, "four thirty four pm")]
    #[case(14, 40, "two forty pm")]
    #[case(6, 55, "six fifty five am")]
    fn it_should_join_tens_and_ones_for_twenty_plus_minutes(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] phrase: &str,
    ) {
        assert_eq!(spell(&time(hour, minute)), phrase);
    }

    #[rstest]
    fn it_should_spell_midnight_hour_minutes_as_twelve_am() {
        assert_eq!(spell(&time(0, 1)), "twelve oh one am");
        assert_eq!(spell(&time(0, 30)), "twelve thirty am");
    }
}
