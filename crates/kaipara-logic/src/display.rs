//! Location description formatting for the console.

use crate::location::Location;

const NO_EXITS: &str = "There are no obvious exits.";

/// Full "look" output: name, description (when present), exits line.
pub fn location_info(location: &Location) -> String {
    let mut parts = vec![location.name().to_string()];
    if !location.description().is_empty() {
        parts.push(location.description().to_string());
    }
    parts.push(exits_line(location));
    parts.join("\n")
}

/// One-line summary of the available exits, in sorted order.
pub fn exits_line(location: &Location) -> String {
    let exits = location.available_exits();
    match exits.as_slice() {
        [] => NO_EXITS.to_string(),
        [only] => format!("There is an exit to the {}.", only),
        many => format!("There are exits to the {}.", many.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationId;

    #[test]
    fn no_exits_message() {
        let location = Location::new("Wainui", "").unwrap();
        assert_eq!(exits_line(&location), "There are no obvious exits.");
    }

    #[test]
    fn single_exit_message() {
        let mut location = Location::new("Wainui", "").unwrap();
        location.add_exit("east", LocationId(1)).unwrap();
        assert_eq!(exits_line(&location), "There is an exit to the east.");
    }

    #[test]
    fn multiple_exits_sorted() {
        let mut location = Location::new("Kumeu", "").unwrap();
        location.add_exit("west", LocationId(1)).unwrap();
        location.add_exit("east", LocationId(2)).unwrap();
        location.add_exit("north", LocationId(3)).unwrap();
        assert_eq!(
            exits_line(&location),
            "There are exits to the east, north, west."
        );
    }

    #[test]
    fn info_includes_name_description_and_exits() {
        let mut location = Location::new("Kumeu", "Wine country.").unwrap();
        location.add_exit("north", LocationId(1)).unwrap();
        let info = location_info(&location);
        assert_eq!(info, "Kumeu\nWine country.\nThere is an exit to the north.");
    }

    #[test]
    fn info_skips_empty_description() {
        let location = Location::new("Wainui", "").unwrap();
        let info = location_info(&location);
        assert_eq!(info, "Wainui\nThere are no obvious exits.");
    }
}
