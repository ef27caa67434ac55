/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A "word" starts at any letter not preceded by another letter, so
/// `"ST. MARY'S RIVER"` becomes `"St. Mary'S River"`, matching how the
/// station names have always been displayed.
pub(crate) fn title_case(name: &str) -> String {
    let mut previous_is_letter = false;
    name.chars()
        .flat_map(|c| {
            let mapped: Vec<char> = if previous_is_letter {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_is_letter = c.is_alphabetic();
            mapped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_upstream_names() {
        assert_eq!(title_case("SAN FRANCISCO"), "San Francisco");
        assert_eq!(title_case("the battery"), "The Battery");
        assert_eq!(title_case("ST. MARY'S RIVER"), "St. Mary'S River");
        assert_eq!(title_case("pier 21, galveston"), "Pier 21, Galveston");
        assert_eq!(title_case(""), "");
    }
}
