use crate::domain::School;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Orders schools by latitude descending, north to south. The sort is stable, so equal
/// latitudes retain their input order.
pub fn north_to_south(mut schools: Vec<School>) -> Vec<School> {
    schools.sort_by_key(|school| Reverse(OrderedFloat(school.location.latitude)));
    schools
}

pub fn print_report(schools: &[School]) {
    println!();
    println!("Schools ordered from North to South:");
    println!("====================================");
    for school in schools {
        println!("{}: {}, {}", school.name, school.location.latitude, school.location.longitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoLocation;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn school(name: &str, latitude: f64) -> School {
        School {
            name: name.to_string(),
            location: GeoLocation {
                latitude,
                longitude: -80.1,
            },
        }
    }

    #[test]
    fn north_to_south_orders_by_latitude_descending() {
        let schools = vec![school("Alpha", 26.5), school("Beta", 26.8), school("Gamma", 26.2)];

        let sorted = north_to_south(schools);

        let names = sorted.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn north_to_south_keeps_equal_latitudes_in_input_order() {
        let schools = vec![school("Alpha", 26.5), school("Beta", 26.5), school("Gamma", 26.9)];

        let sorted = north_to_south(schools);

        let names = sorted.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![school("Alpha", 26.5)])]
    #[case(vec![school("Alpha", 26.5), school("Beta", 26.8), school("Gamma", 26.2)])]
    fn north_to_south_preserves_length_and_adjacent_order(#[case] schools: Vec<School>) {
        let len = schools.len();

        let sorted = north_to_south(schools);

        assert_eq!(sorted.len(), len);
        for pair in sorted.windows(2) {
            assert!(pair[0].location.latitude >= pair[1].location.latitude);
        }
    }

    #[test]
    fn north_to_south_is_deterministic() {
        let schools = vec![school("Alpha", 26.5), school("Beta", 26.8), school("Gamma", 26.2)];

        let first = north_to_south(schools.clone());
        let second = north_to_south(schools);

        assert_eq!(first, second);
    }
}
