use lexis_protocol::{Source, SourceList};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map, map_res, verify},
    multi::separated_list0,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::ParseError;

fn author(input: &str) -> IResult<&str, &str> {
    verify(
        map(take_while1(|c: char| c != ',' && c != ';'), str::trim),
        |s: &str| !s.is_empty(),
    )(input)
}

fn page(input: &str) -> IResult<&str, u32> {
    delimited(multispace0, map_res(digit1, str::parse::<u32>), multispace0)(input)
}

fn source(input: &str) -> IResult<&str, Source> {
    map(separated_pair(author, char(','), page), |(author, page)| {
        Source::new(author, page)
    })(input)
}

/// Parses `"Tastevin, 620; Amorim, 179"` into a [`SourceList`].
///
/// Blank input yields an empty list.
pub fn parse_source_list(input: &str) -> Result<SourceList, ParseError> {
    let mut parser = all_consuming(delimited(
        multispace0,
        separated_list0(char(';'), source),
        multispace0,
    ));
    parser(input)
        .map(|(_, sources)| SourceList::from(sources))
        .map_err(|e| ParseError::from_nom(input, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_list() {
        let list = parse_source_list("Tastevin, 620; Amorim, 179; Stradelli, 364").unwrap();
        assert_eq!(
            list.0,
            vec![
                Source::new("Tastevin", 620),
                Source::new("Amorim", 179),
                Source::new("Stradelli", 364),
            ]
        );
    }

    #[test]
    fn test_multiword_author() {
        let list = parse_source_list("Leetra Indígena. n. 17, 73").unwrap();
        assert_eq!(list.0, vec![Source::new("Leetra Indígena. n. 17", 73)]);
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_source_list("").unwrap().is_empty());
        assert!(parse_source_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lists() {
        assert!(parse_source_list("Tastevin 620").is_err());
        assert!(parse_source_list("Tastevin, p. 620").is_err());
        assert!(parse_source_list("Tastevin, 620;").is_err());
        assert!(parse_source_list(", 620").is_err());

        let err = parse_source_list("Tastevin, 620; Amorim").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                input: "Tastevin, 620; Amorim".to_string(),
                offset: 13,
            }
        );
    }
}
